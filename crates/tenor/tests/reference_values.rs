//! Reference values for each calculation, with the inputs it rejects.

use approx::assert_relative_eq;
use tenor::prelude::*;

const FLOWS: [f64; 5] = [-1000.0, 300.0, 400.0, 500.0, 600.0];

fn assert_invalid<T: std::fmt::Debug>(result: AnalyticsResult<T>) {
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
}

// ============================================================================
// Time value of money
// ============================================================================

#[test]
fn test_present_value() {
    assert_relative_eq!(present_value(1000.0, 0.05, 10.0).unwrap(), 613.91, epsilon = 5e-3);
    assert_invalid(present_value(1000.0, -0.05, 10.0));
    assert_invalid(present_value(1000.0, 0.05, -10.0));
}

#[test]
fn test_future_value() {
    assert_relative_eq!(future_value(1000.0, 0.05, 10.0).unwrap(), 1628.89, epsilon = 5e-3);
    assert_invalid(future_value(1000.0, -0.05, 10.0));
    assert_invalid(future_value(1000.0, 0.05, -10.0));
}

#[test]
fn test_npv() {
    assert_relative_eq!(npv(0.1, &FLOWS).unwrap(), 388.77, epsilon = 5e-3);
    assert_invalid(npv(-1.1, &FLOWS));
}

#[test]
fn test_npv_derivative() {
    assert_relative_eq!(npv_derivative(0.1, &FLOWS).unwrap(), -3363.72, epsilon = 5e-3);
    assert_invalid(npv_derivative(-1.1, &FLOWS));
}

// ============================================================================
// Rate solvers
// ============================================================================

#[test]
fn test_internal_rate_of_return() {
    assert_relative_eq!(internal_rate_of_return(&FLOWS).unwrap(), 0.2489, epsilon = 5e-5);

    let config = SolverConfig::default();
    assert_invalid(internal_rate_of_return_with(&FLOWS, -2.0, &config));
    assert_invalid(internal_rate_of_return_with(
        &FLOWS,
        DEFAULT_IRR_GUESS,
        &config.with_tolerance(-0.01),
    ));
    assert_invalid(internal_rate_of_return_with(
        &FLOWS,
        DEFAULT_IRR_GUESS,
        &config.with_max_iterations(0),
    ));
}

#[test]
fn test_bond_price() {
    assert_relative_eq!(bond_price(1000.0, 0.05, 10, 0.03).unwrap(), 1170.60, epsilon = 5e-3);
    assert_invalid(bond_price(-1000.0, 0.05, 10, 0.03));
    assert_invalid(bond_price(1000.0, -0.05, 10, 0.03));
    assert_invalid(bond_price(1000.0, 0.05, 0, 0.03));
    assert_invalid(bond_price(1000.0, 0.05, 10, -0.03));
}

#[test]
fn test_yield_to_maturity() {
    assert_relative_eq!(
        yield_to_maturity(1000.0, 0.05, 10, 900.0).unwrap(),
        0.0638,
        epsilon = 5e-5
    );
    assert_invalid(yield_to_maturity(-1000.0, 0.05, 10, 900.0));
    assert_invalid(yield_to_maturity(1000.0, -0.05, 10, 900.0));
    assert_invalid(yield_to_maturity(1000.0, 0.05, 0, 900.0));
    assert_invalid(yield_to_maturity(1000.0, 0.05, 10, -900.0));
}

// ============================================================================
// Closed-form valuation and risk
// ============================================================================

#[test]
fn test_dividend_discount_model() {
    assert_relative_eq!(dividend_discount_model(10.0, 0.02, 0.05).unwrap(), 333.33, epsilon = 5e-3);
    assert_invalid(dividend_discount_model(-10.0, 0.02, 0.05));
    assert_invalid(dividend_discount_model(10.0, -0.02, 0.05));
    assert_invalid(dividend_discount_model(10.0, 0.05, 0.04));
}

#[test]
fn test_black_scholes_call() {
    assert_relative_eq!(
        black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
        10.45,
        epsilon = 5e-3
    );
    assert_invalid(black_scholes_call(-100.0, 100.0, 1.0, 0.05, 0.2));
    assert_invalid(black_scholes_call(100.0, -100.0, 1.0, 0.05, 0.2));
    assert_invalid(black_scholes_call(100.0, 100.0, -1.0, 0.05, 0.2));
    assert_invalid(black_scholes_call(100.0, 100.0, 1.0, -0.05, 0.2));
    assert_invalid(black_scholes_call(100.0, 100.0, 1.0, 0.05, -0.2));
}

#[test]
fn test_sharpe_ratio() {
    let returns = [0.05, 0.1, 0.15, 0.1, 0.05];
    assert_relative_eq!(sharpe_ratio(&returns, 0.02).unwrap(), 1.8708, epsilon = 5e-5);
    assert_invalid(sharpe_ratio(&returns, -0.02));
    assert_invalid(sharpe_ratio(&[], 0.02));
}

#[test]
fn test_value_at_risk() {
    let returns = [-0.02, 0.05, -0.01, 0.04, 0.03];
    assert_relative_eq!(value_at_risk(&returns, 0.95).unwrap(), 0.02, epsilon = 5e-3);
    assert_invalid(value_at_risk(&returns, 1.5));
    assert_invalid(value_at_risk(&[], 0.95));
}
