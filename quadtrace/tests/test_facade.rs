//! The façade re-exports reach the whole engine.

use approx::assert_abs_diff_eq;
use quadtrace::core::{Error, IntegrationSettings};
use quadtrace::math::{calculate, compare_all, IntegrationCalculator, Rule, Scheme};

#[test]
fn calculate_through_facade() {
    let r = calculate(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 9.0, 16.0, 25.0], "simpson_1_3").unwrap();
    assert_abs_diff_eq!(r.value(), 124.0 / 3.0, epsilon = 1e-12);
    assert_eq!(r.scheme(), Scheme::Plain);
}

#[test]
fn compare_all_through_facade() {
    let cmp = compare_all(&[0.0, 1.0, 2.0, 4.0], &[0.0, 1.0, 4.0, 16.0]).unwrap();
    let trapezoid = cmp.get(Rule::Trapezoidal).unwrap().as_ref().unwrap();
    assert_abs_diff_eq!(trapezoid.value(), 23.0, epsilon = 1e-12);
    assert_eq!(trapezoid.method_name(), "Trapezoidal Rule (Adaptive)");
}

#[test]
fn settings_and_errors_through_facade() {
    let settings = IntegrationSettings::default().with_record_steps(false);
    let calc = IntegrationCalculator::with_settings(&[0.0, 0.5, 1.0], &[1.0, 1.0, 1.0], settings).unwrap();
    let r = calc.integrate(Rule::SimpsonOneThird).unwrap();
    assert_abs_diff_eq!(r.value(), 1.0, epsilon = 1e-15);
    assert!(r.steps().is_empty());

    assert_eq!(
        calculate(&[0.0], &[1.0], "trapezoidal").unwrap_err(),
        Error::InsufficientPoints(1)
    );
}
