//! Helper functions for integration tests

use hplc_rs::instrument::{
    FLOW_MAX, FLOW_MIN, MOBILE_PHASE_MAX, MOBILE_PHASE_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
};

/// Assert that two values are close (within tolerance)
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tolerance,
        "{}: {} differs from {} by {} (tolerance {})",
        message,
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Check whether a parameter triple is inside the documented domains
pub fn in_domain(flow: f64, temperature: f64, mobile_phase_percent: f64) -> bool {
    (FLOW_MIN..=FLOW_MAX).contains(&flow)
        && (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature)
        && (MOBILE_PHASE_MIN..=MOBILE_PHASE_MAX).contains(&mobile_phase_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_in_domain() {
        assert!(in_domain(1.0, 35.0, 50.0));
        assert!(!in_domain(0.0, 35.0, 50.0));
        assert!(!in_domain(1.0, 50.0, 50.0));
    }
}
