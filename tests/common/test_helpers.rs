//! Helper functions for integration tests

use adre_rs::transport::TransportProfile;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that every concentration of a profile lies in [0, 1]
pub fn assert_profile_bounded(profile: &TransportProfile, message: &str) {
    for (x, c) in profile.pairs() {
        assert!(
            (0.0..=1.0).contains(&c),
            "{}: c = {} out of [0, 1] at x = {}",
            message,
            c,
            x
        );
    }
}

/// Assert that concentrations never increase along the axis
pub fn assert_profile_monotone(profile: &TransportProfile, tolerance: f64, message: &str) {
    let mut previous = f64::INFINITY;
    for (x, c) in profile.pairs() {
        assert!(
            c <= previous + tolerance,
            "{}: concentration rises at x = {} ({} > {})",
            message,
            x,
            c,
            previous
        );
        previous = c;
    }
}
