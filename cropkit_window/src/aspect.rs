// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-ratio formulas for the crop window.
//!
//! An aspect ratio is always `width / height`. Each `calculate_*` function
//! derives one edge coordinate from the other three so that the resulting
//! rectangle has the requested ratio. Callers guarantee `right > left`,
//! `bottom > top`, and `ratio > 0`; none of these functions guard against
//! degenerate spans.

/// Left edge producing the given ratio with `top`, `right`, and `bottom` fixed.
#[must_use]
pub fn calculate_left(top: f64, right: f64, bottom: f64, ratio: f64) -> f64 {
    right - ratio * (bottom - top)
}

/// Right edge producing the given ratio with `left`, `top`, and `bottom` fixed.
#[must_use]
pub fn calculate_right(left: f64, top: f64, bottom: f64, ratio: f64) -> f64 {
    left + ratio * (bottom - top)
}

/// Top edge producing the given ratio with `left`, `right`, and `bottom` fixed.
#[must_use]
pub fn calculate_top(left: f64, right: f64, bottom: f64, ratio: f64) -> f64 {
    bottom - (right - left) / ratio
}

/// Bottom edge producing the given ratio with `left`, `top`, and `right` fixed.
#[must_use]
pub fn calculate_bottom(left: f64, top: f64, right: f64, ratio: f64) -> f64 {
    top + (right - left) / ratio
}

/// Width of a rectangle with the given vertical span and ratio.
#[must_use]
pub fn calculate_width(top: f64, bottom: f64, ratio: f64) -> f64 {
    ratio * (bottom - top)
}

/// Height of a rectangle with the given horizontal span and ratio.
#[must_use]
pub fn calculate_height(left: f64, right: f64, ratio: f64) -> f64 {
    (right - left) / ratio
}

/// Aspect ratio (`width / height`) of the rectangle with the given edges.
#[must_use]
pub fn aspect_ratio(left: f64, top: f64, right: f64, bottom: f64) -> f64 {
    (right - left) / (bottom - top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_edge_formula_reproduces_the_ratio() {
        // A 200x100 rectangle has ratio 2.
        assert_eq!(aspect_ratio(10.0, 20.0, 210.0, 120.0), 2.0);

        assert_eq!(calculate_left(20.0, 210.0, 120.0, 2.0), 10.0);
        assert_eq!(calculate_right(10.0, 20.0, 120.0, 2.0), 210.0);
        assert_eq!(calculate_top(10.0, 210.0, 120.0, 2.0), 20.0);
        assert_eq!(calculate_bottom(10.0, 20.0, 210.0, 2.0), 120.0);
    }

    #[test]
    fn width_and_height_are_inverse_under_a_fixed_ratio() {
        let ratio = 1.5;
        let width = calculate_width(0.0, 100.0, ratio);
        assert_eq!(width, 150.0);
        assert_eq!(calculate_height(0.0, width, ratio), 100.0);
    }

    #[test]
    fn square_ratio_is_identity_on_spans() {
        assert_eq!(calculate_width(5.0, 45.0, 1.0), 40.0);
        assert_eq!(calculate_height(5.0, 45.0, 1.0), 40.0);
        assert_eq!(aspect_ratio(0.0, 0.0, 40.0, 40.0), 1.0);
    }

    #[test]
    fn derived_edge_round_trips_through_the_ratio() {
        let (left, top, bottom) = (12.5, 7.25, 99.75);
        for ratio in [0.25, 0.5, 1.0, 1.78, 3.0] {
            let right = calculate_right(left, top, bottom, ratio);
            let got = aspect_ratio(left, top, right, bottom);
            assert!(
                (got - ratio).abs() < 1e-12,
                "ratio {ratio} reproduced as {got}"
            );
        }
    }
}
