// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Look-ahead bounds testing for aspect-locked boundary snaps.

use kurbo::Rect;

use crate::aspect;
use crate::edge::EdgeOrientation;
use crate::window::CropWindow;

/// Whether snapping `under_test` to the image boundary, while keeping the
/// window at `ratio`, would push some edge of the resulting rectangle out of
/// the image bounds.
///
/// Side-handle gestures call this before committing a symmetric boundary
/// snap: `moved_edge` is the edge the pointer is dragging (with `coordinate`
/// its current position) and `under_test` is the adjacent edge that came
/// within snapping distance. The hypothetical rectangle snaps `under_test`
/// to its bound, shifts the paired edge by the snap offset, holds the
/// uninvolved edges, and rederives `under_test` from the aspect formula;
/// the result is checked edge-by-edge against `image_bounds`.
///
/// Only the eight horizontal/vertical pairings of a dragged side edge with
/// an adjacent edge are defined. Every other combination reports `true`,
/// the conservative answer that suppresses the snap.
#[must_use]
pub fn would_exceed_bounds(
    window: &CropWindow,
    moved_edge: EdgeOrientation,
    image_bounds: Rect,
    ratio: f64,
    coordinate: f64,
    under_test: EdgeOrientation,
) -> bool {
    use EdgeOrientation::{Bottom, Left, Right, Top};

    let offset = match under_test {
        Left => image_bounds.x0 - coordinate,
        Top => image_bounds.y0 - coordinate,
        Right => image_bounds.x1 - coordinate,
        Bottom => image_bounds.y1 - coordinate,
    };

    let (left, top, right, bottom) = match (under_test, moved_edge) {
        (Left, Top) => {
            let top = image_bounds.y0;
            let bottom = window.bottom - offset;
            let right = window.right;
            let left = aspect::calculate_left(top, right, bottom, ratio);
            (left, top, right, bottom)
        }
        (Left, Bottom) => {
            let bottom = image_bounds.y1;
            let top = window.top - offset;
            let right = window.right;
            let left = aspect::calculate_left(top, right, bottom, ratio);
            (left, top, right, bottom)
        }
        (Top, Left) => {
            let left = image_bounds.x0;
            let right = window.right - offset;
            let bottom = window.bottom;
            let top = aspect::calculate_top(left, right, bottom, ratio);
            (left, top, right, bottom)
        }
        (Top, Right) => {
            let right = image_bounds.x1;
            let left = window.left - offset;
            let bottom = window.bottom;
            let top = aspect::calculate_top(left, right, bottom, ratio);
            (left, top, right, bottom)
        }
        (Right, Top) => {
            let top = image_bounds.y0;
            let bottom = window.bottom - offset;
            let left = window.left;
            let right = aspect::calculate_right(left, top, bottom, ratio);
            (left, top, right, bottom)
        }
        (Right, Bottom) => {
            let bottom = image_bounds.y1;
            let top = window.top - offset;
            let left = window.left;
            let right = aspect::calculate_right(left, top, bottom, ratio);
            (left, top, right, bottom)
        }
        (Bottom, Left) => {
            let left = image_bounds.x0;
            let right = window.right - offset;
            let top = window.top;
            let bottom = aspect::calculate_bottom(left, top, right, ratio);
            (left, top, right, bottom)
        }
        (Bottom, Right) => {
            let right = image_bounds.x1;
            let left = window.left - offset;
            let top = window.top;
            let bottom = aspect::calculate_bottom(left, top, right, ratio);
            (left, top, right, bottom)
        }
        _ => return true,
    };

    top < image_bounds.y0
        || left < image_bounds.x0
        || bottom > image_bounds.y1
        || right > image_bounds.x1
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

    #[test]
    fn snap_that_fits_reports_in_bounds() {
        // Dragging the top edge of a centered square window; snapping the
        // left side leaves everything comfortably inside the image.
        let window = CropWindow::new(400.0, 100.0, 600.0, 500.0);
        let out = would_exceed_bounds(
            &window,
            EdgeOrientation::Top,
            IMAGE,
            1.0,
            window.top,
            EdgeOrientation::Left,
        );
        assert!(!out);
    }

    #[test]
    fn snap_that_spills_reports_out_of_bounds() {
        // A wide window dragged to the right edge: rederiving the top for a
        // 2:1 ratio after the snap would overshoot the image top.
        let window = CropWindow::new(0.0, -25.0, 500.0, 225.0);
        let out = would_exceed_bounds(
            &window,
            EdgeOrientation::Right,
            IMAGE,
            2.0,
            window.right,
            EdgeOrientation::Top,
        );
        assert!(out);
    }

    #[test]
    fn hypothetical_rectangle_lands_exactly_on_the_boundary() {
        // Dragging the bottom edge with the right side about to snap: the
        // hypothetical rectangle ends flush with the image on both snapped
        // sides, which still counts as in bounds.
        let window = CropWindow::new(400.0, 500.0, 600.0, 900.0);
        let out = would_exceed_bounds(
            &window,
            EdgeOrientation::Bottom,
            IMAGE,
            1.0,
            window.bottom,
            EdgeOrientation::Right,
        );
        assert!(!out);
    }

    #[test]
    fn unenumerated_pairings_default_to_out_of_bounds() {
        use EdgeOrientation::{Bottom, Left, Right, Top};

        let window = CropWindow::new(450.0, 450.0, 550.0, 550.0);
        // A dragged edge is never tested against itself or its opposite.
        for (moved, tested) in [(Left, Left), (Left, Right), (Top, Top), (Top, Bottom)] {
            assert!(would_exceed_bounds(
                &window,
                moved,
                IMAGE,
                1.0,
                window.edge(moved),
                tested,
            ));
        }
    }
}
