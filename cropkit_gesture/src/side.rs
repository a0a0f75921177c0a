// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side handle strategies: a single edge follows the pointer, and under an
//! aspect lock the adjacent pair breathes symmetrically.

use cropkit_window::{CropWindow, EdgeOrientation, aspect, would_exceed_bounds};
use kurbo::{Point, Rect};

use crate::handle::UNFIXED_ASPECT_RATIO;

/// Top or bottom handle: the vertical span leads, the width follows.
pub(crate) fn update_horizontal(
    window: &mut CropWindow,
    edge: EdgeOrientation,
    pos: Point,
    image_bounds: Rect,
    snap_radius: f64,
    aspect_ratio: Option<f64>,
) {
    let Some(ratio) = aspect_ratio else {
        let coordinate =
            window.adjusted_coordinate(edge, pos, image_bounds, snap_radius, UNFIXED_ASPECT_RATIO);
        window.set_edge(edge, coordinate);
        return;
    };

    let coordinate = window.adjusted_coordinate(edge, pos, image_bounds, snap_radius, ratio);
    window.set_edge(edge, coordinate);

    // The move broke the proportion; restore it by moving the side edges
    // symmetrically in or out.
    let target_width = aspect::calculate_width(window.top, window.bottom, ratio);
    let half_difference = (target_width - window.width()) / 2.0;
    window.left -= half_difference;
    window.right += half_difference;

    // Left before right; both snaps may fire in one update.
    snap_adjacent(window, edge, EdgeOrientation::Left, image_bounds, snap_radius, ratio);
    snap_adjacent(window, edge, EdgeOrientation::Right, image_bounds, snap_radius, ratio);
}

/// Left or right handle: the horizontal span leads, the height follows.
pub(crate) fn update_vertical(
    window: &mut CropWindow,
    edge: EdgeOrientation,
    pos: Point,
    image_bounds: Rect,
    snap_radius: f64,
    aspect_ratio: Option<f64>,
) {
    let Some(ratio) = aspect_ratio else {
        let coordinate =
            window.adjusted_coordinate(edge, pos, image_bounds, snap_radius, UNFIXED_ASPECT_RATIO);
        window.set_edge(edge, coordinate);
        return;
    };

    let coordinate = window.adjusted_coordinate(edge, pos, image_bounds, snap_radius, ratio);
    window.set_edge(edge, coordinate);

    let target_height = aspect::calculate_height(window.left, window.right, ratio);
    let half_difference = (target_height - window.height()) / 2.0;
    window.top -= half_difference;
    window.bottom += half_difference;

    snap_adjacent(window, edge, EdgeOrientation::Top, image_bounds, snap_radius, ratio);
    snap_adjacent(window, edge, EdgeOrientation::Bottom, image_bounds, snap_radius, ratio);
}

/// Snaps an adjacent edge onto the image boundary when it is within the snap
/// margin and the look-ahead confirms the aspect-preserving result stays in
/// bounds. The opposite edge shifts back by the snap delta and the dragged
/// edge is rederived so the ratio stays exact.
fn snap_adjacent(
    window: &mut CropWindow,
    moved: EdgeOrientation,
    adjacent: EdgeOrientation,
    image_bounds: Rect,
    snap_radius: f64,
    ratio: f64,
) {
    if window.is_outside_margin(adjacent, image_bounds, snap_radius)
        && !would_exceed_bounds(
            window,
            moved,
            image_bounds,
            ratio,
            window.edge(moved),
            adjacent,
        )
    {
        let snap = window.snap_target(adjacent, image_bounds);
        window.set_edge(adjacent, snap.value);
        window.offset_edge(adjacent.opposite(), -snap.delta);
        window.set_edge(moved, window.aspect_coordinate(moved, ratio));
    }
}
