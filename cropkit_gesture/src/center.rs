// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center handle strategy: the whole window follows the pointer.

use cropkit_window::{CropWindow, EdgeOrientation};
use kurbo::{Point, Rect};

/// Translates the window so its center lands on the pointer, then pushes it
/// back inside the image margins without changing its size.
///
/// Per axis, the near-boundary check runs in priority order (left before
/// right, top before bottom), so only one side per axis can snap in a single
/// update. A snap shifts the opposite edge by the same delta, preserving
/// width and height. Aspect ratio never matters here; a locked ratio is
/// unaffected by translation.
pub(crate) fn update(
    window: &mut CropWindow,
    pos: Point,
    image_bounds: Rect,
    snap_radius: f64,
) {
    window.translate(pos - window.center());

    if window.is_outside_margin(EdgeOrientation::Left, image_bounds, snap_radius) {
        let snap = window.snap_target(EdgeOrientation::Left, image_bounds);
        window.set_edge(EdgeOrientation::Left, snap.value);
        window.offset_edge(EdgeOrientation::Right, snap.delta);
    } else if window.is_outside_margin(EdgeOrientation::Right, image_bounds, snap_radius) {
        let snap = window.snap_target(EdgeOrientation::Right, image_bounds);
        window.set_edge(EdgeOrientation::Right, snap.value);
        window.offset_edge(EdgeOrientation::Left, snap.delta);
    }

    if window.is_outside_margin(EdgeOrientation::Top, image_bounds, snap_radius) {
        let snap = window.snap_target(EdgeOrientation::Top, image_bounds);
        window.set_edge(EdgeOrientation::Top, snap.value);
        window.offset_edge(EdgeOrientation::Bottom, snap.delta);
    } else if window.is_outside_margin(EdgeOrientation::Bottom, image_bounds, snap_radius) {
        let snap = window.snap_target(EdgeOrientation::Bottom, image_bounds);
        window.set_edge(EdgeOrientation::Bottom, snap.value);
        window.offset_edge(EdgeOrientation::Top, snap.delta);
    }
}
