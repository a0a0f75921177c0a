// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner handle strategy: one horizontal and one vertical edge follow the
//! pointer.

use cropkit_window::{CropWindow, EdgeOrientation};
use kurbo::{Point, Rect};

use crate::handle::UNFIXED_ASPECT_RATIO;

pub(crate) fn update(
    window: &mut CropWindow,
    horizontal: EdgeOrientation,
    vertical: EdgeOrientation,
    pos: Point,
    image_bounds: Rect,
    snap_radius: f64,
    aspect_ratio: Option<f64>,
) {
    let Some(ratio) = aspect_ratio else {
        // Unconstrained: each bound edge tracks the pointer independently.
        let coordinate = window.adjusted_coordinate(
            horizontal,
            pos,
            image_bounds,
            snap_radius,
            UNFIXED_ASPECT_RATIO,
        );
        window.set_edge(horizontal, coordinate);
        let coordinate = window.adjusted_coordinate(
            vertical,
            pos,
            image_bounds,
            snap_radius,
            UNFIXED_ASPECT_RATIO,
        );
        window.set_edge(vertical, coordinate);
        return;
    };

    // If dragging straight to the pointer would make the window wider than
    // the target ratio, x is the determining axis and the vertical edge
    // leads; otherwise the horizontal edge leads.
    let (primary, secondary) = if potential_aspect_ratio(window, horizontal, vertical, pos) > ratio
    {
        (vertical, horizontal)
    } else {
        (horizontal, vertical)
    };

    let coordinate = window.adjusted_coordinate(primary, pos, image_bounds, snap_radius, ratio);
    window.set_edge(primary, coordinate);
    window.set_edge(secondary, window.aspect_coordinate(secondary, ratio));

    // If the derived edge came within snapping distance of the image, lock
    // it on the boundary and let the ratio win over the touched point.
    if window.is_outside_margin(secondary, image_bounds, snap_radius) {
        let snap = window.snap_target(secondary, image_bounds);
        window.set_edge(secondary, snap.value);
        window.set_edge(primary, window.aspect_coordinate(primary, ratio));
    }
}

/// Aspect ratio the window would have if the dragged edges moved straight to
/// the pointer.
fn potential_aspect_ratio(
    window: &CropWindow,
    horizontal: EdgeOrientation,
    vertical: EdgeOrientation,
    pos: Point,
) -> f64 {
    let left = if vertical == EdgeOrientation::Left {
        pos.x
    } else {
        window.left
    };
    let right = if vertical == EdgeOrientation::Right {
        pos.x
    } else {
        window.right
    };
    let top = if horizontal == EdgeOrientation::Top {
        pos.y
    } else {
        window.top
    };
    let bottom = if horizontal == EdgeOrientation::Bottom {
        pos.y
    } else {
        window.bottom
    };
    cropkit_window::aspect::aspect_ratio(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Handle;

    const IMAGE: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

    #[test]
    fn free_drag_moves_both_edges_to_the_pointer() {
        let mut window = CropWindow::new(100.0, 100.0, 900.0, 900.0);
        Handle::TopLeft.drag_to(&mut window, Point::new(50.0, 60.0), IMAGE, 20.0, None);
        assert_eq!(window, CropWindow::new(50.0, 60.0, 900.0, 900.0));
    }

    #[test]
    fn free_drag_snaps_each_edge_near_its_boundary() {
        let mut window = CropWindow::new(100.0, 100.0, 900.0, 900.0);
        Handle::BottomRight.drag_to(&mut window, Point::new(995.0, 990.0), IMAGE, 20.0, None);
        assert_eq!(window, CropWindow::new(100.0, 100.0, 1000.0, 1000.0));
    }

    #[test]
    fn wider_than_target_pointer_makes_the_vertical_edge_primary() {
        let mut window = CropWindow::new(100.0, 100.0, 500.0, 500.0);
        // Pulling the top-left corner far left: would-be ratio is much wider
        // than 1, so x drives and the top edge is derived from the ratio.
        Handle::TopLeft.drag_to(&mut window, Point::new(60.0, 450.0), IMAGE, 5.0, Some(1.0));
        assert_eq!(window.left, 60.0);
        assert_eq!(window.top, 500.0 - (500.0 - 60.0));
        assert!((window.aspect_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn taller_than_target_pointer_makes_the_horizontal_edge_primary() {
        let mut window = CropWindow::new(100.0, 100.0, 500.0, 500.0);
        Handle::TopLeft.drag_to(&mut window, Point::new(450.0, 60.0), IMAGE, 5.0, Some(1.0));
        assert_eq!(window.top, 60.0);
        assert_eq!(window.left, 500.0 - (500.0 - 60.0));
        assert!((window.aspect_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn secondary_snap_keeps_the_ratio_exact() {
        // Dragging the bottom-right corner of a square-locked window while
        // the derived right edge lands within snapping distance of the
        // image: the right edge locks onto the boundary and the bottom is
        // rederived from the ratio, not the pointer.
        let mut window = CropWindow::new(100.0, 100.0, 900.0, 980.0);
        Handle::BottomRight.drag_to(&mut window, Point::new(950.0, 985.0), IMAGE, 30.0, Some(1.0));
        assert_eq!(window.bottom, 1000.0);
        assert_eq!(window.right, window.aspect_coordinate(EdgeOrientation::Right, 1.0));
        assert!((window.aspect_ratio() - 1.0).abs() < 1e-12);
    }
}
