// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cropkit_window::{CropWindow, EdgeOrientation};
use kurbo::{Point, Rect};

use crate::{center, corner, side};

/// Aspect ratio used internally for the min-size clamp when no lock is
/// active. Free-aspect drags still move adjacent edges independently.
pub(crate) const UNFIXED_ASPECT_RATIO: f64 = 1.0;

/// A pressable, draggable control point on the crop window.
///
/// Each handle is bound to the edge coordinates it controls: corner handles
/// to one horizontal and one vertical edge, side handles to a single edge,
/// and [`Center`](Self::Center) to the whole window via translation. The
/// binding fixes which strategy [`drag_to`](Self::drag_to) runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Corner handle moving the top and left edges.
    TopLeft,
    /// Corner handle moving the top and right edges.
    TopRight,
    /// Corner handle moving the bottom and left edges.
    BottomLeft,
    /// Corner handle moving the bottom and right edges.
    BottomRight,
    /// Side handle moving the left edge.
    Left,
    /// Side handle moving the top edge.
    Top,
    /// Side handle moving the right edge.
    Right,
    /// Side handle moving the bottom edge.
    Bottom,
    /// Center handle translating the whole window.
    Center,
}

impl Handle {
    /// The horizontal edge (top or bottom) this handle moves, if any.
    #[must_use]
    pub fn horizontal_edge(self) -> Option<EdgeOrientation> {
        match self {
            Self::TopLeft | Self::TopRight | Self::Top => Some(EdgeOrientation::Top),
            Self::BottomLeft | Self::BottomRight | Self::Bottom => Some(EdgeOrientation::Bottom),
            Self::Left | Self::Right | Self::Center => None,
        }
    }

    /// The vertical edge (left or right) this handle moves, if any.
    #[must_use]
    pub fn vertical_edge(self) -> Option<EdgeOrientation> {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::Left => Some(EdgeOrientation::Left),
            Self::TopRight | Self::BottomRight | Self::Right => Some(EdgeOrientation::Right),
            Self::Top | Self::Bottom | Self::Center => None,
        }
    }

    /// Applies one pointer-move sample to the window.
    ///
    /// `aspect_ratio` of `None` leaves the shape unconstrained; `Some(r)`
    /// holds `width / height` at `r` throughout the update. This is the
    /// single dispatch point over the four strategy kinds; callers wanting
    /// input validation go through
    /// [`CropSession::update_drag`](crate::CropSession::update_drag).
    pub fn drag_to(
        self,
        window: &mut CropWindow,
        pos: Point,
        image_bounds: Rect,
        snap_radius: f64,
        aspect_ratio: Option<f64>,
    ) {
        match (self.horizontal_edge(), self.vertical_edge()) {
            (Some(horizontal), Some(vertical)) => corner::update(
                window,
                horizontal,
                vertical,
                pos,
                image_bounds,
                snap_radius,
                aspect_ratio,
            ),
            (Some(edge), None) => {
                side::update_horizontal(window, edge, pos, image_bounds, snap_radius, aspect_ratio);
            }
            (None, Some(edge)) => {
                side::update_vertical(window, edge, pos, image_bounds, snap_radius, aspect_ratio);
            }
            (None, None) => center::update(window, pos, image_bounds, snap_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_handles_bind_one_edge_per_axis() {
        assert_eq!(
            Handle::TopLeft.horizontal_edge(),
            Some(EdgeOrientation::Top)
        );
        assert_eq!(Handle::TopLeft.vertical_edge(), Some(EdgeOrientation::Left));
        assert_eq!(
            Handle::BottomRight.horizontal_edge(),
            Some(EdgeOrientation::Bottom)
        );
        assert_eq!(
            Handle::BottomRight.vertical_edge(),
            Some(EdgeOrientation::Right)
        );
    }

    #[test]
    fn side_handles_bind_a_single_edge() {
        assert_eq!(Handle::Top.horizontal_edge(), Some(EdgeOrientation::Top));
        assert_eq!(Handle::Top.vertical_edge(), None);
        assert_eq!(Handle::Left.horizontal_edge(), None);
        assert_eq!(Handle::Left.vertical_edge(), Some(EdgeOrientation::Left));
    }

    #[test]
    fn center_binds_no_edges() {
        assert_eq!(Handle::Center.horizontal_edge(), None);
        assert_eq!(Handle::Center.vertical_edge(), None);
    }
}
