// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge identity and snap look-ahead types.

/// Minimum distance one edge can get to its opposing edge.
///
/// This is an arbitrary floor that keeps the crop window from collapsing to
/// something too small to grab.
pub const MIN_CROP_LENGTH: f64 = 40.0;

/// Identifies one of the four edge coordinates of a [`CropWindow`].
///
/// `Left` and `Right` name x-coordinates, `Top` and `Bottom` y-coordinates.
///
/// [`CropWindow`]: crate::CropWindow
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeOrientation {
    /// The left edge (x-coordinate).
    Left,
    /// The top edge (y-coordinate).
    Top,
    /// The right edge (x-coordinate).
    Right,
    /// The bottom edge (y-coordinate).
    Bottom,
}

impl EdgeOrientation {
    /// The edge on the opposite side of the window.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }
}

/// Where an edge would land if snapped to the image bounds, and how far the
/// snap would move it.
///
/// Returned by [`CropWindow::snap_target`], which computes but never commits
/// the snap. Callers that want the mutation set the edge to `value`
/// themselves, typically propagating `delta` to the opposing edge to keep the
/// window's span intact.
///
/// [`CropWindow::snap_target`]: crate::CropWindow::snap_target
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapTarget {
    /// The bound coordinate the edge would snap to.
    pub value: f64,
    /// `value` minus the edge's current coordinate.
    pub delta: f64,
}
