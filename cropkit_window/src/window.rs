// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::aspect;
use crate::edge::{EdgeOrientation, MIN_CROP_LENGTH, SnapTarget};

/// The crop window: four independently adjustable edge coordinates.
///
/// Coordinates live in image space, the same space as the image bounds
/// passed to each operation. The target invariant is `left < right`,
/// `top < bottom`, both spans at least [`MIN_CROP_LENGTH`], and the window
/// inside the image bounds — but the invariant is allowed to be violated
/// mid-gesture; it is the drag strategies' job to settle back into it.
///
/// One window exists per crop session. It is mutated exclusively by the
/// gesture layer while a drag is in flight and replaced wholesale when a new
/// image is loaded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropWindow {
    /// x-coordinate of the left edge.
    pub left: f64,
    /// y-coordinate of the top edge.
    pub top: f64,
    /// x-coordinate of the right edge.
    pub right: f64,
    /// y-coordinate of the bottom edge.
    pub bottom: f64,
}

impl CropWindow {
    /// Creates a window from four edge coordinates.
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a window covering the given rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }

    /// The default initial window: the image bounds inset by 10% on every
    /// side.
    #[must_use]
    pub fn inset_default(image_bounds: Rect) -> Self {
        let horizontal_padding = 0.1 * image_bounds.width();
        let vertical_padding = 0.1 * image_bounds.height();
        Self::new(
            image_bounds.x0 + horizontal_padding,
            image_bounds.y0 + vertical_padding,
            image_bounds.x1 - horizontal_padding,
            image_bounds.y1 - vertical_padding,
        )
    }

    /// The initial window for a fixed aspect ratio: centered in the image
    /// bounds, spanning the full height when the image is wider than `ratio`
    /// and the full width otherwise.
    ///
    /// The derived span is floored at [`MIN_CROP_LENGTH`], so an extreme
    /// ratio against a small image can produce a window whose actual ratio
    /// differs from the requested one.
    #[must_use]
    pub fn fitted_to_aspect(image_bounds: Rect, ratio: f64) -> Self {
        let image_ratio =
            aspect::aspect_ratio(image_bounds.x0, image_bounds.y0, image_bounds.x1, image_bounds.y1);
        if image_ratio > ratio {
            // Image is wider than the crop: height is the determining span.
            let top = image_bounds.y0;
            let bottom = image_bounds.y1;
            let width = MIN_CROP_LENGTH.max(aspect::calculate_width(top, bottom, ratio));
            let center_x = (image_bounds.x0 + image_bounds.x1) / 2.0;
            Self::new(center_x - width / 2.0, top, center_x + width / 2.0, bottom)
        } else {
            let left = image_bounds.x0;
            let right = image_bounds.x1;
            let height = MIN_CROP_LENGTH.max(aspect::calculate_height(left, right, ratio));
            let center_y = (image_bounds.y0 + image_bounds.y1) / 2.0;
            Self::new(left, center_y - height / 2.0, right, center_y + height / 2.0)
        }
    }

    /// The window as a [`Rect`].
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// The coordinate of the given edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeOrientation) -> f64 {
        match edge {
            EdgeOrientation::Left => self.left,
            EdgeOrientation::Top => self.top,
            EdgeOrientation::Right => self.right,
            EdgeOrientation::Bottom => self.bottom,
        }
    }

    /// Sets the coordinate of the given edge.
    pub fn set_edge(&mut self, edge: EdgeOrientation, coordinate: f64) {
        match edge {
            EdgeOrientation::Left => self.left = coordinate,
            EdgeOrientation::Top => self.top = coordinate,
            EdgeOrientation::Right => self.right = coordinate,
            EdgeOrientation::Bottom => self.bottom = coordinate,
        }
    }

    /// Adds `distance` to the given edge's coordinate.
    pub fn offset_edge(&mut self, edge: EdgeOrientation, distance: f64) {
        self.set_edge(edge, self.edge(edge) + distance);
    }

    /// Shifts all four edges by the given vector.
    pub fn translate(&mut self, delta: Vec2) {
        self.left += delta.x;
        self.right += delta.x;
        self.top += delta.y;
        self.bottom += delta.y;
    }

    /// Width of the window (`right - left`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the window (`bottom - top`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center point of the window.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Aspect ratio (`width / height`) of the window.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        aspect::aspect_ratio(self.left, self.top, self.right, self.bottom)
    }

    /// Where the given edge would land if snapped to the image bounds.
    ///
    /// Pure look-ahead: nothing is mutated. Callers commit the snap with
    /// [`set_edge`](Self::set_edge) and use [`SnapTarget::delta`] to shift
    /// the opposing edge when the span must be preserved.
    #[must_use]
    pub fn snap_target(&self, edge: EdgeOrientation, image_bounds: Rect) -> SnapTarget {
        let current = self.edge(edge);
        let value = match edge {
            EdgeOrientation::Left => image_bounds.x0,
            EdgeOrientation::Top => image_bounds.y0,
            EdgeOrientation::Right => image_bounds.x1,
            EdgeOrientation::Bottom => image_bounds.y1,
        };
        SnapTarget {
            value,
            delta: value - current,
        }
    }

    /// Whether the given edge is closer than `margin` to its image boundary,
    /// or already past it.
    ///
    /// The distance is signed, so an edge outside the bounds tests true for
    /// any non-negative margin.
    #[must_use]
    pub fn is_outside_margin(&self, edge: EdgeOrientation, image_bounds: Rect, margin: f64) -> bool {
        match edge {
            EdgeOrientation::Left => self.left - image_bounds.x0 < margin,
            EdgeOrientation::Top => self.top - image_bounds.y0 < margin,
            EdgeOrientation::Right => image_bounds.x1 - self.right < margin,
            EdgeOrientation::Bottom => image_bounds.y1 - self.bottom < margin,
        }
    }

    /// Whether the given edge lies strictly outside the image bounds.
    #[must_use]
    pub fn is_outside_frame(&self, edge: EdgeOrientation, image_bounds: Rect) -> bool {
        self.is_outside_margin(edge, image_bounds, 0.0)
    }

    /// The coordinate the given edge must take for the window to have the
    /// given aspect ratio, holding the other three edges fixed.
    #[must_use]
    pub fn aspect_coordinate(&self, edge: EdgeOrientation, ratio: f64) -> f64 {
        match edge {
            EdgeOrientation::Left => {
                aspect::calculate_left(self.top, self.right, self.bottom, ratio)
            }
            EdgeOrientation::Top => {
                aspect::calculate_top(self.left, self.right, self.bottom, ratio)
            }
            EdgeOrientation::Right => {
                aspect::calculate_right(self.left, self.top, self.bottom, ratio)
            }
            EdgeOrientation::Bottom => {
                aspect::calculate_bottom(self.left, self.top, self.right, ratio)
            }
        }
    }

    /// Resolves where a dragged edge actually lands for a pointer at `pos`.
    ///
    /// Within `snap_radius` of the matching image boundary the edge locks
    /// exactly onto the boundary. Otherwise the pointer coordinate is
    /// clamped so that neither the dragged span nor the span implied by
    /// `ratio` in the other axis drops below [`MIN_CROP_LENGTH`].
    #[must_use]
    pub fn adjusted_coordinate(
        &self,
        edge: EdgeOrientation,
        pos: Point,
        image_bounds: Rect,
        snap_radius: f64,
        ratio: f64,
    ) -> f64 {
        match edge {
            EdgeOrientation::Left => {
                if pos.x - image_bounds.x0 < snap_radius {
                    image_bounds.x0
                } else {
                    pos.x
                        .min(self.right - MIN_CROP_LENGTH)
                        .min(self.right - MIN_CROP_LENGTH * ratio)
                }
            }
            EdgeOrientation::Right => {
                if image_bounds.x1 - pos.x < snap_radius {
                    image_bounds.x1
                } else {
                    pos.x
                        .max(self.left + MIN_CROP_LENGTH)
                        .max(self.left + MIN_CROP_LENGTH * ratio)
                }
            }
            EdgeOrientation::Top => {
                if pos.y - image_bounds.y0 < snap_radius {
                    image_bounds.y0
                } else {
                    pos.y
                        .min(self.bottom - MIN_CROP_LENGTH)
                        .min(self.bottom - MIN_CROP_LENGTH / ratio)
                }
            }
            EdgeOrientation::Bottom => {
                if image_bounds.y1 - pos.y < snap_radius {
                    image_bounds.y1
                } else {
                    pos.y
                        .max(self.top + MIN_CROP_LENGTH)
                        .max(self.top + MIN_CROP_LENGTH / ratio)
                }
            }
        }
    }
}
