// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The crop session: one window, one active handle, validated inputs.

use core::fmt;

use cropkit_window::CropWindow;
use kurbo::{Point, Rect};

use crate::handle::Handle;

/// Error returned when a session operation receives inputs the geometry
/// cannot meaningfully process.
///
/// The engine is deterministic arithmetic with no recovery path, so these
/// are contract violations caught at the boundary: letting a NaN or a
/// non-positive ratio through would silently poison every later formula.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragError {
    /// `update_drag` was called with no drag in progress.
    NoActiveHandle,
    /// The image bounds are non-finite or have no area.
    DegenerateBounds(Rect),
    /// The target aspect ratio is non-finite or not positive.
    InvalidAspectRatio(f64),
    /// A pointer coordinate is NaN or infinite.
    NonFinitePointer {
        /// The offending pointer x-coordinate.
        x: f64,
        /// The offending pointer y-coordinate.
        y: f64,
    },
    /// The snap radius is non-finite or negative.
    InvalidSnapRadius(f64),
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveHandle => write!(f, "no drag in progress; call begin_drag first"),
            Self::DegenerateBounds(bounds) => {
                write!(f, "image bounds {bounds:?} are degenerate")
            }
            Self::InvalidAspectRatio(ratio) => {
                write!(f, "aspect ratio must be finite and positive, got {ratio}")
            }
            Self::NonFinitePointer { x, y } => {
                write!(f, "pointer position ({x}, {y}) is not finite")
            }
            Self::InvalidSnapRadius(radius) => {
                write!(f, "snap radius must be finite and non-negative, got {radius}")
            }
        }
    }
}

impl core::error::Error for DragError {}

/// One crop session: the crop window for the currently loaded image plus the
/// handle a drag gesture is holding, if any.
///
/// The view layer decides which handle was pressed and calls
/// [`begin_drag`](Self::begin_drag), then feeds every pointer-move sample
/// through [`update_drag`](Self::update_drag) and redraws from the returned
/// window. Each update is one complete, non-blocking strategy evaluation;
/// `&mut self` keeps the read-modify-write across the four edges atomic per
/// sample as long as the caller delivers events serially.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropSession {
    window: CropWindow,
    active: Option<Handle>,
}

impl CropSession {
    /// Creates a session for an image, starting from the default window
    /// (image bounds inset by 10% per side).
    pub fn new(image_bounds: Rect) -> Result<Self, DragError> {
        validate_bounds(image_bounds)?;
        Ok(Self {
            window: CropWindow::inset_default(image_bounds),
            active: None,
        })
    }

    /// Creates a session starting from the fixed-ratio window for
    /// `aspect_ratio`, centered in the image.
    pub fn with_aspect_ratio(image_bounds: Rect, aspect_ratio: f64) -> Result<Self, DragError> {
        validate_bounds(image_bounds)?;
        validate_ratio(aspect_ratio)?;
        Ok(Self {
            window: CropWindow::fitted_to_aspect(image_bounds, aspect_ratio),
            active: None,
        })
    }

    /// Reinitializes the window to the default inset position, e.g. when a
    /// new image is loaded. Any drag in progress is abandoned.
    pub fn reset_to_default(&mut self, image_bounds: Rect) -> Result<(), DragError> {
        validate_bounds(image_bounds)?;
        self.window = CropWindow::inset_default(image_bounds);
        self.active = None;
        Ok(())
    }

    /// Reinitializes the window to the fixed-ratio position for
    /// `aspect_ratio`. Any drag in progress is abandoned.
    pub fn reset_with_aspect_ratio(
        &mut self,
        image_bounds: Rect,
        aspect_ratio: f64,
    ) -> Result<(), DragError> {
        validate_bounds(image_bounds)?;
        validate_ratio(aspect_ratio)?;
        self.window = CropWindow::fitted_to_aspect(image_bounds, aspect_ratio);
        self.active = None;
        Ok(())
    }

    /// Starts a drag on the given handle. A drag already in progress is
    /// replaced.
    pub fn begin_drag(&mut self, handle: Handle) {
        self.active = Some(handle);
    }

    /// Ends the current drag, if any.
    pub fn end_drag(&mut self) {
        self.active = None;
    }

    /// The handle currently being dragged.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.active
    }

    /// Applies one pointer-move sample to the active handle's strategy and
    /// returns the updated window for redraw.
    ///
    /// Inputs are validated before any edge moves, so a rejected call leaves
    /// the window exactly as it was.
    pub fn update_drag(
        &mut self,
        pos: Point,
        image_bounds: Rect,
        snap_radius: f64,
        aspect_ratio: Option<f64>,
    ) -> Result<&CropWindow, DragError> {
        let handle = self.active.ok_or(DragError::NoActiveHandle)?;
        validate_bounds(image_bounds)?;
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return Err(DragError::NonFinitePointer { x: pos.x, y: pos.y });
        }
        if !snap_radius.is_finite() || snap_radius < 0.0 {
            return Err(DragError::InvalidSnapRadius(snap_radius));
        }
        if let Some(ratio) = aspect_ratio {
            validate_ratio(ratio)?;
        }

        handle.drag_to(&mut self.window, pos, image_bounds, snap_radius, aspect_ratio);
        Ok(&self.window)
    }

    /// The current crop window, for the render layer.
    #[must_use]
    pub fn window(&self) -> &CropWindow {
        &self.window
    }
}

fn validate_bounds(bounds: Rect) -> Result<(), DragError> {
    let finite = bounds.x0.is_finite()
        && bounds.y0.is_finite()
        && bounds.x1.is_finite()
        && bounds.y1.is_finite();
    if !finite || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(DragError::DegenerateBounds(bounds));
    }
    Ok(())
}

fn validate_ratio(ratio: f64) -> Result<(), DragError> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(DragError::InvalidAspectRatio(ratio));
    }
    Ok(())
}
