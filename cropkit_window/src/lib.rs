// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cropkit_window --heading-base-level=0

//! Cropkit Window: the crop-window edge model.
//!
//! A crop window is a rectangle drawn over an image, described by four
//! independently adjustable edge coordinates. This crate owns that model and
//! the per-edge operations that drag gestures are built from:
//!
//! - [`CropWindow`]: the four edge coordinates (`left`, `top`, `right`,
//!   `bottom`) with offset, snap look-ahead, margin testing, and the
//!   min-size/snap clamp applied to dragged edges.
//! - [`aspect`]: pure formulas relating one edge coordinate to the other
//!   three under a `width / height` aspect ratio.
//! - [`would_exceed_bounds`]: the look-ahead that side-handle gestures use to
//!   decide whether an aspect-preserving boundary snap is safe to commit.
//!
//! The crate knows nothing about pointers, handles, or gestures; it is the
//! vocabulary that `cropkit_gesture` composes into full drag strategies.
//! Image bounds arrive as [`kurbo::Rect`] values in the same coordinate
//! space as the window and are never stored.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use cropkit_window::{CropWindow, EdgeOrientation};
//!
//! let image = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//! let mut window = CropWindow::inset_default(image);
//! assert_eq!(window.width(), 800.0);
//!
//! // Nudge the left edge and ask how far it would have to move to sit on
//! // the image boundary.
//! window.offset_edge(EdgeOrientation::Left, -50.0);
//! let snap = window.snap_target(EdgeOrientation::Left, image);
//! assert_eq!(snap.value, 0.0);
//! assert_eq!(snap.delta, -50.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod aspect;

mod bounds;
mod edge;
mod window;

pub use bounds::would_exceed_bounds;
pub use edge::{EdgeOrientation, MIN_CROP_LENGTH, SnapTarget};
pub use window::CropWindow;
