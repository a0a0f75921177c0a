// Copyright 2026 the Cropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cropkit_gesture --heading-base-level=0

//! Cropkit Gesture: drag strategies and the crop session API.
//!
//! This crate turns pointer-move samples into crop-window updates. Each
//! draggable control point of the overlay is a [`Handle`]: the four corners,
//! the four side midpoints, and the center. Dragging a handle runs one of
//! four strategies:
//!
//! - **Corner**: moves one horizontal and one vertical edge; under an aspect
//!   lock, the pointer drives whichever edge keeps the shape closest to the
//!   target ratio and the other edge is derived from the ratio formula.
//! - **Horizontal side** (top/bottom): moves that edge; under an aspect lock
//!   the left and right edges breathe symmetrically to hold the ratio.
//! - **Vertical side** (left/right): the mirror image, height-driven.
//! - **Center**: translates the whole window, snapping back inside the image
//!   without changing its size.
//!
//! All strategies respect the minimum crop size and snap edges that come
//! within `snap_radius` of the image boundary onto it.
//!
//! [`CropSession`] is the boundary the GUI layer talks to: it owns the
//! window for the lifetime of one image, selects the active handle on
//! press, applies one strategy evaluation per pointer-move sample, and
//! rejects malformed inputs up front. The caller decides which handle was
//! grabbed (hit-testing stays in the view layer) and redraws from the
//! returned window.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use cropkit_gesture::{CropSession, Handle};
//!
//! let image = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//! let mut session = CropSession::new(image)?;
//!
//! // Grab the top-left corner and drag it to (50, 50).
//! session.begin_drag(Handle::TopLeft);
//! let window = session.update_drag(Point::new(50.0, 50.0), image, 20.0, None)?;
//! assert_eq!(window.left, 50.0);
//! assert_eq!(window.top, 50.0);
//! session.end_drag();
//! # Ok::<(), cropkit_gesture::DragError>(())
//! ```
//!
//! One strategy evaluation is plain arithmetic: no allocation, no blocking,
//! no interior mutability. `&mut self` on [`CropSession::update_drag`] is
//! the single-writer contract.
//!
//! This crate is `no_std`.

#![no_std]

mod center;
mod corner;
mod handle;
mod session;
mod side;

pub use handle::Handle;
pub use session::{CropSession, DragError};
