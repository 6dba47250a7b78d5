// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slipsheet Controller: session ownership and host commands for a two-state
//! bottom sheet.
//!
//! ## Overview
//!
//! [`SheetController`] sits between a pan-gesture source and an abstract
//! [`LayoutHost`]. It owns the committed [`SheetState`], feeds incoming
//! [`DragSample`]s through the pure gesture core
//! ([`slipsheet_gesture`]), and issues exactly two kinds of commands:
//!
//! - [`LayoutHost::layout_update`] — immediate, unanimated offsets while a
//!   drag is in flight;
//! - [`LayoutHost::animated_transition`] — one settle animation per
//!   released, cancelled, or programmatic transition, described by a
//!   [`TransitionSpec`] (duration, curve kind, optional spring).
//!
//! Animated transitions are fire-and-forget: the host animates on its own
//! time and reports completion with the [`TransitionTicket`] it was handed.
//! Tickets are monotonic, and the controller ignores completions of
//! superseded transitions, so out-of-order completion can never clobber a
//! newer outcome.
//!
//! ## Minimal example
//!
//! Drive a sheet through an upward drag that settles expanded:
//!
//! ```rust
//! use slipsheet_controller::{
//!     LayoutHost, SheetConfig, SheetController, TransitionSpec, TransitionTicket,
//! };
//! use slipsheet_gesture::{DragSample, SheetState};
//! use kurbo::Vec2;
//!
//! /// A host that applies offsets to some layout system. Here it just
//! /// remembers the commands and pretends every animation finishes at once.
//! #[derive(Default)]
//! struct Host {
//!     offset: f64,
//!     finished: Vec<TransitionTicket>,
//! }
//!
//! impl LayoutHost for Host {
//!     fn layout_update(&mut self, offset: f64) {
//!         self.offset = offset;
//!     }
//!     fn animated_transition(
//!         &mut self,
//!         offset: f64,
//!         _spec: &TransitionSpec,
//!         ticket: TransitionTicket,
//!     ) {
//!         self.offset = offset;
//!         self.finished.push(ticket);
//!     }
//! }
//!
//! let config = SheetConfig::new(300.0, 40.0);
//! let mut sheet = SheetController::new(Host::default(), config)?;
//! assert_eq!(sheet.state(), SheetState::Collapsed);
//!
//! // Drag up 200 units, then release with a fast upward fling.
//! sheet.on_drag(DragSample::began());
//! sheet.on_drag(DragSample::changed(Vec2::new(0.0, -200.0), Vec2::new(0.0, -800.0)));
//! sheet.on_drag(DragSample::ended(Vec2::new(0.0, -200.0), Vec2::new(0.0, -1200.0)));
//!
//! // The host "finishes" its animation and reports back.
//! let ticket = sheet.host_mut().finished.pop().unwrap();
//! sheet.transition_completed(ticket);
//! assert_eq!(sheet.state(), SheetState::Expanded);
//! assert_eq!(sheet.resting_offset(), -300.0);
//! # Ok::<(), slipsheet_gesture::MetricsError>(())
//! ```
//!
//! ## Concurrency model
//!
//! Single logical thread, strictly sequential gesture phases per session.
//! The controller never blocks on an animation; new gestures or programmatic
//! [`show`](SheetController::show)/[`hide`](SheetController::hide) calls
//! arriving mid-animation override the in-flight target (last writer wins).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod controller;
pub mod host;

pub use controller::{SheetConfig, SheetController};
pub use host::{
    Curve, LayoutHost, SpringSpec, TransitionSpec, TransitionTicket, TransitionTimings,
};

// Re-exported so hosts only need one dependency for the common path.
pub use slipsheet_gesture::{DragPhase, DragSample, MetricsError, SheetState};
