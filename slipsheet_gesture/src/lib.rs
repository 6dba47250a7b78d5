// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slipsheet Gesture: pure drag-tracking and settle-decision primitives for a
//! two-state bottom sheet.
//!
//! ## Overview
//!
//! A bottom sheet has exactly two stable resting states,
//! [`SheetState::Collapsed`] and [`SheetState::Expanded`], separated by a
//! travel distance described by [`SheetMetrics`]. This crate turns raw pan
//! gesture data into the two pieces of information a sheet controller needs:
//!
//! - [`travel::track`]: the live, unanimated offset while a drag is in
//!   flight — or [`Travel::FullTravel`] when an upward drag from `Collapsed`
//!   already covers the whole travel distance and must commit immediately.
//! - [`settle::decide`]: which resting state a released drag commits to,
//!   based on distance covered and release velocity
//!   ([`CommitThresholds`]).
//! - [`settle::revert`]: the snap-back target for a cancelled gesture.
//!
//! Everything here is pure and total: wrong-direction drags and out-of-range
//! samples degrade to no-ops, never to errors. The only fallible operation is
//! [`SheetMetrics::new`], which rejects degenerate geometry.
//!
//! Offsets are expressed as non-positive distances of the sheet's top edge
//! from the container's bottom edge: `-height` when expanded,
//! `-collapsed_offset` when collapsed. Positive drag `y` points down.
//!
//! ## Minimal example
//!
//! Track a drag upward from the collapsed state and decide where it settles:
//!
//! ```rust
//! use slipsheet_gesture::{
//!     CommitThresholds, SheetMetrics, SheetState, Travel, settle, travel,
//! };
//!
//! let metrics = SheetMetrics::new(300.0, 40.0)?;
//! let thresholds = CommitThresholds::default();
//!
//! // Mid-drag: 200 units up from collapsed → live offset -240.
//! assert_eq!(
//!     travel::track(&metrics, SheetState::Collapsed, -200.0),
//!     Travel::Moved(-240.0),
//! );
//!
//! // Released with a fast upward fling → commits to Expanded.
//! assert_eq!(
//!     settle::decide(&metrics, &thresholds, SheetState::Collapsed, -200.0, -1200.0),
//!     SheetState::Expanded,
//! );
//!
//! // A short, slow downward drag from Expanded snaps back.
//! assert_eq!(
//!     settle::decide(&metrics, &thresholds, SheetState::Expanded, 50.0, 0.0),
//!     SheetState::Expanded,
//! );
//! # Ok::<(), slipsheet_gesture::MetricsError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

pub mod settle;
pub mod travel;
pub mod types;

pub use settle::CommitThresholds;
pub use travel::Travel;
pub use types::{DragPhase, DragSample, MetricsError, SheetMetrics, SheetState};
