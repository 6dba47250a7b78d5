// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle decisions: which resting state a released or cancelled drag
//! commits to.

use crate::types::{SheetMetrics, SheetState};

/// Thresholds for committing a released drag to the opposite state.
///
/// Defaults reproduce the conventional bottom-sheet feel: the drag either
/// covers half the travel distance, or flings faster than 1000 units/second
/// in the travel direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitThresholds {
    /// Fraction of the sheet height the drag must cover to commit by distance.
    pub travel_fraction: f64,
    /// Velocity (units/second, strictly exceeded) that commits regardless of
    /// distance covered.
    pub fling_velocity: f64,
}

impl CommitThresholds {
    /// Half the travel distance, or a fling over 1000 units/second.
    pub const DEFAULT: Self = Self {
        travel_fraction: 0.5,
        fling_velocity: 1000.0,
    };
}

impl Default for CommitThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decides which resting state a released drag settles into.
///
/// The decision is symmetric across the two states: the drag commits to the
/// opposite state when the cumulative translation covers at least
/// `travel_fraction` of the height, or when the release velocity points away
/// from the current state faster than `fling_velocity` (downward is away from
/// `Expanded`, upward is away from `Collapsed`). Otherwise the sheet snaps
/// back to where it started.
///
/// Stateless given its inputs; velocity and translation signs follow the
/// drag-sample convention of positive `y` pointing down.
#[must_use]
pub fn decide(
    metrics: &SheetMetrics,
    thresholds: &CommitThresholds,
    state: SheetState,
    translation_y: f64,
    velocity_y: f64,
) -> SheetState {
    let distance = translation_y.abs();
    // Velocity component pointing away from the current resting state.
    let departing_velocity = match state {
        SheetState::Expanded => velocity_y,
        SheetState::Collapsed => -velocity_y,
    };
    if distance >= metrics.height() * thresholds.travel_fraction
        || departing_velocity > thresholds.fling_velocity
    {
        state.opposite()
    } else {
        state
    }
}

/// The settle decision for a cancelled or failed gesture: snap back to the
/// state that was committed before the gesture began, undoing any partial
/// drag.
#[must_use]
pub const fn revert(state: SheetState) -> SheetState {
    state
}
