// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared vocabulary types: sheet states, drag samples, and validated geometry.

use core::error::Error;
use core::fmt;

use kurbo::Vec2;

/// One of the two stable resting states of the sheet.
///
/// There is deliberately no intermediate or "partially open" persisted state;
/// a drag in flight is described by a live offset, never by a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    /// The sheet rests at its collapsed offset, mostly below the container edge.
    Collapsed,
    /// The sheet rests fully revealed at its full height.
    Expanded,
}

impl SheetState {
    /// Returns the other resting state.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Phase of a drag gesture sample.
///
/// A well-formed gesture session delivers `Began`, zero or more `Changed`,
/// and then exactly one of `Ended` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// The gesture was recognized; translation starts at zero.
    Began,
    /// The pointer moved while the gesture is active.
    Changed,
    /// The pointer lifted; the sheet must settle.
    Ended,
    /// The gesture was cancelled or failed recognition; the sheet snaps back.
    Cancelled,
}

/// A single gesture sample as delivered by the host's pan-gesture source.
///
/// `translation` is cumulative since the gesture began; `velocity` is the
/// instantaneous pointer velocity in units per second. Both are 2-D as a pan
/// source reports them; the sheet core consumes only the vertical components
/// via [`translation_y`](Self::translation_y) and
/// [`velocity_y`](Self::velocity_y). Positive `y` points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Phase of this sample within the gesture session.
    pub phase: DragPhase,
    /// Cumulative pointer translation since the gesture began.
    pub translation: Vec2,
    /// Instantaneous pointer velocity in units per second.
    pub velocity: Vec2,
}

impl DragSample {
    /// A `Began` sample; translation and velocity start at zero.
    #[must_use]
    pub const fn began() -> Self {
        Self {
            phase: DragPhase::Began,
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    /// A `Changed` sample with the given cumulative translation and velocity.
    #[must_use]
    pub const fn changed(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
            velocity,
        }
    }

    /// An `Ended` sample with the final cumulative translation and release velocity.
    #[must_use]
    pub const fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation,
            velocity,
        }
    }

    /// A `Cancelled` sample.
    ///
    /// Translation and velocity are irrelevant to the snap-back decision, so
    /// none are carried.
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            phase: DragPhase::Cancelled,
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    /// Vertical component of the cumulative translation.
    #[must_use]
    pub const fn translation_y(&self) -> f64 {
        self.translation.y
    }

    /// Vertical component of the instantaneous velocity.
    #[must_use]
    pub const fn velocity_y(&self) -> f64 {
        self.velocity.y
    }
}

/// Validated sheet geometry.
///
/// `height` is the total travel distance between the two resting offsets;
/// `collapsed_offset` is how much of the sheet stays visible when collapsed.
/// Offsets produced from these metrics are non-positive distances of the
/// sheet's top edge from the container's bottom edge: `-height` when expanded,
/// `-collapsed_offset` when collapsed.
///
/// Construction validates the dimensions; an invalid geometry is rejected with
/// a [`MetricsError`] rather than producing a sheet that cannot settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetMetrics {
    height: f64,
    collapsed_offset: f64,
}

impl SheetMetrics {
    /// Creates validated metrics.
    ///
    /// # Errors
    ///
    /// - [`MetricsError::NonPositiveHeight`] unless `height` is finite and `> 0`.
    /// - [`MetricsError::CollapsedOffsetOutOfRange`] unless `collapsed_offset`
    ///   is finite and in `[0, height)`. A collapsed offset at or past the full
    ///   height would leave no travel distance at all.
    pub fn new(height: f64, collapsed_offset: f64) -> Result<Self, MetricsError> {
        if !height.is_finite() || height <= 0.0 {
            return Err(MetricsError::NonPositiveHeight(height));
        }
        if !collapsed_offset.is_finite() || collapsed_offset < 0.0 || collapsed_offset >= height {
            return Err(MetricsError::CollapsedOffsetOutOfRange(collapsed_offset));
        }
        Ok(Self {
            height,
            collapsed_offset,
        })
    }

    /// Total travel distance between the two resting offsets.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Visible extent of the sheet when collapsed.
    #[must_use]
    pub const fn collapsed_offset(&self) -> f64 {
        self.collapsed_offset
    }

    /// The committed offset of the [`SheetState::Expanded`] state: `-height`.
    #[must_use]
    pub const fn expanded_resting_offset(&self) -> f64 {
        -self.height
    }

    /// The committed offset of the [`SheetState::Collapsed`] state: `-collapsed_offset`.
    #[must_use]
    pub const fn collapsed_resting_offset(&self) -> f64 {
        -self.collapsed_offset
    }

    /// The committed offset for `state`.
    #[must_use]
    pub const fn resting_offset(&self, state: SheetState) -> f64 {
        match state {
            SheetState::Collapsed => self.collapsed_resting_offset(),
            SheetState::Expanded => self.expanded_resting_offset(),
        }
    }
}

/// Rejected sheet geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricsError {
    /// The sheet height was not a finite positive number.
    NonPositiveHeight(f64),
    /// The collapsed offset was not finite, was negative, or was at or past
    /// the sheet height.
    CollapsedOffsetOutOfRange(f64),
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveHeight(h) => {
                write!(f, "sheet height must be finite and positive, got {h}")
            }
            Self::CollapsedOffsetOutOfRange(o) => write!(
                f,
                "collapsed offset must be finite and in [0, height), got {o}"
            ),
        }
    }
}

impl Error for MetricsError {}
