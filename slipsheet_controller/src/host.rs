// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout-host boundary: commands the controller issues and the semantic
//! animation parameters they carry.

/// Easing curve of an animated transition, by semantic kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// A linear ramp.
    Linear,
    /// Fast start, decelerating finish.
    EaseOut,
}

/// Spring parameters layered on top of a transition's easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio in `(0, 1]`; lower values oscillate more.
    pub damping: f64,
    /// Initial velocity as a fraction of the total travel per second.
    pub initial_velocity: f64,
}

/// Semantic description of one animated transition.
///
/// The host owns the actual animation machinery; the controller only states
/// duration, curve kind, and optional spring behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
    /// Easing curve kind.
    pub curve: Curve,
    /// Optional spring layered on the curve.
    pub spring: Option<SpringSpec>,
}

impl TransitionSpec {
    /// The default reveal (expand) transition: 200 ms, linear, no spring.
    pub const REVEAL: Self = Self {
        duration_ms: 200,
        curve: Curve::Linear,
        spring: None,
    };

    /// The default conceal (collapse) transition: 300 ms, ease-out, with a
    /// 0.8-damped spring entered at half the travel per second.
    pub const CONCEAL: Self = Self {
        duration_ms: 300,
        curve: Curve::EaseOut,
        spring: Some(SpringSpec {
            damping: 0.8,
            initial_velocity: 0.5,
        }),
    };
}

/// The transition specs a controller uses for its two settle directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTimings {
    /// Spec used when settling toward `Expanded`.
    pub reveal: TransitionSpec,
    /// Spec used when settling toward `Collapsed`.
    pub conceal: TransitionSpec,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            reveal: TransitionSpec::REVEAL,
            conceal: TransitionSpec::CONCEAL,
        }
    }
}

/// Identifies one animated transition issued by a controller.
///
/// Tickets are handed to [`LayoutHost::animated_transition`] and must be
/// passed back verbatim to
/// [`SheetController::transition_completed`](crate::SheetController::transition_completed)
/// when the animation finishes. They increase monotonically per controller,
/// which is how completions of superseded transitions are recognized and
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransitionTicket(pub(crate) u64);

/// The layout machinery the sheet controller drives.
///
/// Implementations apply offsets to whatever positions the sheet — a layout
/// constraint, a transform, a style property. The controller never touches
/// rendering directly; these two commands are its entire outward surface.
pub trait LayoutHost {
    /// Applies `offset` immediately, without animation. Must return
    /// synchronously.
    fn layout_update(&mut self, offset: f64);

    /// Starts an animation toward `offset` described by `spec`.
    ///
    /// Fire-and-forget from the controller's perspective: the host performs
    /// the animation on its own time and reports completion by calling
    /// [`SheetController::transition_completed`](crate::SheetController::transition_completed)
    /// with `ticket`. Completion order does not matter; the controller
    /// discards tickets that are no longer current.
    fn animated_transition(&mut self, offset: f64, spec: &TransitionSpec, ticket: TransitionTicket);
}
