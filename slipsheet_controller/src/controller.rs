// Copyright 2025 the Slipsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet session controller: owns the committed state, routes drag
//! samples through the gesture core, and issues host commands.

use slipsheet_gesture::{
    CommitThresholds, DragPhase, DragSample, MetricsError, SheetMetrics, SheetState, Travel,
    settle, travel,
};

use crate::host::{LayoutHost, TransitionTicket, TransitionTimings};

/// Construction-time configuration for a [`SheetController`].
///
/// `height` and `collapsed_offset` are validated into [`SheetMetrics`] when
/// the controller is built. Thresholds and timings default to the
/// conventional values and can be overridden by struct update:
///
/// ```rust
/// use slipsheet_controller::SheetConfig;
/// use slipsheet_gesture::CommitThresholds;
///
/// let config = SheetConfig {
///     initially_expanded: true,
///     thresholds: CommitThresholds {
///         travel_fraction: 0.4,
///         ..CommitThresholds::DEFAULT
///     },
///     ..SheetConfig::new(300.0, 40.0)
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Total travel distance between the two resting offsets. Must be finite
    /// and positive.
    pub height: f64,
    /// Visible extent of the sheet when collapsed. Must be finite and in
    /// `[0, height)`.
    pub collapsed_offset: f64,
    /// Whether the sheet starts in the `Expanded` state.
    pub initially_expanded: bool,
    /// Settle-decision thresholds.
    pub thresholds: CommitThresholds,
    /// Animation parameters for the two settle directions.
    pub timings: TransitionTimings,
}

impl SheetConfig {
    /// A configuration with the given geometry, starting collapsed, with
    /// default thresholds and timings.
    #[must_use]
    pub fn new(height: f64, collapsed_offset: f64) -> Self {
        Self {
            height,
            collapsed_offset,
            initially_expanded: false,
            thresholds: CommitThresholds::DEFAULT,
            timings: TransitionTimings::default(),
        }
    }
}

/// The animated transition currently in flight, if any.
#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: TransitionTicket,
    target: SheetState,
}

/// Session owner for one bottom sheet.
///
/// The controller:
/// - owns the committed [`SheetState`] and the [`LayoutHost`],
/// - applies live offsets on every `Changed` sample (unanimated),
/// - settles released and cancelled gestures via one animated transition,
/// - tags each animated transition with a monotonic [`TransitionTicket`] so a
///   completion that arrives after a newer transition was issued cannot
///   clobber the newer outcome.
///
/// It expects strictly sequential gesture phases per session
/// (`Began` → zero or more `Changed` → one of `Ended`/`Cancelled`) on a
/// single logical thread. A new gesture or programmatic call arriving while
/// an animation is in flight simply overrides the in-flight target; the last
/// writer wins.
///
/// The committed state only changes when a transition finishes (or
/// immediately, for unanimated transitions). While an animation is in flight
/// [`state`](Self::state) still reports the previously committed state,
/// matching the settle decision's view of "where the sheet started".
#[derive(Debug)]
pub struct SheetController<H: LayoutHost> {
    host: H,
    metrics: SheetMetrics,
    thresholds: CommitThresholds,
    timings: TransitionTimings,
    state: SheetState,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl<H: LayoutHost> SheetController<H> {
    /// Creates a controller over `host`.
    ///
    /// No host commands are issued here; the host is expected to have laid
    /// the sheet out at [`resting_offset`](Self::resting_offset).
    ///
    /// # Errors
    ///
    /// Returns the underlying [`MetricsError`] when the configured geometry
    /// is invalid. The controller is not constructed in that case.
    pub fn new(host: H, config: SheetConfig) -> Result<Self, MetricsError> {
        let metrics = SheetMetrics::new(config.height, config.collapsed_offset)?;
        let state = if config.initially_expanded {
            SheetState::Expanded
        } else {
            SheetState::Collapsed
        };
        Ok(Self {
            host,
            metrics,
            thresholds: config.thresholds,
            timings: config.timings,
            state,
            pending: None,
            next_ticket: 0,
        })
    }

    /// The committed state. Unaffected by an in-flight drag or animation.
    #[must_use]
    pub const fn state(&self) -> SheetState {
        self.state
    }

    /// The state the sheet is settling toward: the in-flight transition's
    /// target if one is pending, otherwise the committed state.
    #[must_use]
    pub const fn target_state(&self) -> SheetState {
        match self.pending {
            Some(p) => p.target,
            None => self.state,
        }
    }

    /// The committed resting offset for the current state.
    #[must_use]
    pub const fn resting_offset(&self) -> f64 {
        self.metrics.resting_offset(self.state)
    }

    /// The validated sheet geometry.
    #[must_use]
    pub const fn metrics(&self) -> &SheetMetrics {
        &self.metrics
    }

    /// Shared access to the owned layout host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the owned layout host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Feeds one gesture sample into the controller.
    ///
    /// - `Began`/`Changed`: tracks the live offset and issues an unanimated
    ///   [`LayoutHost::layout_update`]; wrong-direction drags are silent
    ///   no-ops. An upward drag from `Collapsed` that covers the full travel
    ///   distance commits to `Expanded` immediately, without waiting for the
    ///   gesture to end.
    /// - `Ended`: runs the settle decision and issues one animated
    ///   transition toward the winner.
    /// - `Cancelled`: snaps back to the state committed before the gesture
    ///   began, undoing any partial drag.
    pub fn on_drag(&mut self, sample: DragSample) {
        match sample.phase {
            DragPhase::Began | DragPhase::Changed => {
                match travel::track(&self.metrics, self.state, sample.translation_y()) {
                    Travel::Moved(offset) => self.host.layout_update(offset),
                    Travel::Unmoved => {}
                    Travel::FullTravel => self.show(true),
                }
            }
            DragPhase::Ended => {
                let target = settle::decide(
                    &self.metrics,
                    &self.thresholds,
                    self.state,
                    sample.translation_y(),
                    sample.velocity_y(),
                );
                self.settle_to(target);
            }
            DragPhase::Cancelled => self.settle_to(settle::revert(self.state)),
        }
    }

    /// Settles the sheet at `Expanded`.
    ///
    /// Animated, this issues one [`LayoutHost::animated_transition`] with the
    /// reveal timing and commits the state when the host reports completion.
    /// Unanimated, the offset is applied and the state committed
    /// synchronously, and any pending transition is invalidated.
    pub fn show(&mut self, animated: bool) {
        self.transition(SheetState::Expanded, animated);
    }

    /// Settles the sheet at `Collapsed`, with the conceal timing. Otherwise
    /// as [`show`](Self::show).
    pub fn hide(&mut self, animated: bool) {
        self.transition(SheetState::Collapsed, animated);
    }

    /// Reports that the animated transition tagged `ticket` finished.
    ///
    /// Commits the transition's target state only when `ticket` is the most
    /// recently issued transition; completions of superseded transitions are
    /// ignored, so out-of-order completion cannot clobber a newer outcome.
    pub fn transition_completed(&mut self, ticket: TransitionTicket) {
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.state = p.target;
                self.pending = None;
            }
            // Stale: a newer transition or unanimated settle superseded it.
            _ => {}
        }
    }

    fn settle_to(&mut self, target: SheetState) {
        match target {
            SheetState::Expanded => self.show(true),
            SheetState::Collapsed => self.hide(true),
        }
    }

    fn transition(&mut self, target: SheetState, animated: bool) {
        let offset = self.metrics.resting_offset(target);
        if animated {
            let ticket = TransitionTicket(self.next_ticket);
            self.next_ticket += 1;
            self.pending = Some(Pending { ticket, target });
            let spec = match target {
                SheetState::Expanded => self.timings.reveal,
                SheetState::Collapsed => self.timings.conceal,
            };
            self.host.animated_transition(offset, &spec, ticket);
        } else {
            // Synchronous settle supersedes any in-flight animation.
            self.pending = None;
            self.state = target;
            self.host.layout_update(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Vec2;

    use super::*;
    use crate::host::{Curve, TransitionSpec};

    /// Records every command the controller issues.
    #[derive(Debug, Default)]
    struct RecordingHost {
        commands: Vec<Command>,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Command {
        Layout(f64),
        Animate {
            offset: f64,
            spec: TransitionSpec,
            ticket: TransitionTicket,
        },
    }

    impl LayoutHost for RecordingHost {
        fn layout_update(&mut self, offset: f64) {
            self.commands.push(Command::Layout(offset));
        }

        fn animated_transition(
            &mut self,
            offset: f64,
            spec: &TransitionSpec,
            ticket: TransitionTicket,
        ) {
            self.commands.push(Command::Animate {
                offset,
                spec: *spec,
                ticket,
            });
        }
    }

    fn controller(initially_expanded: bool) -> SheetController<RecordingHost> {
        let config = SheetConfig {
            initially_expanded,
            ..SheetConfig::new(300.0, 40.0)
        };
        SheetController::new(RecordingHost::default(), config).unwrap()
    }

    fn y(v: f64) -> Vec2 {
        Vec2::new(0.0, v)
    }

    /// The ticket of the most recent animate command.
    fn last_ticket(c: &SheetController<RecordingHost>) -> TransitionTicket {
        c.host()
            .commands
            .iter()
            .rev()
            .find_map(|cmd| match cmd {
                Command::Animate { ticket, .. } => Some(*ticket),
                Command::Layout(_) => None,
            })
            .expect("no animated transition was issued")
    }

    #[test]
    fn construction_rejects_bad_geometry() {
        let config = SheetConfig::new(0.0, 0.0);
        assert!(SheetController::new(RecordingHost::default(), config).is_err());
    }

    #[test]
    fn initial_state_follows_configuration() {
        assert_eq!(controller(false).state(), SheetState::Collapsed);
        assert_eq!(controller(true).state(), SheetState::Expanded);
        assert_eq!(controller(false).resting_offset(), -40.0);
        assert_eq!(controller(true).resting_offset(), -300.0);
    }

    #[test]
    fn changed_samples_issue_unanimated_layout_updates() {
        let mut c = controller(false);
        c.on_drag(DragSample::began());
        c.on_drag(DragSample::changed(y(-100.0), y(-500.0)));
        c.on_drag(DragSample::changed(y(-150.0), y(-500.0)));
        assert_eq!(
            c.host().commands,
            vec![Command::Layout(-140.0), Command::Layout(-190.0)]
        );
        // Still collapsed: nothing has been committed yet.
        assert_eq!(c.state(), SheetState::Collapsed);
    }

    #[test]
    fn wrong_direction_drags_are_silent_no_ops() {
        let mut c = controller(false);
        c.on_drag(DragSample::began());
        c.on_drag(DragSample::changed(y(80.0), y(400.0)));
        assert!(c.host().commands.is_empty());

        let mut c = controller(true);
        c.on_drag(DragSample::changed(y(-80.0), y(-400.0)));
        assert!(c.host().commands.is_empty());
    }

    #[test]
    fn fast_upward_release_commits_expanded() {
        // height=300, collapsed_offset=40: drag up 200, release at -1200.
        let mut c = controller(false);
        c.on_drag(DragSample::began());
        c.on_drag(DragSample::changed(y(-200.0), y(-800.0)));
        c.on_drag(DragSample::ended(y(-200.0), y(-1200.0)));

        assert_eq!(
            c.host().commands.last(),
            Some(&Command::Animate {
                offset: -300.0,
                spec: TransitionSpec::REVEAL,
                ticket: last_ticket(&c),
            })
        );
        assert_eq!(c.target_state(), SheetState::Expanded);

        // The state commits when the host reports completion.
        assert_eq!(c.state(), SheetState::Collapsed);
        let ticket = last_ticket(&c);
        c.transition_completed(ticket);
        assert_eq!(c.state(), SheetState::Expanded);
    }

    #[test]
    fn short_slow_downward_drag_snaps_back_to_expanded() {
        let mut c = controller(true);
        c.on_drag(DragSample::began());
        c.on_drag(DragSample::changed(y(50.0), y(200.0)));
        c.on_drag(DragSample::ended(y(50.0), y(0.0)));

        assert_eq!(
            c.host().commands,
            vec![
                Command::Layout(-250.0),
                Command::Animate {
                    offset: -300.0,
                    spec: TransitionSpec::REVEAL,
                    ticket: last_ticket(&c),
                },
            ]
        );
        c.transition_completed(last_ticket(&c));
        assert_eq!(c.state(), SheetState::Expanded);
    }

    #[test]
    fn full_travel_mid_gesture_commits_immediately() {
        let mut c = controller(false);
        c.on_drag(DragSample::began());
        // Exceeds the full travel distance while the gesture is still active.
        c.on_drag(DragSample::changed(y(-310.0), y(-900.0)));

        assert_eq!(
            c.host().commands,
            vec![Command::Animate {
                offset: -300.0,
                spec: TransitionSpec::REVEAL,
                ticket: last_ticket(&c),
            }]
        );
        c.transition_completed(last_ticket(&c));
        assert_eq!(c.state(), SheetState::Expanded);
    }

    #[test]
    fn cancelled_gesture_reverts_partial_drag() {
        let mut c = controller(false);
        c.on_drag(DragSample::began());
        // Most of the travel distance covered, then the gesture fails.
        c.on_drag(DragSample::changed(y(-250.0), y(-600.0)));
        c.on_drag(DragSample::cancelled());

        assert_eq!(
            c.host().commands.last(),
            Some(&Command::Animate {
                offset: -40.0,
                spec: TransitionSpec::CONCEAL,
                ticket: last_ticket(&c),
            })
        );
        c.transition_completed(last_ticket(&c));
        assert_eq!(c.state(), SheetState::Collapsed);
    }

    #[test]
    fn show_twice_settles_expanded_without_state_leaks() {
        let mut c = controller(false);
        c.show(true);
        let first = last_ticket(&c);
        c.show(true);
        let second = last_ticket(&c);
        assert_ne!(first, second);

        // The superseded completion is ignored.
        c.transition_completed(first);
        assert_eq!(c.state(), SheetState::Collapsed);
        c.transition_completed(second);
        assert_eq!(c.state(), SheetState::Expanded);
    }

    #[test]
    fn out_of_order_completion_cannot_clobber_newer_transition() {
        let mut c = controller(true);
        c.hide(true);
        let hide_ticket = last_ticket(&c);
        c.show(true);
        let show_ticket = last_ticket(&c);

        // show completes first, then hide's completion straggles in.
        c.transition_completed(show_ticket);
        assert_eq!(c.state(), SheetState::Expanded);
        c.transition_completed(hide_ticket);
        assert_eq!(c.state(), SheetState::Expanded);
    }

    #[test]
    fn unanimated_settle_is_synchronous_and_supersedes_pending() {
        let mut c = controller(true);
        c.hide(true);
        let hide_ticket = last_ticket(&c);

        c.show(false);
        assert_eq!(c.state(), SheetState::Expanded);
        assert_eq!(c.host().commands.last(), Some(&Command::Layout(-300.0)));

        // The in-flight hide was invalidated by the synchronous settle.
        c.transition_completed(hide_ticket);
        assert_eq!(c.state(), SheetState::Expanded);
    }

    #[test]
    fn unknown_ticket_is_ignored() {
        let mut c = controller(false);
        c.transition_completed(TransitionTicket(17));
        assert_eq!(c.state(), SheetState::Collapsed);
    }

    #[test]
    fn new_gesture_mid_animation_overrides_in_flight_target() {
        let mut c = controller(false);
        c.show(true);
        let stale = last_ticket(&c);

        // A fresh gesture starts before the reveal finishes and tracks from
        // the committed (still Collapsed) state.
        c.on_drag(DragSample::began());
        c.on_drag(DragSample::changed(y(-100.0), y(-300.0)));
        assert_eq!(c.host().commands.last(), Some(&Command::Layout(-140.0)));
        c.on_drag(DragSample::ended(y(-100.0), y(0.0)));
        let newer = last_ticket(&c);

        c.transition_completed(newer);
        assert_eq!(c.state(), SheetState::Collapsed);
        c.transition_completed(stale);
        assert_eq!(c.state(), SheetState::Collapsed);
    }

    #[test]
    fn custom_timings_reach_the_host() {
        let timings = TransitionTimings {
            reveal: TransitionSpec {
                duration_ms: 120,
                curve: Curve::EaseOut,
                spring: None,
            },
            ..TransitionTimings::default()
        };
        let config = SheetConfig {
            timings,
            ..SheetConfig::new(300.0, 40.0)
        };
        let mut c = SheetController::new(RecordingHost::default(), config).unwrap();
        c.show(true);
        match c.host().commands.last() {
            Some(Command::Animate { spec, .. }) => assert_eq!(*spec, timings.reveal),
            other => panic!("expected an animated transition, got {other:?}"),
        }
    }
}
