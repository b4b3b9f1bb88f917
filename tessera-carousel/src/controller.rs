//! Carousel controller driving a scroll surface.
//!
//! ## Usage
//!
//! Feed scroll events from the host surface into the controller, call
//! [`CarouselController::tick`] from the frame loop, and read the current pane
//! back for rendering.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::{
    args::{AutoplayDirection, CarouselArgs},
    callbacks::CarouselEvent,
    geometry::ScrollOffset,
    pagination::{self, Pagination},
    state::{CarouselState, IndexUpdate},
    surface::ScrollSurface,
    timer::{Deadline, Instant, earliest},
};

/// Delay before the surface is moved off a clone after a wrapping settle.
///
/// Gives the surface time to finish its own settle pass first.
pub const REALIGN_DELAY: Duration = Duration::from_millis(50);

/// Lifecycle phase of the drag state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CarouselPhase {
    /// Nothing is moving.
    #[default]
    Idle,
    /// A user drag or an animated jump is in flight.
    Dragging,
    /// A settle is being reconciled with the index state.
    Settling,
    /// The surface rests on a clone and waits for the silent jump back.
    Realigning,
}

/// Controller reconciling scroll offsets with a discrete pane index.
pub struct CarouselController<S> {
    args: CarouselArgs,
    state: CarouselState,
    phase: CarouselPhase,
    surface: S,
    autoplay_timer: Deadline,
    realign_timer: Deadline,
    disposed: bool,
}

impl<S: ScrollSurface> CarouselController<S> {
    /// Creates a controller for `surface` and starts autoplay when enabled.
    pub fn new(args: CarouselArgs, surface: S, now: Instant) -> Self {
        let state = CarouselState::initialize(&args, None);
        let mut controller = Self {
            args,
            state,
            phase: CarouselPhase::Idle,
            surface,
            autoplay_timer: Deadline::new(),
            realign_timer: Deadline::new(),
            disposed: false,
        };
        controller.schedule_autoplay(now);
        controller
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Returns the current pane index.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Returns the drag state machine phase.
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Returns the active configuration.
    pub fn args(&self) -> &CarouselArgs {
        &self.args
    }

    /// Returns the driven surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the driven surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns whether [`Self::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns the earliest instant at which [`Self::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.disposed {
            return None;
        }
        earliest(self.autoplay_timer.at(), self.realign_timer.at())
    }

    /// Returns the pagination dots to render, if any.
    pub fn pagination(&self) -> Option<Pagination> {
        pagination::pagination(&self.state)
    }

    /// Returns whether a "previous" button should be offered.
    pub fn show_previous_button(&self) -> bool {
        pagination::show_previous_button(&self.state)
    }

    /// Returns whether a "next" button should be offered.
    pub fn show_next_button(&self) -> bool {
        pagination::show_next_button(&self.state)
    }

    /// Returns the title of the current pane from per-pane `titles`.
    pub fn current_title<'a, T>(&self, titles: &'a [Option<T>]) -> Option<&'a T> {
        pagination::current_title(&self.state, titles)
    }

    /// Returns whether the renderer should load the pane at `position` of the
    /// backing sequence.
    pub fn is_position_loaded(&self, position: usize) -> bool {
        pagination::loaded_positions(&self.state, &self.args).contains(&position)
    }

    /// Applies a new configuration.
    ///
    /// The current pane survives when the pane count is unchanged. Pending
    /// realignment is dropped and the surface is moved silently if the current
    /// pane now sits at a different backing position.
    pub fn reconfigure(&mut self, args: CarouselArgs, now: Instant) {
        if self.disposed {
            return;
        }

        let previous = self.state;
        self.state = CarouselState::initialize(&args, Some(&previous));
        self.args = args;
        self.phase = CarouselPhase::Idle;
        self.realign_timer.cancel();
        debug!(
            pane_count = self.state.pane_count,
            current_index = self.state.current_index,
            "carousel reconfigured"
        );

        let position = self.state.backing_position();
        if self.state.is_pageable() && position != previous.backing_position() {
            self.jump_silently(position);
        }

        if !self.autoplay_eligible() {
            self.autoplay_timer.cancel();
        } else if !self.autoplay_timer.is_armed() {
            self.schedule_autoplay(now);
        }

        if previous.current_index != self.state.current_index {
            self.emit(CarouselEvent::IndexChanged {
                from: previous.current_index,
                to: self.state.current_index,
            });
        }
    }

    /// Handles the start of a user drag.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_scroll_begin(&mut self) {
        if self.disposed {
            return;
        }
        self.flush_realignment();
        self.autoplay_timer.cancel();
        self.state.is_dragging = true;
        self.phase = CarouselPhase::Dragging;
        self.emit(CarouselEvent::ScrollBegin);
    }

    /// Handles the surface settling at `offset`.
    ///
    /// Returns how the index state changed.
    #[tracing::instrument(level = "debug", skip(self, now))]
    pub fn on_scroll_end(&mut self, offset: ScrollOffset, now: Instant) -> IndexUpdate {
        if self.disposed {
            return IndexUpdate::Unchanged;
        }

        self.phase = CarouselPhase::Settling;
        self.state.is_dragging = false;
        let update = self.state.update_index(offset);
        match update {
            IndexUpdate::Unchanged => trace!("settled without movement"),
            IndexUpdate::Moved { from, to } => debug!(from, to, "settled on pane"),
            IndexUpdate::Wrapped { from, to } => debug!(from, to, "settled on clone, wrapping"),
        }

        self.phase = CarouselPhase::Idle;
        self.schedule_autoplay(now);
        if self.state.pending_loop_realignment {
            self.realign_timer.schedule(now, REALIGN_DELAY);
            self.phase = CarouselPhase::Realigning;
        }

        if let IndexUpdate::Moved { from, to } | IndexUpdate::Wrapped { from, to } = update
            && from != to
        {
            self.emit(CarouselEvent::IndexChanged { from, to });
        }
        self.emit(CarouselEvent::Settled { offset });
        update
    }

    /// Handles the user releasing a drag at `offset`.
    ///
    /// Some surfaces never settle when a drag at the first or last pane is
    /// released without movement; the drag is finished here in that case.
    pub fn on_scroll_end_drag(&mut self, offset: ScrollOffset, now: Instant) {
        if self.disposed {
            return;
        }

        let axis = self.state.axis;
        let reported = axis.component(offset);
        let unmoved = !reported.is_finite() || reported == axis.component(self.state.current_offset);
        if unmoved && (self.state.is_first() || self.state.is_last()) {
            trace!("drag released at an edge without movement");
            self.state.is_dragging = false;
            if self.phase == CarouselPhase::Dragging {
                self.phase = CarouselPhase::Idle;
            }
            self.schedule_autoplay(now);
        }
        self.emit(CarouselEvent::DragEnd { offset });
    }

    /// Animates `pages` panes forward (positive) or backward (negative).
    ///
    /// Returns `false` when the request was ignored: while dragging, with
    /// fewer than two panes, when the target lies outside the backing sequence
    /// or when the surface refused the jump.
    #[tracing::instrument(level = "debug", skip(self, now))]
    pub fn advance_by(&mut self, pages: isize, now: Instant) -> bool {
        if self.disposed || self.state.is_dragging || !self.state.is_pageable() {
            return false;
        }
        self.flush_realignment();

        let len = self.state.backing_len();
        let target = match (self.state.backing_position() as isize).checked_add(pages) {
            Some(target) if (0..len as isize).contains(&target) => target,
            _ => {
                debug!(pages, len, "advance target outside the backing sequence");
                return false;
            }
        };

        if let Err(err) = self.surface.jump_to_page(target, true) {
            warn!("Failed to advance carousel: {err}");
            return false;
        }

        self.state.autoplay_suspended = false;
        self.state.is_dragging = true;
        self.phase = CarouselPhase::Dragging;
        self.autoplay_timer.cancel();

        if !self.surface.emits_settle_on_jump() {
            let offset = self.state.offset_for_position(target);
            self.on_scroll_end(offset, now);
        }
        true
    }

    /// Advances to the next pane.
    pub fn next(&mut self, now: Instant) -> bool {
        self.advance_by(1, now)
    }

    /// Goes back to the previous pane.
    pub fn previous(&mut self, now: Instant) -> bool {
        self.advance_by(-1, now)
    }

    /// Fires every deadline that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        if self.realign_timer.take_if_due(now) {
            self.realign();
        }
        if self.autoplay_timer.take_if_due(now) {
            self.autoplay_tick(now);
        }
    }

    /// Cancels every pending deadline. All further events are ignored.
    pub fn dispose(&mut self) {
        self.autoplay_timer.cancel();
        self.realign_timer.cancel();
        self.disposed = true;
        debug!("carousel disposed");
    }

    fn autoplay_tick(&mut self, now: Instant) {
        if self.state.is_dragging || !self.args.autoplay_enabled() {
            return;
        }
        if self.at_autoplay_boundary() {
            debug!(
                current_index = self.state.current_index,
                "autoplay reached the last pane"
            );
            self.state.autoplay_suspended = true;
            return;
        }
        if !self.advance_by(self.args.autoplay_direction.step(), now) {
            self.schedule_autoplay(now);
        }
    }

    fn at_autoplay_boundary(&self) -> bool {
        if self.state.loop_active() {
            return false;
        }
        match self.args.autoplay_direction {
            AutoplayDirection::Forward => self.state.is_last(),
            AutoplayDirection::Backward => self.state.is_first(),
        }
    }

    fn autoplay_eligible(&self) -> bool {
        !self.disposed
            && self.args.autoplay_enabled()
            && !self.state.is_dragging
            && !self.state.autoplay_suspended
    }

    fn schedule_autoplay(&mut self, now: Instant) {
        if self.state.autoplay_suspended && !self.at_autoplay_boundary() {
            self.state.autoplay_suspended = false;
        }
        if self.autoplay_eligible() {
            self.autoplay_timer.schedule(now, self.args.autoplay_timeout);
        } else {
            self.autoplay_timer.cancel();
        }
    }

    fn flush_realignment(&mut self) {
        if self.realign_timer.is_armed() {
            self.realign_timer.cancel();
            self.realign();
        }
    }

    fn realign(&mut self) {
        if !self.state.pending_loop_realignment {
            return;
        }
        let position = self.state.backing_position();
        trace!(position, "realigning off clone");
        self.jump_silently(position);
        self.state.pending_loop_realignment = false;
        if self.phase == CarouselPhase::Realigning {
            self.phase = CarouselPhase::Idle;
        }
    }

    fn jump_silently(&mut self, position: usize) {
        if let Err(err) = self.surface.jump_to_page(position as isize, false) {
            warn!("Failed to reposition carousel surface: {err}");
        }
    }

    fn emit(&self, event: CarouselEvent) {
        self.args.callbacks.emit(event, &self.state);
    }
}

impl<S> std::fmt::Debug for CarouselController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("autoplay_timer", &self.autoplay_timer)
            .field("realign_timer", &self.realign_timer)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
