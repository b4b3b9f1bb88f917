//! Index, offset and loop bookkeeping.
//!
//! ## Usage
//!
//! Derive the carousel state from [`CarouselArgs`] and reconcile settled scroll
//! offsets with the current pane index.

use tracing::warn;

use crate::{
    args::CarouselArgs,
    geometry::{CarouselAxis, ScrollOffset, ViewportExtent, page_step},
};

/// One position of the sequence presented to the scroll surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackingSlot {
    /// Synthetic copy of the last real pane placed before the first one.
    LeadingClone(usize),
    /// A real pane.
    Pane(usize),
    /// Synthetic copy of the first real pane placed after the last one.
    TrailingClone(usize),
}

impl BackingSlot {
    /// Returns the real pane rendered at this slot.
    pub fn pane(self) -> usize {
        match self {
            Self::LeadingClone(pane) | Self::Pane(pane) | Self::TrailingClone(pane) => pane,
        }
    }

    /// Returns whether this slot is a synthetic clone.
    pub fn is_clone(self) -> bool {
        !matches!(self, Self::Pane(_))
    }
}

/// Result of reconciling a settled offset with the index state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexUpdate {
    /// The offset did not move; nothing was changed.
    Unchanged,
    /// The offset moved within the real pane range.
    Moved {
        /// Pane that was current before the update.
        from: usize,
        /// Pane that is current now.
        to: usize,
    },
    /// The offset crossed a synthetic clone and wrapped around.
    Wrapped {
        /// Pane that was current before the update.
        from: usize,
        /// Pane that is current now.
        to: usize,
    },
}

impl IndexUpdate {
    /// Returns whether the current pane changed.
    pub fn index_changed(self) -> bool {
        match self {
            Self::Unchanged => false,
            Self::Moved { from, to } | Self::Wrapped { from, to } => from != to,
        }
    }
}

/// Snapshot of the carousel's index, offset and transient flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    /// Number of real panes.
    pub pane_count: usize,
    /// Index of the current real pane.
    pub current_index: usize,
    /// Scroll axis.
    pub axis: CarouselAxis,
    /// Visible viewport size.
    pub viewport: ViewportExtent,
    /// Last authoritative scroll offset.
    pub current_offset: ScrollOffset,
    /// Whether a drag or animated transition is in flight.
    pub is_dragging: bool,
    /// Whether autoplay stopped at a non-looping boundary.
    pub autoplay_suspended: bool,
    /// Whether the surface still shows a clone and has to be moved back
    /// silently.
    pub pending_loop_realignment: bool,
    /// Whether the state was derived with wraparound enabled.
    pub looping: bool,
}

impl CarouselState {
    /// Derives a fresh state from `args`.
    ///
    /// When `previous` has the same pane count its index is kept, so a
    /// viewport resize does not jump back to the initial pane. Transient flags
    /// always start cleared.
    pub fn initialize(args: &CarouselArgs, previous: Option<&CarouselState>) -> Self {
        let pane_count = args.pane_count;
        let current_index = match previous {
            Some(previous) if previous.pane_count == pane_count => previous.current_index,
            _ if pane_count > 1 => args.initial_index.min(pane_count - 1),
            _ => 0,
        };

        let mut state = Self {
            pane_count,
            current_index,
            axis: args.axis,
            viewport: args.viewport,
            current_offset: ScrollOffset::ZERO,
            is_dragging: false,
            autoplay_suspended: false,
            pending_loop_realignment: false,
            looping: args.looping,
        };
        if pane_count > 1 {
            state.current_offset = state.offset_for_position(state.backing_position() as isize);
        }
        state
    }

    /// Returns whether clones surround the real panes.
    pub fn loop_active(&self) -> bool {
        self.looping && self.pane_count > 1
    }

    /// Returns whether the carousel has enough panes to page at all.
    pub fn is_pageable(&self) -> bool {
        self.pane_count > 1
    }

    /// Returns whether the current pane is the first one.
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// Returns whether the current pane is the last one.
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.pane_count
    }

    /// Number of synthetic slots before the first real pane.
    pub fn leading_clones(&self) -> usize {
        usize::from(self.loop_active())
    }

    /// Position of the current pane in the backing sequence.
    pub fn backing_position(&self) -> usize {
        self.current_index + self.leading_clones()
    }

    /// Number of slots presented to the scroll surface.
    pub fn backing_len(&self) -> usize {
        self.pane_count + 2 * self.leading_clones()
    }

    /// Returns the slot at `position` of the backing sequence.
    pub fn slot_at(&self, position: usize) -> Option<BackingSlot> {
        if position >= self.backing_len() {
            return None;
        }
        if !self.loop_active() {
            return Some(BackingSlot::Pane(position));
        }
        Some(if position == 0 {
            BackingSlot::LeadingClone(self.pane_count - 1)
        } else if position == self.pane_count + 1 {
            BackingSlot::TrailingClone(0)
        } else {
            BackingSlot::Pane(position - 1)
        })
    }

    /// Returns the real pane rendered at `position` of the backing sequence.
    pub fn real_index_at(&self, position: usize) -> Option<usize> {
        self.slot_at(position).map(BackingSlot::pane)
    }

    /// Iterates over the whole backing sequence.
    pub fn backing_slots(&self) -> impl Iterator<Item = BackingSlot> + '_ {
        (0..self.backing_len()).filter_map(|position| self.slot_at(position))
    }

    /// Surface offset that shows `position` of the backing sequence.
    pub fn offset_for_position(&self, position: isize) -> ScrollOffset {
        let step = self.axis.extent(self.viewport);
        self.axis.offset(step * position as f32)
    }

    /// Reconciles a settled surface offset with the current index.
    ///
    /// The index moves by the number of whole pages the offset travelled,
    /// rounded to the nearest page so that several quick swipes landing before
    /// a single settle are all counted. Landing on a clone wraps the index
    /// around and flags a pending realignment.
    pub fn update_index(&mut self, reported: ScrollOffset) -> IndexUpdate {
        if !self.is_pageable() {
            return IndexUpdate::Unchanged;
        }
        let Some(step) = page_step(self.axis, self.viewport) else {
            return IndexUpdate::Unchanged;
        };

        let delta = self.axis.component(reported) - self.axis.component(self.current_offset);
        if !delta.is_finite() || delta == 0.0 {
            return IndexUpdate::Unchanged;
        }

        let pane_count = self.pane_count as i64;
        let from = self.current_index;
        let mut new_index = (from as i64).saturating_add((delta / step).round() as i64);
        let mut stored = self.sanitize_cross_axis(reported);
        let mut wrapped = false;

        if self.looping {
            if new_index <= -1 {
                new_index = pane_count - 1;
                stored = self.axis.with_component(stored, step * self.pane_count as f32);
                wrapped = true;
            } else if new_index >= pane_count {
                new_index = 0;
                stored = self.axis.with_component(stored, step);
                wrapped = true;
            }
        } else if !(0..pane_count).contains(&new_index) {
            warn!(
                new_index,
                pane_count, "settled offset lies outside the pane range, clamping"
            );
            new_index = new_index.clamp(0, pane_count - 1);
        }

        let to = new_index as usize;
        self.current_index = to;
        self.current_offset = stored;
        self.pending_loop_realignment = wrapped;

        if wrapped {
            IndexUpdate::Wrapped { from, to }
        } else {
            IndexUpdate::Moved { from, to }
        }
    }

    fn sanitize_cross_axis(&self, reported: ScrollOffset) -> ScrollOffset {
        let cross_axis = match self.axis {
            CarouselAxis::Horizontal => CarouselAxis::Vertical,
            CarouselAxis::Vertical => CarouselAxis::Horizontal,
        };
        if cross_axis.component(reported).is_finite() {
            reported
        } else {
            cross_axis.with_component(reported, cross_axis.component(self.current_offset))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 100.0;

    fn args(pane_count: usize, looping: bool) -> CarouselArgs {
        CarouselArgs::default()
            .pane_count(pane_count)
            .looping(looping)
            .viewport(ViewportExtent::new(STEP, 200.0))
    }

    fn state_at(pane_count: usize, looping: bool, index: usize) -> CarouselState {
        CarouselState::initialize(&args(pane_count, looping).initial_index(index), None)
    }

    #[test]
    fn initialize_places_offset_behind_leading_clone() {
        let state = state_at(3, true, 1);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.current_offset, ScrollOffset::new(2.0 * STEP, 0.0));
        assert!(!state.is_dragging);
        assert!(!state.autoplay_suspended);
        assert!(!state.pending_loop_realignment);

        let state = state_at(3, false, 1);
        assert_eq!(state.current_offset, ScrollOffset::new(STEP, 0.0));
    }

    #[test]
    fn initialize_reads_vertical_extent() {
        let args = args(4, false).axis(CarouselAxis::Vertical).initial_index(2);
        let state = CarouselState::initialize(&args, None);
        assert_eq!(state.current_offset, ScrollOffset::new(0.0, 400.0));
    }

    #[test]
    fn initialize_clamps_requested_index() {
        assert_eq!(state_at(3, true, 10).current_index, 2);
        assert_eq!(state_at(1, true, 4).current_index, 0);
        assert_eq!(state_at(0, true, 4).current_index, 0);
        assert_eq!(state_at(1, true, 0).current_offset, ScrollOffset::ZERO);
    }

    #[test]
    fn initialize_is_idempotent() {
        let args = args(4, true).initial_index(2);
        let first = CarouselState::initialize(&args, None);
        let second = CarouselState::initialize(&args, Some(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn reconfigure_keeps_index_when_pane_count_is_unchanged() {
        let mut previous = state_at(5, true, 0);
        previous.current_index = 3;
        let resized = args(5, true).viewport(ViewportExtent::new(50.0, 80.0));
        let state = CarouselState::initialize(&resized, Some(&previous));
        assert_eq!(state.current_index, 3);
        assert_eq!(state.current_offset, ScrollOffset::new(200.0, 0.0));
    }

    #[test]
    fn reconfigure_clamps_index_when_panes_shrink() {
        let previous = state_at(5, true, 4);
        let state = CarouselState::initialize(&args(3, true).initial_index(4), Some(&previous));
        assert_eq!(state.current_index, 2);
    }

    #[test]
    fn reconfigure_clears_transient_flags() {
        let mut previous = state_at(3, true, 0);
        previous.is_dragging = true;
        previous.autoplay_suspended = true;
        previous.pending_loop_realignment = true;
        let state = CarouselState::initialize(&args(3, true), Some(&previous));
        assert!(!state.is_dragging);
        assert!(!state.autoplay_suspended);
        assert!(!state.pending_loop_realignment);
    }

    #[test]
    fn backing_sequence_wraps_with_clones() {
        let state = state_at(3, true, 0);
        let slots: Vec<_> = state.backing_slots().collect();
        assert_eq!(
            slots,
            vec![
                BackingSlot::LeadingClone(2),
                BackingSlot::Pane(0),
                BackingSlot::Pane(1),
                BackingSlot::Pane(2),
                BackingSlot::TrailingClone(0),
            ]
        );
        assert_eq!(state.real_index_at(4), Some(0));
        assert_eq!(state.real_index_at(5), None);
        assert!(slots[0].is_clone());
        assert!(!slots[1].is_clone());
    }

    #[test]
    fn backing_sequence_without_loop_or_panes() {
        assert_eq!(state_at(3, false, 0).backing_len(), 3);
        assert_eq!(state_at(1, true, 0).backing_len(), 1);
        assert_eq!(state_at(0, true, 0).backing_slots().count(), 0);
    }

    #[test]
    fn update_index_ignores_unchanged_offset() {
        let mut state = state_at(3, true, 1);
        let before = state;
        assert_eq!(
            state.update_index(before.current_offset),
            IndexUpdate::Unchanged
        );
        assert_eq!(state, before);
    }

    #[test]
    fn update_index_is_idempotent() {
        let mut state = state_at(4, false, 0);
        let offset = ScrollOffset::new(2.0 * STEP, 0.0);
        assert_eq!(
            state.update_index(offset),
            IndexUpdate::Moved { from: 0, to: 2 }
        );
        let after_first = state;
        assert_eq!(state.update_index(offset), IndexUpdate::Unchanged);
        assert_eq!(state, after_first);
    }

    #[test]
    fn update_index_wraps_forward_past_trailing_clone() {
        let mut state = state_at(3, true, 2);
        let update = state.update_index(ScrollOffset::new(4.0 * STEP, 0.0));
        assert_eq!(update, IndexUpdate::Wrapped { from: 2, to: 0 });
        assert_eq!(state.current_index, 0);
        assert!(state.pending_loop_realignment);
        assert_eq!(state.current_offset, ScrollOffset::new(STEP, 0.0));
    }

    #[test]
    fn update_index_wraps_backward_past_leading_clone() {
        let mut state = state_at(3, true, 0);
        let update = state.update_index(ScrollOffset::new(-STEP, 0.0));
        assert_eq!(update, IndexUpdate::Wrapped { from: 0, to: 2 });
        assert_eq!(state.current_index, 2);
        assert!(state.pending_loop_realignment);
        assert_eq!(state.current_offset, ScrollOffset::new(3.0 * STEP, 0.0));
    }

    #[test]
    fn update_index_rounds_fast_multi_step_drags() {
        let mut state = state_at(5, false, 0);
        state.update_index(ScrollOffset::new(260.0, 0.0));
        assert_eq!(state.current_index, 3);
        assert_eq!(state.current_offset, ScrollOffset::new(260.0, 0.0));
    }

    #[test]
    fn update_index_attributes_small_noise_to_current_pane() {
        let mut state = state_at(3, true, 1);
        let update = state.update_index(ScrollOffset::new(2.0 * STEP + 0.4, 0.0));
        assert_eq!(update, IndexUpdate::Moved { from: 1, to: 1 });
        assert!(!update.index_changed());
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn update_index_clears_stale_realignment_flag() {
        let mut state = state_at(3, true, 0);
        state.pending_loop_realignment = true;
        state.update_index(ScrollOffset::new(2.0 * STEP, 0.0));
        assert_eq!(state.current_index, 1);
        assert!(!state.pending_loop_realignment);
    }

    #[test]
    fn update_index_treats_non_finite_offsets_as_no_movement() {
        let mut state = state_at(3, true, 1);
        let before = state;
        assert_eq!(
            state.update_index(ScrollOffset::new(f32::NAN, 0.0)),
            IndexUpdate::Unchanged
        );
        assert_eq!(
            state.update_index(ScrollOffset::new(f32::INFINITY, 0.0)),
            IndexUpdate::Unchanged
        );
        assert_eq!(state, before);
    }

    #[test]
    fn update_index_is_disabled_for_single_pane_and_zero_step() {
        let mut single = state_at(1, true, 0);
        assert_eq!(
            single.update_index(ScrollOffset::new(STEP, 0.0)),
            IndexUpdate::Unchanged
        );

        let flat_args = args(3, true).viewport(ViewportExtent::ZERO);
        let mut flat = CarouselState::initialize(&flat_args, None);
        assert_eq!(
            flat.update_index(ScrollOffset::new(STEP, 0.0)),
            IndexUpdate::Unchanged
        );
    }

    #[test]
    fn update_index_only_reads_active_axis() {
        let mut state = state_at(3, false, 0);
        assert_eq!(
            state.update_index(ScrollOffset::new(0.0, 500.0)),
            IndexUpdate::Unchanged
        );
    }

    #[test]
    fn update_index_clamps_out_of_contract_reports_without_loop() {
        let mut state = state_at(3, false, 2);
        state.update_index(ScrollOffset::new(6.0 * STEP, 0.0));
        assert_eq!(state.current_index, 2);
        state.update_index(ScrollOffset::new(-4.0 * STEP, 0.0));
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn loop_invariant_holds_after_exact_settles() {
        let mut state = state_at(4, true, 0);
        for target in [2.0, 3.0, 5.0, 0.0, 4.0, 1.0] {
            state.update_index(ScrollOffset::new(target * STEP, 0.0));
            assert_eq!(
                state.current_offset.x,
                STEP * (state.current_index + 1) as f32,
                "after settling at backing position {target}"
            );
        }
    }

    #[test]
    fn update_index_saturates_huge_offsets() {
        let mut looping = state_at(3, true, 1);
        let update = looping.update_index(ScrollOffset::new(1e30, 0.0));
        assert_eq!(update, IndexUpdate::Wrapped { from: 1, to: 0 });
        assert_eq!(looping.current_offset, ScrollOffset::new(STEP, 0.0));

        let mut looping = state_at(3, true, 1);
        let update = looping.update_index(ScrollOffset::new(-1e30, 0.0));
        assert_eq!(update, IndexUpdate::Wrapped { from: 1, to: 2 });

        let mut bounded = state_at(3, false, 1);
        bounded.update_index(ScrollOffset::new(1e30, 0.0));
        assert_eq!(bounded.current_index, 2);
        assert!(!bounded.pending_loop_realignment);

        let mut bounded = state_at(3, false, 1);
        bounded.update_index(ScrollOffset::new(-1e30, 0.0));
        assert_eq!(bounded.current_index, 0);
    }
}
