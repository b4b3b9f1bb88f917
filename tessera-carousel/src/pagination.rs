//! Read-only views of the carousel state for renderers.
//!
//! ## Usage
//!
//! Decide which pagination dot is active, which title to overlay, whether
//! previous/next buttons are offered, and which panes are worth loading.

use std::ops::Range;

use crate::{args::CarouselArgs, state::CarouselState};

/// Pagination dots for the real panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// Number of dots.
    pub total: usize,
    /// Index of the highlighted dot.
    pub active: usize,
}

impl Pagination {
    /// Iterates over the dots, yielding `true` for the active one.
    pub fn dots(self) -> impl Iterator<Item = bool> {
        (0..self.total).map(move |index| index == self.active)
    }
}

/// Returns the dots to render, or `None` when there is nothing to page
/// through.
pub fn pagination(state: &CarouselState) -> Option<Pagination> {
    state.is_pageable().then_some(Pagination {
        total: state.pane_count,
        active: state.current_index,
    })
}

/// Picks the title of the current pane.
///
/// Panes without a title, and titles missing past the end of `titles`, yield
/// `None`.
pub fn current_title<'a, T>(state: &CarouselState, titles: &'a [Option<T>]) -> Option<&'a T> {
    if state.pane_count == 0 {
        return None;
    }
    titles.get(state.current_index)?.as_ref()
}

/// A previous button is useful unless the first pane is shown without
/// wraparound.
pub fn show_previous_button(state: &CarouselState) -> bool {
    state.looping || state.current_index != 0
}

/// A next button is useful unless the last pane is shown without wraparound.
pub fn show_next_button(state: &CarouselState) -> bool {
    state.looping || state.current_index + 1 != state.pane_count
}

/// Backing positions the renderer should load.
///
/// Every position is loaded unless `load_minimal` is set, in which case only
/// the current backing position and `load_minimal_size` neighbors on either
/// side are.
pub fn loaded_positions(state: &CarouselState, args: &CarouselArgs) -> Range<usize> {
    let len = state.backing_len();
    if !args.load_minimal {
        return 0..len;
    }
    let center = state.backing_position();
    let start = center.saturating_sub(args.load_minimal_size);
    let end = center
        .saturating_add(args.load_minimal_size)
        .saturating_add(1)
        .min(len);
    start..end
}
