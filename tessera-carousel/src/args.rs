//! Carousel configuration.
//!
//! ## Usage
//!
//! Describe the pane collection, axis, looping and autoplay behavior before
//! creating or reconfiguring a controller.

use std::{sync::Arc, time::Duration};

use derive_setters::Setters;

use crate::{
    callbacks::{CarouselCallbacks, CarouselEvent},
    geometry::{CarouselAxis, ViewportExtent},
    state::CarouselState,
};

/// Default delay between two autoplay advances.
pub const DEFAULT_AUTOPLAY_TIMEOUT: Duration = Duration::from_millis(2_500);
/// Default number of panes kept loaded on either side of the current pane.
pub const DEFAULT_LOAD_MINIMAL_SIZE: usize = 1;

/// Direction autoplay advances in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AutoplayDirection {
    /// Advance to the next pane.
    #[default]
    Forward,
    /// Advance to the previous pane.
    Backward,
}

impl AutoplayDirection {
    /// Returns the signed page step for one autoplay advance.
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Configuration arguments for a carousel controller.
#[derive(Clone, Debug, Setters)]
pub struct CarouselArgs {
    /// Number of real panes.
    pub pane_count: usize,
    /// Scroll axis.
    pub axis: CarouselAxis,
    /// Visible viewport size in surface pixels.
    pub viewport: ViewportExtent,
    /// Whether the carousel wraps around past its first and last panes.
    pub looping: bool,
    /// Pane shown first. Clamped to the pane range.
    pub initial_index: usize,
    /// Whether the carousel advances on its own.
    pub autoplay: bool,
    /// Delay between two autoplay advances.
    pub autoplay_timeout: Duration,
    /// Direction autoplay advances in.
    pub autoplay_direction: AutoplayDirection,
    /// Whether only panes near the current one should be loaded by the
    /// renderer.
    pub load_minimal: bool,
    /// Number of panes kept loaded on either side of the current pane when
    /// `load_minimal` is set.
    pub load_minimal_size: usize,
    /// Hooks notified about carousel events.
    #[setters(skip)]
    pub callbacks: CarouselCallbacks,
}

impl CarouselArgs {
    /// Set the handler invoked when a drag starts.
    pub fn on_scroll_begin<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CarouselEvent, &CarouselState) + Send + Sync + 'static,
    {
        self.callbacks.on_scroll_begin = Some(Arc::new(handler));
        self
    }

    /// Set the handler invoked after each settle.
    pub fn on_settled<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CarouselEvent, &CarouselState) + Send + Sync + 'static,
    {
        self.callbacks.on_settled = Some(Arc::new(handler));
        self
    }

    /// Set the handler invoked when the user releases a drag.
    pub fn on_drag_end<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CarouselEvent, &CarouselState) + Send + Sync + 'static,
    {
        self.callbacks.on_drag_end = Some(Arc::new(handler));
        self
    }

    /// Set the handler invoked when the current pane changes.
    pub fn on_index_changed<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CarouselEvent, &CarouselState) + Send + Sync + 'static,
    {
        self.callbacks.on_index_changed = Some(Arc::new(handler));
        self
    }

    /// Replace every hook at once.
    pub fn callbacks_shared(mut self, callbacks: CarouselCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Returns whether autoplay can ever run with this configuration.
    pub(crate) fn autoplay_enabled(&self) -> bool {
        self.autoplay && self.pane_count > 1
    }
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            pane_count: 0,
            axis: CarouselAxis::Horizontal,
            viewport: ViewportExtent::ZERO,
            looping: true,
            initial_index: 0,
            autoplay: false,
            autoplay_timeout: DEFAULT_AUTOPLAY_TIMEOUT,
            autoplay_direction: AutoplayDirection::Forward,
            load_minimal: false,
            load_minimal_size: DEFAULT_LOAD_MINIMAL_SIZE,
            callbacks: CarouselCallbacks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_documented_values() {
        let args = CarouselArgs::default();
        assert_eq!(args.axis, CarouselAxis::Horizontal);
        assert!(args.looping);
        assert!(!args.autoplay);
        assert_eq!(args.autoplay_timeout, Duration::from_millis(2_500));
        assert_eq!(args.autoplay_direction, AutoplayDirection::Forward);
        assert_eq!(args.initial_index, 0);
        assert_eq!(args.load_minimal_size, 1);
    }

    #[test]
    fn setters_chain() {
        let args = CarouselArgs::default()
            .pane_count(4)
            .looping(false)
            .autoplay(true)
            .autoplay_direction(AutoplayDirection::Backward)
            .on_settled(|_, _| {});
        assert_eq!(args.pane_count, 4);
        assert!(!args.looping);
        assert!(args.autoplay_enabled());
        assert_eq!(args.autoplay_direction.step(), -1);
        assert!(args.callbacks.on_settled.is_some());
        assert!(args.callbacks.on_scroll_begin.is_none());
    }

    #[test]
    fn autoplay_needs_two_panes() {
        let args = CarouselArgs::default().autoplay(true).pane_count(1);
        assert!(!args.autoplay_enabled());
    }
}
