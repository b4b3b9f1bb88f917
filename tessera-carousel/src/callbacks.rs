//! Pass-through notifications for the host application.
//!
//! ## Usage
//!
//! React to drags, settles and page changes with the controller's state
//! snapshot at the time of the event.

use std::{fmt, sync::Arc};

use crate::{geometry::ScrollOffset, state::CarouselState};

/// Event delivered to a [`CarouselCallback`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// The user started dragging the scroll surface.
    ScrollBegin,
    /// The user released the drag at the reported offset.
    DragEnd {
        /// Offset reported by the surface at release.
        offset: ScrollOffset,
    },
    /// Scroll motion stopped at the reported offset.
    Settled {
        /// Offset reported by the surface when it settled.
        offset: ScrollOffset,
    },
    /// The current pane changed.
    IndexChanged {
        /// Pane that was current before the transition.
        from: usize,
        /// Pane that is current now.
        to: usize,
    },
}

/// Shared handler invoked with an event and the controller's state snapshot.
pub type CarouselCallback = Arc<dyn Fn(&CarouselEvent, &CarouselState) + Send + Sync>;

/// The hooks a carousel forwards events to.
///
/// Every hook is optional; hooks that are not set are skipped.
#[derive(Clone, Default)]
pub struct CarouselCallbacks {
    /// Called after a drag starts.
    pub on_scroll_begin: Option<CarouselCallback>,
    /// Called after a settle has been reconciled with the index state.
    pub on_settled: Option<CarouselCallback>,
    /// Called when the user releases a drag.
    pub on_drag_end: Option<CarouselCallback>,
    /// Called whenever the current pane changes.
    pub on_index_changed: Option<CarouselCallback>,
}

impl CarouselCallbacks {
    pub(crate) fn emit(&self, event: CarouselEvent, state: &CarouselState) {
        let hook = match event {
            CarouselEvent::ScrollBegin => &self.on_scroll_begin,
            CarouselEvent::DragEnd { .. } => &self.on_drag_end,
            CarouselEvent::Settled { .. } => &self.on_settled,
            CarouselEvent::IndexChanged { .. } => &self.on_index_changed,
        };
        if let Some(hook) = hook {
            hook(&event, state);
        }
    }
}

impl fmt::Debug for CarouselCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselCallbacks")
            .field("on_scroll_begin", &self.on_scroll_begin.is_some())
            .field("on_settled", &self.on_settled.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_index_changed", &self.on_index_changed.is_some())
            .finish()
    }
}
