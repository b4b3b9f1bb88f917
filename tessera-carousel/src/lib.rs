//! Carousel controller for tessera-ui.
//!
//! Tracks which pane of a paged carousel is current while a host scroll
//! surface reports drags and settles, wraps around an arbitrary number of panes
//! with two synthetic clones, and advances on its own when autoplay is on.
//!
//! # Usage
//!
//! ```
//! use tessera_carousel::{
//!     CarouselArgs, CarouselController, Instant, ScrollOffset, ScrollSurface, SurfaceResult,
//!     ViewportExtent,
//! };
//!
//! struct Pager;
//!
//! impl ScrollSurface for Pager {
//!     fn jump_to_page(&mut self, _position: isize, _animated: bool) -> SurfaceResult {
//!         Ok(())
//!     }
//! }
//!
//! let now = Instant::now();
//! let args = CarouselArgs::default()
//!     .pane_count(3)
//!     .viewport(ViewportExtent::new(320.0, 480.0));
//! let mut carousel = CarouselController::new(args, Pager, now);
//!
//! // The first real pane sits behind the leading clone.
//! assert_eq!(carousel.state().current_offset, ScrollOffset::new(320.0, 0.0));
//!
//! carousel.on_scroll_begin();
//! carousel.on_scroll_end(ScrollOffset::new(640.0, 0.0), now);
//! assert_eq!(carousel.current_index(), 1);
//! ```
//!
//! Deferred work (autoplay and the silent jump off a clone) is driven by
//! [`CarouselController::tick`], which the host calls from its frame loop or
//! when [`CarouselController::next_deadline`] is reached.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod args;
pub mod callbacks;
pub mod controller;
pub mod geometry;
pub mod handle;
pub mod pagination;
pub mod state;
pub mod surface;
pub mod timer;

pub use args::{AutoplayDirection, CarouselArgs};
pub use callbacks::{CarouselCallback, CarouselCallbacks, CarouselEvent};
pub use controller::{CarouselController, CarouselPhase, REALIGN_DELAY};
pub use geometry::{CarouselAxis, ScrollOffset, ViewportExtent};
pub use handle::CarouselHandle;
pub use pagination::Pagination;
pub use state::{BackingSlot, CarouselState, IndexUpdate};
pub use surface::{ScrollSurface, SurfaceError, SurfaceResult};
pub use timer::{Deadline, Instant};
