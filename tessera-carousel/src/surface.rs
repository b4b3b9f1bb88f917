//! The scroll surface a carousel drives.
//!
//! ## Usage
//!
//! Implement [`ScrollSurface`] for the platform scroll view or pager that
//! displays the backing sequence.

use thiserror::Error;

/// Errors reported by a scroll surface when a jump cannot be performed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface is not mounted or has already been torn down.
    #[error("scroll surface is detached")]
    Detached,
    /// The requested page does not exist on the surface.
    #[error("page {position} is outside the backing sequence of length {len}")]
    OutOfRange {
        /// Requested backing position.
        position: isize,
        /// Number of pages the surface holds.
        len: usize,
    },
    /// Platform specific failure.
    #[error("scroll surface failed: {0}")]
    Platform(String),
}

/// The result type returned by [`ScrollSurface`] operations.
pub type SurfaceResult = Result<(), SurfaceError>;

/// Host scroll surface that displays the backing sequence.
pub trait ScrollSurface {
    /// Moves the surface to `position` of the backing sequence.
    ///
    /// Animated jumps are expected to report a settle through
    /// [`CarouselController::on_scroll_end`](crate::CarouselController::on_scroll_end)
    /// once the motion stops, unless [`Self::emits_settle_on_jump`] returns
    /// `false`.
    fn jump_to_page(&mut self, position: isize, animated: bool) -> SurfaceResult;

    /// Returns whether programmatic jumps produce a settle event.
    ///
    /// Discrete pagers usually report page selection only for user input; the
    /// controller synthesizes the settle for them.
    fn emits_settle_on_jump(&self) -> bool {
        true
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Box<S> {
    fn jump_to_page(&mut self, position: isize, animated: bool) -> SurfaceResult {
        (**self).jump_to_page(position, animated)
    }

    fn emits_settle_on_jump(&self) -> bool {
        (**self).emits_settle_on_jump()
    }
}
