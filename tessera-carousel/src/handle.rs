//! Shared access to a carousel controller.
//!
//! ## Usage
//!
//! Hand the same controller to input handlers, frame ticks and button
//! closures of a host component.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    args::CarouselArgs, controller::CarouselController, surface::ScrollSurface, timer::Instant,
};

/// Cloneable handle to a controller guarded by a read-write lock.
pub struct CarouselHandle<S> {
    inner: Arc<RwLock<CarouselController<S>>>,
}

impl<S: ScrollSurface> CarouselHandle<S> {
    /// Creates a controller for `surface` and wraps it in a handle.
    pub fn new(args: CarouselArgs, surface: S, now: Instant) -> Self {
        Self::from_controller(CarouselController::new(args, surface, now))
    }

    /// Wraps an existing controller.
    pub fn from_controller(controller: CarouselController<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    /// Execute a closure with a shared reference to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&CarouselController<S>) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the controller.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut CarouselController<S>) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Returns the current pane index.
    pub fn current_index(&self) -> usize {
        self.with(|controller| controller.current_index())
    }
}

impl<S> Clone for CarouselHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> std::fmt::Debug for CarouselHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CarouselHandle").field(&*self.inner.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{
        geometry::{ScrollOffset, ViewportExtent},
        surface::SurfaceResult,
    };

    struct NullSurface;

    impl ScrollSurface for NullSurface {
        fn jump_to_page(&mut self, _position: isize, _animated: bool) -> SurfaceResult {
            Ok(())
        }
    }

    #[test]
    fn clones_share_one_controller() {
        let now = Instant::now();
        let args = CarouselArgs::default()
            .pane_count(3)
            .viewport(ViewportExtent::new(100.0, 100.0));
        let handle = CarouselHandle::new(args, NullSurface, now);
        let input = handle.clone();

        thread::spawn(move || {
            input.with_mut(|carousel| {
                carousel.on_scroll_begin();
                carousel.on_scroll_end(ScrollOffset::new(200.0, 0.0), now);
            });
        })
        .join()
        .expect("input thread panicked");

        assert_eq!(handle.current_index(), 1);
    }
}
