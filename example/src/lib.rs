//! Scripted host driving a looping, autoplaying carousel.
//!
//! The host owns a simulated scroll surface, forwards drags and settles to the
//! controller, and fires deadlines from a virtual clock.

mod surface;

use std::time::Duration;

use tessera_carousel::{
    CarouselArgs, CarouselAxis, CarouselEvent, CarouselHandle, CarouselState, Instant,
    ViewportExtent,
};
use tracing::info;

pub use surface::SimulatedSurface;

const PANES: usize = 3;
const VIEWPORT: ViewportExtent = ViewportExtent::new(360.0, 640.0);

/// Host wiring a carousel controller to a simulated surface and clock.
pub struct Host {
    carousel: CarouselHandle<SimulatedSurface>,
    now: Instant,
}

impl Host {
    /// Creates a host for `args` on a continuous or `discrete` surface.
    pub fn new(args: CarouselArgs, discrete: bool) -> Self {
        let now = Instant::now();
        let probe = CarouselState::initialize(&args, None);
        let surface = SimulatedSurface::new(
            args.axis,
            args.axis.extent(args.viewport),
            probe.backing_len(),
            probe.backing_position(),
            discrete,
        );
        Self {
            carousel: CarouselHandle::new(args, surface, now),
            now,
        }
    }

    /// Returns the shared controller handle.
    pub fn carousel(&self) -> &CarouselHandle<SimulatedSurface> {
        &self.carousel
    }

    /// Performs a user drag of `pages` pages and lets the surface settle.
    pub fn drag(&mut self, pages: f32) {
        let now = self.now;
        self.carousel.with_mut(|carousel| {
            carousel.on_scroll_begin();
            let released = carousel.surface_mut().drag(pages);
            carousel.on_scroll_end_drag(released, now);
            if carousel.state().is_dragging {
                let settled = carousel.surface_mut().settle();
                carousel.on_scroll_end(settled, now);
            }
        });
    }

    /// Presses the "next" button.
    pub fn press_next(&mut self) {
        let now = self.now;
        self.carousel.with_mut(|carousel| carousel.next(now));
        self.deliver_settle();
    }

    /// Advances the virtual clock by `duration`, firing every deadline due on
    /// the way.
    pub fn advance(&mut self, duration: Duration) {
        let until = self.now + duration;
        while let Some(deadline) = self.carousel.with(|carousel| carousel.next_deadline()) {
            if deadline > until {
                break;
            }
            self.now = deadline;
            self.carousel.with_mut(|carousel| carousel.tick(deadline));
            self.deliver_settle();
        }
        self.now = until;
    }

    /// Tears the carousel down.
    pub fn dispose(&mut self) {
        self.carousel.with_mut(|carousel| carousel.dispose());
    }

    fn deliver_settle(&mut self) {
        let now = self.now;
        self.carousel.with_mut(|carousel| {
            if let Some(offset) = carousel.surface_mut().take_settle() {
                carousel.on_scroll_end(offset, now);
            }
        });
    }
}

fn log_event(event: &CarouselEvent, state: &CarouselState) {
    info!(
        ?event,
        index = state.current_index,
        dragging = state.is_dragging,
        realign = state.pending_loop_realignment,
        "carousel event"
    );
}

fn demo_args() -> CarouselArgs {
    CarouselArgs::default()
        .pane_count(PANES)
        .axis(CarouselAxis::Horizontal)
        .viewport(VIEWPORT)
        .autoplay(true)
        .on_scroll_begin(log_event)
        .on_settled(log_event)
        .on_index_changed(log_event)
}

/// Runs the scripted session on both surface kinds.
pub fn run() {
    for discrete in [false, true] {
        info!(discrete, "starting session");
        let mut host = Host::new(demo_args(), discrete);

        host.drag(1.0);
        host.drag(1.6);
        host.advance(Duration::from_millis(100));
        host.press_next();
        host.advance(Duration::from_secs(6));
        host.drag(-1.0);

        let index = host.carousel().current_index();
        let page = host.carousel().with(|carousel| carousel.surface().page());
        info!(index, page, "session finished");
        host.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_session_keeps_surface_and_index_aligned() {
        for discrete in [false, true] {
            let mut host = Host::new(demo_args().autoplay(false), discrete);
            host.drag(1.0);
            host.drag(1.6);
            assert_eq!(host.carousel().current_index(), 0);

            host.advance(Duration::from_millis(100));
            let page = host.carousel().with(|carousel| carousel.surface().page());
            assert_eq!(page, 1.0);

            host.press_next();
            assert_eq!(host.carousel().current_index(), 1);
        }
    }

    #[test]
    fn autoplay_cycles_through_panes() {
        let mut host = Host::new(demo_args(), false);
        host.advance(Duration::from_millis(2_500 * 3 + 100));
        assert_eq!(host.carousel().current_index(), 0);
        let page = host.carousel().with(|carousel| carousel.surface().page());
        assert_eq!(page, 1.0);
    }
}
