use tessera_carousel::{CarouselAxis, ScrollOffset, ScrollSurface, SurfaceError, SurfaceResult};
use tracing::info;

/// In-memory scroll surface standing in for a platform scroll view or pager.
#[derive(Debug)]
pub struct SimulatedSurface {
    axis: CarouselAxis,
    step: f32,
    len: usize,
    offset: f32,
    discrete: bool,
    pending_settle: Option<f32>,
}

impl SimulatedSurface {
    /// Creates a surface holding `len` pages of `step` pixels, resting on
    /// `position`.
    ///
    /// A `discrete` surface behaves like a pager that only reports page
    /// selection for user input.
    pub fn new(axis: CarouselAxis, step: f32, len: usize, position: usize, discrete: bool) -> Self {
        Self {
            axis,
            step,
            len,
            offset: step * position as f32,
            discrete,
            pending_settle: None,
        }
    }

    /// Moves the content by `pages` under the user's finger.
    pub fn drag(&mut self, pages: f32) -> ScrollOffset {
        let max = self.step * self.len.saturating_sub(1) as f32;
        self.offset = (self.offset + pages * self.step).clamp(0.0, max);
        self.axis.offset(self.offset)
    }

    /// Snaps to the nearest page once the finger is lifted.
    pub fn settle(&mut self) -> ScrollOffset {
        self.offset = (self.offset / self.step).round() * self.step;
        self.axis.offset(self.offset)
    }

    /// Returns the settle produced by a finished animated jump.
    pub fn take_settle(&mut self) -> Option<ScrollOffset> {
        self.pending_settle.take().map(|offset| self.axis.offset(offset))
    }

    /// Page the surface currently shows.
    pub fn page(&self) -> f32 {
        self.offset / self.step
    }
}

impl ScrollSurface for SimulatedSurface {
    fn jump_to_page(&mut self, position: isize, animated: bool) -> SurfaceResult {
        if position < 0 || position as usize >= self.len {
            return Err(SurfaceError::OutOfRange {
                position,
                len: self.len,
            });
        }
        info!(position, animated, "surface jump");
        self.offset = self.step * position as f32;
        if animated && !self.discrete {
            self.pending_settle = Some(self.offset);
        }
        Ok(())
    }

    fn emits_settle_on_jump(&self) -> bool {
        !self.discrete
    }
}
