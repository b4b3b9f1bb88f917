//! Axis, viewport and scroll offset primitives.
//!
//! ## Usage
//!
//! Project two-dimensional surface offsets onto the carousel's scroll axis.

/// Orientation of the carousel scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CarouselAxis {
    /// Panes are laid out left to right and the `x` offset is read.
    #[default]
    Horizontal,
    /// Panes are stacked top to bottom and the `y` offset is read.
    Vertical,
}

impl CarouselAxis {
    /// Returns the viewport extent along this axis, which is the size of one
    /// page step on the scroll surface.
    pub fn extent(self, viewport: ViewportExtent) -> f32 {
        match self {
            Self::Horizontal => viewport.width,
            Self::Vertical => viewport.height,
        }
    }

    /// Returns the offset component read by this axis.
    pub fn component(self, offset: ScrollOffset) -> f32 {
        match self {
            Self::Horizontal => offset.x,
            Self::Vertical => offset.y,
        }
    }

    /// Returns `offset` with this axis' component replaced by `value`.
    pub fn with_component(self, offset: ScrollOffset, value: f32) -> ScrollOffset {
        match self {
            Self::Horizontal => ScrollOffset::new(value, offset.y),
            Self::Vertical => ScrollOffset::new(offset.x, value),
        }
    }

    /// Builds an offset that only moves along this axis.
    pub fn offset(self, value: f32) -> ScrollOffset {
        self.with_component(ScrollOffset::ZERO, value)
    }
}

/// Size of the visible carousel viewport in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportExtent {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl ViewportExtent {
    /// An empty viewport.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a viewport extent.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Scroll offset reported by, or stored for, the host scroll surface.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollOffset {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl ScrollOffset {
    /// The surface origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a scroll offset.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for ScrollOffset {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<ScrollOffset> for [f32; 2] {
    fn from(offset: ScrollOffset) -> Self {
        [offset.x, offset.y]
    }
}

/// Returns the usable page step, or `None` when the extent cannot be divided
/// by.
pub(crate) fn page_step(axis: CarouselAxis, viewport: ViewportExtent) -> Option<f32> {
    let step = axis.extent(viewport);
    (step.is_finite() && step > f32::EPSILON).then_some(step)
}
