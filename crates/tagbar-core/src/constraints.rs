//! Size bounds passed down during measurement.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Smallest and largest size a widget may report from `measure`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lower bound
    pub min: Size,
    /// Upper bound; may be infinite
    pub max: Size,
}

impl Constraints {
    /// Bounds between `min` and `max`.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Anything from zero up to `max`.
    #[must_use]
    pub const fn loose(max: Size) -> Self {
        Self::new(Size::ZERO, max)
    }

    /// No upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::loose(Size::new(f32::INFINITY, f32::INFINITY))
    }

    /// Clamp `size` into these bounds.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
