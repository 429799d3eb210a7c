//! Container-local geometry used by the pager.
//!
//! Positions and offsets are plain [`glam::Vec2`] values. This module adds the
//! two shapes the paging engine reasons about: the [`Size`] of the container or
//! a page, and the [`PageRect`] snapshot used for edge tests.
//!
//! # Coordinate System
//!
//! Page coordinates follow the host scene graph:
//! - the position is the bottom-left corner of a page
//! - X-axis increases to the right
//! - Y-axis increases upward, so `top = y + height`
//!
//! # Example
//!
//! ```
//! use tessera_pageview::glam::Vec2;
//! use tessera_pageview::geometry::{PageRect, Size};
//!
//! let rect = PageRect::from_position_size(Vec2::new(10.0, 20.0), Size::new(100.0, 50.0));
//! assert_eq!(rect.right(), 110.0);
//! assert_eq!(rect.top(), 70.0);
//! ```

use glam::Vec2;

/// A 2D size in container-local units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width of the area.
    pub width: f32,
    /// The height of the area.
    pub height: f32,
}

impl Size {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size from width and height.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_pageview::geometry::Size;
    ///
    /// let size = Size::new(300.0, 200.0);
    /// assert_eq!(size.width, 300.0);
    /// assert_eq!(size.height, 200.0);
    /// ```
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Converts the size to a vector `(width, height)`.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<[f32; 2]> for Size {
    fn from(size: [f32; 2]) -> Self {
        Self {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<Vec2> for Size {
    fn from(size: Vec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
        }
    }
}

/// A snapshot of a page's placement, exposing its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageRect {
    /// Bottom-left corner of the page.
    pub position: Vec2,
    /// Dimensions of the page.
    pub size: Size,
}

impl PageRect {
    /// Creates a rectangle from a position and a size.
    pub const fn from_position_size(position: Vec2, size: Size) -> Self {
        Self { position, size }
    }

    /// The x coordinate of the left edge.
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.position.x + self.size.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.position.y
    }

    /// The y coordinate of the top edge.
    pub fn top(&self) -> f32 {
        self.position.y + self.size.height
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            size: self.size,
        }
    }

    /// Check if a point lies inside the rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.bottom()
            && point.y < self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = PageRect::from_position_size(Vec2::new(-40.0, 15.0), Size::new(100.0, 60.0));
        assert_eq!(rect.left(), -40.0);
        assert_eq!(rect.right(), 60.0);
        assert_eq!(rect.bottom(), 15.0);
        assert_eq!(rect.top(), 75.0);
    }

    #[test]
    fn test_rect_translated() {
        let rect = PageRect::from_position_size(Vec2::ZERO, Size::new(10.0, 10.0));
        let moved = rect.translated(Vec2::new(5.0, -5.0));
        assert_eq!(moved.position, Vec2::new(5.0, -5.0));
        assert_eq!(moved.size, rect.size);
    }

    #[test]
    fn test_rect_contains() {
        let rect = PageRect::from_position_size(Vec2::ZERO, Size::new(10.0, 10.0));
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.5, 9.5)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_size_conversions() {
        assert_eq!(Size::from([3.0, 4.0]), Size::new(3.0, 4.0));
        assert_eq!(Size::from(Vec2::new(1.0, 2.0)).to_vec2(), Vec2::new(1.0, 2.0));
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(-1.0, 5.0).is_degenerate());
        assert!(!Size::new(1.0, 5.0).is_degenerate());
    }
}
