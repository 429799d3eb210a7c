//! Scroll axis and directional intent.
//!
//! ## Usage
//!
//! Pick the axis pages are laid out along and read back drag/glide directions.

use glam::Vec2;

use crate::geometry::{PageRect, Size};

/// Axis along which pages are arranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Pages are placed left to right.
    Horizontal,
    /// Pages are stacked along the y axis; following pages sit at lower y.
    #[default]
    Vertical,
}

impl Orientation {
    /// Length of `size` along the scroll axis.
    pub fn main(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Length of `size` across the scroll axis.
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Builds a size from main and cross axis lengths.
    pub fn pack_size(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Reads the scroll-axis component of a position or offset.
    pub fn component(self, value: Vec2) -> f32 {
        match self {
            Self::Horizontal => value.x,
            Self::Vertical => value.y,
        }
    }

    /// Builds a pure single-axis offset.
    pub fn offset(self, main: f32) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(main, 0.0),
            Self::Vertical => Vec2::new(0.0, main),
        }
    }

    /// Zeroes the cross-axis component of `value`.
    pub fn constrain(self, value: Vec2) -> Vec2 {
        self.offset(self.component(value))
    }

    /// Signed distance a page has travelled toward the following pages,
    /// measured from the resting anchor `anchor`.
    ///
    /// Horizontal pages advance by moving left, vertical pages by moving up.
    pub fn advance_from(self, rect: &PageRect, anchor: f32) -> f32 {
        match self {
            Self::Horizontal => anchor - rect.position.x,
            Self::Vertical => rect.position.y - anchor,
        }
    }

    /// Direction implied by a drag delta along this axis, if any.
    pub fn drag_direction(self, delta: Vec2) -> Option<ScrollDirection> {
        match self {
            Self::Horizontal if delta.x < 0.0 => Some(ScrollDirection::Left),
            Self::Horizontal if delta.x > 0.0 => Some(ScrollDirection::Right),
            Self::Vertical if delta.y > 0.0 => Some(ScrollDirection::Up),
            Self::Vertical if delta.y < 0.0 => Some(ScrollDirection::Down),
            _ => None,
        }
    }

    /// Drag direction that advances toward the following pages.
    ///
    /// Serves as the intent before any movement along this axis was seen.
    pub fn advancing_direction(self) -> ScrollDirection {
        match self {
            Self::Horizontal => ScrollDirection::Left,
            Self::Vertical => ScrollDirection::Up,
        }
    }

    /// Direction of a glide covering the signed `distance` along this axis.
    pub fn glide_direction(self, distance: f32) -> ScrollDirection {
        match (self, distance > 0.0) {
            (Self::Horizontal, true) => ScrollDirection::Right,
            (Self::Horizontal, false) => ScrollDirection::Left,
            (Self::Vertical, true) => ScrollDirection::Down,
            (Self::Vertical, false) => ScrollDirection::Up,
        }
    }
}

/// A single-axis movement direction.
///
/// Serves both as the intent of the current drag and as the direction of an
/// auto-scroll glide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Toward the start on the horizontal axis.
    #[default]
    Left,
    /// Toward the end on the horizontal axis.
    Right,
    /// Positive y movement of a drag, negative y movement of a glide.
    Up,
    /// Negative y movement of a drag, positive y movement of a glide.
    Down,
}

impl ScrollDirection {
    /// Sign applied to glide steps travelling in this direction.
    pub fn glide_sign(self) -> f32 {
        match self {
            Self::Left | Self::Up => -1.0,
            Self::Right | Self::Down => 1.0,
        }
    }

    /// Whether this direction lies on `orientation`'s axis.
    pub fn is_on(self, orientation: Orientation) -> bool {
        matches!(
            (self, orientation),
            (Self::Left | Self::Right, Orientation::Horizontal)
                | (Self::Up | Self::Down, Orientation::Vertical)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_drag_directions() {
        let axis = Orientation::Horizontal;
        assert_eq!(
            axis.drag_direction(Vec2::new(-3.0, 9.0)),
            Some(ScrollDirection::Left)
        );
        assert_eq!(
            axis.drag_direction(Vec2::new(2.0, -9.0)),
            Some(ScrollDirection::Right)
        );
        assert_eq!(axis.drag_direction(Vec2::new(0.0, 9.0)), None);
    }

    #[test]
    fn vertical_drag_directions_follow_y_up() {
        let axis = Orientation::Vertical;
        assert_eq!(
            axis.drag_direction(Vec2::new(4.0, 1.0)),
            Some(ScrollDirection::Up)
        );
        assert_eq!(
            axis.drag_direction(Vec2::new(0.0, -1.0)),
            Some(ScrollDirection::Down)
        );
        assert_eq!(axis.drag_direction(Vec2::new(7.0, 0.0)), None);
    }

    #[test]
    fn glide_directions_and_signs() {
        assert_eq!(
            Orientation::Horizontal.glide_direction(10.0),
            ScrollDirection::Right
        );
        assert_eq!(
            Orientation::Horizontal.glide_direction(0.0),
            ScrollDirection::Left
        );
        assert_eq!(
            Orientation::Vertical.glide_direction(10.0),
            ScrollDirection::Down
        );
        assert_eq!(
            Orientation::Vertical.glide_direction(-10.0),
            ScrollDirection::Up
        );
        assert_eq!(ScrollDirection::Up.glide_sign(), -1.0);
        assert_eq!(ScrollDirection::Down.glide_sign(), 1.0);
    }

    #[test]
    fn pack_and_split_sizes() {
        let size = Orientation::Vertical.pack_size(30.0, 80.0);
        assert_eq!(size, Size::new(80.0, 30.0));
        assert_eq!(Orientation::Vertical.main(size), 30.0);
        assert_eq!(Orientation::Vertical.cross(size), 80.0);
        assert_eq!(
            Orientation::Horizontal.constrain(Vec2::new(3.0, 4.0)),
            Vec2::new(3.0, 0.0)
        );
    }

    #[test]
    fn advance_measures_toward_following_pages() {
        let rect = PageRect::from_position_size(Vec2::new(-30.0, 45.0), Size::new(100.0, 100.0));
        assert_eq!(Orientation::Horizontal.advance_from(&rect, 0.0), 30.0);
        assert_eq!(Orientation::Vertical.advance_from(&rect, 0.0), 45.0);
        assert!(ScrollDirection::Up.is_on(Orientation::Vertical));
        assert!(!ScrollDirection::Up.is_on(Orientation::Horizontal));
    }

    #[test]
    fn advancing_direction_stays_on_axis() {
        for axis in [Orientation::Horizontal, Orientation::Vertical] {
            assert!(axis.advancing_direction().is_on(axis));
        }
        assert_eq!(
            Orientation::Vertical.advancing_direction(),
            ScrollDirection::Up
        );
    }
}
