//! Page sizing, resting positions and the visible boundary window.
//!
//! ## Usage
//!
//! Derive page geometry from the container size, the scroll axis and the
//! number of pages shown at once.

use glam::Vec2;
use tracing::warn;

use crate::{
    geometry::Size,
    orientation::Orientation,
    page::{Page, PageHandle},
    registry::PageRegistry,
};

/// Main-axis window a page occupies when it rests as the current page.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Boundaries {
    /// Leading edge of the window; resting position of the current page.
    pub left: f32,
    /// Trailing edge of the window.
    pub right: f32,
}

impl Boundaries {
    /// Computes the window for `pages_shown` pages of length `extent`.
    ///
    /// The current page sits at slot `pages_shown / 2`, so an even count
    /// biases the window toward the end and an odd count centres it.
    pub fn compute(pages_shown: usize, extent: f32) -> Self {
        let left = (pages_shown / 2) as f32 * extent;
        Self {
            left,
            right: left + extent,
        }
    }
}

/// Cached first and last pages of the registry.
#[derive(Debug)]
pub struct BoundaryPages<P: Page> {
    /// First page in display order.
    pub leading: PageHandle<P>,
    /// Last page in display order.
    pub trailing: PageHandle<P>,
}

impl<P: Page> Clone for BoundaryPages<P> {
    fn clone(&self) -> Self {
        Self {
            leading: self.leading.clone(),
            trailing: self.trailing.clone(),
        }
    }
}

impl<P: Page> BoundaryPages<P> {
    /// Resolves the boundary pages of `registry`, if it has any pages.
    pub fn resolve(registry: &PageRegistry<P>) -> Option<Self> {
        Some(Self {
            leading: registry.first()?.clone(),
            trailing: registry.last()?.clone(),
        })
    }
}

/// Layout inputs and the boundary window derived from them.
///
/// Any change to an input marks the layout dirty; the owning controller
/// re-applies it to the pages on its next layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    orientation: Orientation,
    pages_shown: usize,
    content_size: Size,
    boundaries: Boundaries,
    dirty: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(Orientation::default(), 1)
    }
}

impl PageLayout {
    /// Creates a layout with an empty container.
    pub fn new(orientation: Orientation, pages_shown: usize) -> Self {
        let mut layout = Self {
            orientation,
            pages_shown: pages_shown.max(1),
            content_size: Size::ZERO,
            boundaries: Boundaries::default(),
            dirty: true,
        };
        layout.refresh_boundaries();
        layout
    }

    /// Scroll axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of pages visible at once.
    pub fn pages_shown(&self) -> usize {
        self.pages_shown
    }

    /// Container size the pages are derived from.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Current boundary window.
    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// Whether pages must be re-laid out.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Requests a layout pass.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Acknowledges a completed layout pass.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Changes the scroll axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.refresh_boundaries();
    }

    /// Changes how many pages are visible at once. Zero is rejected.
    pub fn set_pages_shown(&mut self, pages_shown: usize) -> bool {
        if pages_shown == 0 {
            warn!("Ignoring request to show zero pages");
            return false;
        }
        self.pages_shown = pages_shown;
        self.refresh_boundaries();
        true
    }

    /// Applies a container resize.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.refresh_boundaries();
    }

    /// Uniform page size: the container divided along the scroll axis.
    pub fn page_size(&self) -> Size {
        let main = self.orientation.main(self.content_size) / self.pages_shown as f32;
        let cross = self.orientation.cross(self.content_size);
        self.orientation.pack_size(main, cross)
    }

    /// Page length along the scroll axis.
    pub fn page_extent(&self) -> f32 {
        self.orientation.main(self.page_size())
    }

    /// Resting position of the page at `index` while `current` is the
    /// current page.
    pub fn position_for(&self, index: usize, current: usize) -> Vec2 {
        let slots = index as f32 - current as f32;
        let travel = slots * self.page_extent();
        match self.orientation {
            Orientation::Horizontal => Vec2::new(self.boundaries.left + travel, 0.0),
            Orientation::Vertical => Vec2::new(0.0, self.boundaries.left - travel),
        }
    }

    /// Resting main-axis coordinate of the current page.
    pub fn anchor(&self) -> f32 {
        self.boundaries.left
    }

    fn refresh_boundaries(&mut self) {
        self.boundaries = Boundaries::compute(self.pages_shown, self.page_extent());
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(orientation: Orientation, pages_shown: usize, size: Size) -> PageLayout {
        let mut layout = PageLayout::new(orientation, pages_shown);
        layout.set_content_size(size);
        layout
    }

    #[test]
    fn single_page_window() {
        let layout = layout(Orientation::Horizontal, 1, Size::new(100.0, 40.0));
        assert_eq!(layout.page_size(), Size::new(100.0, 40.0));
        assert_eq!(
            layout.boundaries(),
            Boundaries {
                left: 0.0,
                right: 100.0
            }
        );
    }

    #[test]
    fn odd_pages_shown_centres_window() {
        let layout = layout(Orientation::Horizontal, 3, Size::new(300.0, 40.0));
        assert_eq!(layout.page_extent(), 100.0);
        assert_eq!(
            layout.boundaries(),
            Boundaries {
                left: 100.0,
                right: 200.0
            }
        );
    }

    #[test]
    fn even_pages_shown_biases_window() {
        let layout = layout(Orientation::Vertical, 2, Size::new(50.0, 200.0));
        assert_eq!(layout.page_size(), Size::new(50.0, 100.0));
        assert_eq!(layout.boundaries().left, 100.0);
        assert_eq!(layout.boundaries().right, 200.0);
    }

    #[test]
    fn positions_relative_to_current() {
        let horizontal = layout(Orientation::Horizontal, 1, Size::new(100.0, 40.0));
        assert_eq!(horizontal.position_for(0, 1), Vec2::new(-100.0, 0.0));
        assert_eq!(horizontal.position_for(2, 1), Vec2::new(100.0, 0.0));

        let vertical = layout(Orientation::Vertical, 1, Size::new(40.0, 100.0));
        assert_eq!(vertical.position_for(0, 1), Vec2::new(0.0, 100.0));
        assert_eq!(vertical.position_for(2, 1), Vec2::new(0.0, -100.0));
    }

    #[test]
    fn inputs_mark_dirty() {
        let mut layout = PageLayout::default();
        layout.clear_dirty();
        layout.set_content_size(Size::new(10.0, 10.0));
        assert!(layout.is_dirty());

        layout.clear_dirty();
        assert!(!layout.set_pages_shown(0));
        assert!(!layout.is_dirty());
        assert_eq!(layout.pages_shown(), 1);

        assert!(layout.set_pages_shown(2));
        assert!(layout.is_dirty());
    }

    #[test]
    fn degenerate_container_yields_zero_pages() {
        let layout = layout(Orientation::Horizontal, 4, Size::ZERO);
        assert_eq!(layout.page_size(), Size::ZERO);
        assert_eq!(layout.boundaries(), Boundaries::default());
    }
}
