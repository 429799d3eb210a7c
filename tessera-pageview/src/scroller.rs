//! Offset application with a hard stop at the first and last page.

use glam::Vec2;
use tracing::trace;

use crate::{
    geometry::PageRect,
    layout::Boundaries,
    orientation::ScrollDirection,
    page::{Page, PageHandle},
};

/// Result of clamping a requested offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedOffset {
    /// Offset to apply to every page.
    pub offset: Vec2,
    /// Whether the requested offset survived unchanged.
    pub honored: bool,
}

/// Clamps `raw` so neither boundary page is dragged past the window.
///
/// `leading` and `trailing` are the first and last pages; `intent` selects
/// which of them can hit the window during the current drag. A clamped offset
/// lands the boundary page exactly on the window edge and drops the cross-axis
/// component.
pub fn clamp_offset(
    intent: ScrollDirection,
    raw: Vec2,
    leading: &PageRect,
    trailing: &PageRect,
    boundaries: Boundaries,
) -> ClampedOffset {
    let clamped = match intent {
        ScrollDirection::Left if trailing.right() + raw.x <= boundaries.right => {
            Some(Vec2::new(boundaries.right - trailing.right(), 0.0))
        }
        ScrollDirection::Right if leading.left() + raw.x >= boundaries.left => {
            Some(Vec2::new(boundaries.left - leading.left(), 0.0))
        }
        ScrollDirection::Up if trailing.bottom() + raw.y >= boundaries.left => {
            Some(Vec2::new(0.0, boundaries.left - trailing.bottom()))
        }
        ScrollDirection::Down if leading.top() + raw.y <= boundaries.right => {
            Some(Vec2::new(0.0, boundaries.right - leading.top()))
        }
        _ => None,
    };

    match clamped {
        Some(offset) => {
            trace!(?intent, ?raw, ?offset, "Offset clamped at boundary page");
            ClampedOffset {
                offset,
                honored: false,
            }
        }
        None => ClampedOffset {
            offset: raw,
            honored: true,
        },
    }
}

/// Translates every page by `offset`.
pub fn move_pages<'a, P: Page>(pages: impl IntoIterator<Item = &'a PageHandle<P>>, offset: Vec2) {
    for page in pages {
        page.with_mut(|page| page.translate(offset));
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Size;

    use super::*;

    const WINDOW: Boundaries = Boundaries {
        left: 0.0,
        right: 100.0,
    };

    fn rect(x: f32, y: f32) -> PageRect {
        PageRect::from_position_size(Vec2::new(x, y), Size::new(100.0, 100.0))
    }

    #[test]
    fn free_drag_is_honored() {
        let leading = rect(-100.0, 0.0);
        let trailing = rect(100.0, 0.0);
        let result = clamp_offset(
            ScrollDirection::Left,
            Vec2::new(-30.0, 4.0),
            &leading,
            &trailing,
            WINDOW,
        );
        assert!(result.honored);
        assert_eq!(result.offset, Vec2::new(-30.0, 4.0));
    }

    #[test]
    fn left_drag_stops_at_trailing_page() {
        let leading = rect(-100.0, 0.0);
        let trailing = rect(100.0, 0.0);
        let result = clamp_offset(
            ScrollDirection::Left,
            Vec2::new(-5000.0, 3.0),
            &leading,
            &trailing,
            WINDOW,
        );
        assert!(!result.honored);
        assert_eq!(result.offset, Vec2::new(-100.0, 0.0));
        assert_eq!(trailing.translated(result.offset).right(), WINDOW.right);
    }

    #[test]
    fn right_drag_stops_at_leading_page() {
        let leading = rect(-40.0, 0.0);
        let trailing = rect(160.0, 0.0);
        let result = clamp_offset(
            ScrollDirection::Right,
            Vec2::new(900.0, 0.0),
            &leading,
            &trailing,
            WINDOW,
        );
        assert!(!result.honored);
        assert_eq!(leading.translated(result.offset).left(), WINDOW.left);
    }

    #[test]
    fn vertical_drags_stop_at_window() {
        let leading = rect(0.0, 30.0);
        let trailing = rect(0.0, -170.0);

        let up = clamp_offset(
            ScrollDirection::Up,
            Vec2::new(2.0, 800.0),
            &leading,
            &trailing,
            WINDOW,
        );
        assert!(!up.honored);
        assert_eq!(trailing.translated(up.offset).bottom(), WINDOW.left);
        assert_eq!(up.offset.x, 0.0);

        let down = clamp_offset(
            ScrollDirection::Down,
            Vec2::new(0.0, -800.0),
            &leading,
            &trailing,
            WINDOW,
        );
        assert!(!down.honored);
        assert_eq!(leading.translated(down.offset).top(), WINDOW.right);
    }

    #[test]
    fn move_pages_translates_all() {
        use crate::page::BasicPage;

        let pages: Vec<PageHandle<BasicPage<()>>> = (0..3)
            .map(|_| PageHandle::new(BasicPage::new(Size::new(10.0, 10.0))))
            .collect();
        move_pages(&pages, Vec2::new(3.0, -2.0));
        for page in &pages {
            assert_eq!(page.position(), Vec2::new(3.0, -2.0));
        }
    }
}
