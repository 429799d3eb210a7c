//! Page capability traits and shared page handles.
//!
//! ## Usage
//!
//! Implement [`Page`] for the host scene graph's container node, hand the
//! pager [`PageHandle`]s, and optionally a [`PageHost`] that mirrors parenting
//! into the host tree.

use std::{fmt, sync::Arc};

use dyn_clone::DynClone;
use glam::Vec2;
use parking_lot::RwLock;

use crate::geometry::{PageRect, Size};

/// A rectangular container the pager positions and sizes.
///
/// The pager never inspects page content; it only moves and resizes pages.
pub trait Page: Send + Sync + 'static {
    /// Bottom-left corner in container-local coordinates.
    fn position(&self) -> Vec2;

    /// Moves the page.
    fn set_position(&mut self, position: Vec2);

    /// Current page size.
    fn size(&self) -> Size;

    /// Resizes the page.
    fn set_size(&mut self, size: Size);

    /// Snapshot of the page's placement and edges.
    fn rect(&self) -> PageRect {
        PageRect::from_position_size(self.position(), self.size())
    }

    /// Moves the page by `offset`.
    fn translate(&mut self, offset: Vec2) {
        let position = self.position();
        self.set_position(position + offset);
    }
}

/// A page type the pager is able to create and fill on its own.
pub trait PageContainer: Page + Sized {
    /// Widget type that can be placed inside a page.
    type Child;

    /// Creates an empty page of the given size.
    fn with_size(size: Size) -> Self;

    /// Appends a child widget to this page.
    fn add_child(&mut self, child: Self::Child);
}

/// Shared handle to a page owned by the host scene graph.
///
/// Handles compare by identity: two handles are equal only when they point at
/// the same page.
pub struct PageHandle<P> {
    inner: Arc<RwLock<P>>,
}

impl<P: Page> PageHandle<P> {
    /// Wraps a page into a new handle.
    pub fn new(page: P) -> Self {
        Self {
            inner: Arc::new(RwLock::new(page)),
        }
    }

    /// Execute a closure with a shared reference to the page.
    pub fn with<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the page.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Snapshot of the page's placement.
    pub fn rect(&self) -> PageRect {
        self.with(Page::rect)
    }

    /// Current page position.
    pub fn position(&self) -> Vec2 {
        self.with(Page::position)
    }

    /// Get a cloned page. Requires `P: Clone`.
    pub fn get(&self) -> P
    where
        P: Clone,
    {
        self.with(Clone::clone)
    }

    /// Returns a handle to an independent copy of the page.
    pub fn deep_clone(&self) -> Self
    where
        P: Clone,
    {
        Self::new(self.get())
    }

    /// Whether both handles point at the same page.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P> Clone for PageHandle<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: Page> PartialEq for PageHandle<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<P: Page> Eq for PageHandle<P> {}

impl<P: Page> fmt::Debug for PageHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHandle")
            .field("ptr", &Arc::as_ptr(&self.inner))
            .field("rect", &self.rect())
            .finish()
    }
}

/// Scene-graph parenting hooks invoked when pages join or leave the pager.
pub trait PageHost<P: Page>: DynClone + Send + Sync {
    /// Called after `page` was added to the pager.
    fn attach_page(&mut self, _page: &PageHandle<P>) {}

    /// Called after `page` was removed from the pager.
    fn detach_page(&mut self, _page: &PageHandle<P>) {}
}

dyn_clone::clone_trait_object!(<P> PageHost<P> where P: Page);

/// Host that keeps no scene graph of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedHost;

impl<P: Page> PageHost<P> for DetachedHost {}

/// Plain page container for hosts without their own node type.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicPage<C> {
    position: Vec2,
    size: Size,
    children: Vec<C>,
}

impl<C> BasicPage<C> {
    /// Creates an empty page at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            position: Vec2::ZERO,
            size,
            children: Vec::new(),
        }
    }

    /// Widgets placed on this page, in insertion order.
    pub fn children(&self) -> &[C] {
        &self.children
    }
}

impl<C> Default for BasicPage<C> {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl<C: Send + Sync + 'static> Page for BasicPage<C> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl<C: Send + Sync + 'static> PageContainer for BasicPage<C> {
    type Child = C;

    fn with_size(size: Size) -> Self {
        Self::new(size)
    }

    fn add_child(&mut self, child: C) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestPage = BasicPage<&'static str>;

    #[test]
    fn handles_compare_by_identity() {
        let a = PageHandle::new(TestPage::default());
        let b = PageHandle::new(TestPage::default());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn deep_clone_is_independent() {
        let original = PageHandle::new(TestPage::new(Size::new(10.0, 20.0)));
        original.with_mut(|page| page.add_child("label"));
        let copy = original.deep_clone();
        assert_ne!(original, copy);

        copy.with_mut(|page| page.translate(Vec2::new(5.0, 0.0)));
        assert_eq!(original.position(), Vec2::ZERO);
        assert_eq!(copy.position(), Vec2::new(5.0, 0.0));
        assert_eq!(copy.get().children(), ["label"]);
    }

    #[test]
    fn rect_reflects_position_and_size() {
        let handle = PageHandle::new(TestPage::new(Size::new(40.0, 30.0)));
        handle.with_mut(|page| page.set_position(Vec2::new(-10.0, 5.0)));
        let rect = handle.rect();
        assert_eq!(rect.left(), -10.0);
        assert_eq!(rect.right(), 30.0);
        assert_eq!(rect.top(), 35.0);
    }
}
