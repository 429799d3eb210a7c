//! Ordered page collection with a tracked current index.

use crate::page::{Page, PageHandle};

/// Pages in display order plus the index of the current page.
///
/// `current` is `Some` exactly when the registry holds at least one page, and
/// then always points at a valid entry.
#[derive(Debug)]
pub struct PageRegistry<P: Page> {
    pages: Vec<PageHandle<P>>,
    current: Option<usize>,
}

impl<P: Page> Default for PageRegistry<P> {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            current: None,
        }
    }
}

impl<P: Page> PageRegistry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the registry holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Index of the current page.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Handle of the current page.
    pub fn current_page(&self) -> Option<&PageHandle<P>> {
        self.current.and_then(|index| self.pages.get(index))
    }

    /// Page at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&PageHandle<P>> {
        self.pages.get(index)
    }

    /// First page in display order.
    pub fn first(&self) -> Option<&PageHandle<P>> {
        self.pages.first()
    }

    /// Last page in display order.
    pub fn last(&self) -> Option<&PageHandle<P>> {
        self.pages.last()
    }

    /// All pages in display order.
    pub fn pages(&self) -> &[PageHandle<P>] {
        &self.pages
    }

    /// Iterates pages in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PageHandle<P>> {
        self.pages.iter()
    }

    /// Whether `page` is registered.
    pub fn contains(&self, page: &PageHandle<P>) -> bool {
        self.position_of(page).is_some()
    }

    /// Display index of `page`.
    pub fn position_of(&self, page: &PageHandle<P>) -> Option<usize> {
        self.pages.iter().position(|p| p.ptr_eq(page))
    }

    /// Appends `page`. Returns `false` when it is already registered.
    pub fn add(&mut self, page: PageHandle<P>) -> bool {
        if self.contains(&page) {
            return false;
        }
        self.pages.push(page);
        if self.current.is_none() {
            self.current = Some(0);
        }
        true
    }

    /// Inserts `page` at `index`, appending when `index` is past the end.
    pub fn insert(&mut self, page: PageHandle<P>, index: usize) -> bool {
        if index >= self.pages.len() {
            return self.add(page);
        }
        if self.contains(&page) {
            return false;
        }
        self.pages.insert(index, page);
        if self.current.is_none() {
            self.current = Some(0);
        }
        true
    }

    /// Removes `page`. Returns `false` when it wasn't registered.
    pub fn remove(&mut self, page: &PageHandle<P>) -> bool {
        match self.position_of(page) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Removes the page at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<PageHandle<P>> {
        if index >= self.pages.len() {
            return None;
        }
        let removed = self.pages.remove(index);
        self.clamp_current();
        Some(removed)
    }

    /// Removes every page, returning them in display order.
    pub fn clear(&mut self) -> Vec<PageHandle<P>> {
        self.current = None;
        std::mem::take(&mut self.pages)
    }

    /// Makes `index` the current page. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            return false;
        }
        self.current = Some(index);
        true
    }

    /// Moves the current index by `delta`, saturating at both ends.
    pub fn shift_current(&mut self, delta: isize) -> Option<usize> {
        let current = self.current?;
        let last = self.pages.len().checked_sub(1)?;
        let shifted = current.saturating_add_signed(delta).min(last);
        self.current = Some(shifted);
        self.current
    }

    fn clamp_current(&mut self) {
        self.current = match self.pages.len() {
            0 => None,
            len => Some(self.current.unwrap_or(0).min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::{geometry::Size, page::BasicPage};

    use super::*;

    type TestPage = BasicPage<()>;

    fn page() -> PageHandle<TestPage> {
        PageHandle::new(TestPage::new(Size::new(100.0, 100.0)))
    }

    #[test]
    fn first_add_sets_current() {
        let mut registry = PageRegistry::new();
        assert_eq!(registry.current(), None);
        assert!(registry.add(page()));
        assert_eq!(registry.current(), Some(0));
        assert!(registry.add(page()));
        assert_eq!(registry.current(), Some(0));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut registry = PageRegistry::new();
        let a = page();
        assert!(registry.add(a.clone()));
        assert!(!registry.add(a.clone()));
        assert!(!registry.insert(a.clone(), 0));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn insert_splices_or_appends() {
        let mut registry = PageRegistry::new();
        let (a, b, c, d) = (page(), page(), page(), page());
        assert!(registry.insert(a.clone(), 7));
        assert!(registry.add(b.clone()));
        assert!(registry.insert(c.clone(), 1));
        assert!(registry.insert(d.clone(), 2));
        let order: Vec<_> = registry.iter().cloned().collect();
        assert_eq!(order, vec![a, c, d, b]);
    }

    #[test]
    fn insert_into_empty_initialises_current() {
        let mut registry = PageRegistry::new();
        assert!(registry.insert(page(), 0));
        assert_eq!(registry.current(), Some(0));
    }

    #[test]
    fn removing_clamps_current() {
        let mut registry = PageRegistry::new();
        let pages: Vec<_> = (0..3).map(|_| page()).collect();
        for p in &pages {
            registry.add(p.clone());
        }
        assert!(registry.set_current(2));
        assert!(registry.remove(&pages[2]));
        assert_eq!(registry.current(), Some(1));
        assert!(registry.remove_at(0).is_some());
        assert_eq!(registry.current(), Some(0));
        assert!(registry.remove(&pages[1]));
        assert_eq!(registry.current(), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn out_of_range_accessors_are_noops() {
        let mut registry = PageRegistry::new();
        registry.add(page());
        assert!(registry.get(1).is_none());
        assert!(registry.remove_at(5).is_none());
        assert!(!registry.set_current(1));
        assert!(!registry.remove(&page()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_resets_current() {
        let mut registry = PageRegistry::new();
        registry.add(page());
        registry.add(page());
        let removed = registry.clear();
        assert_eq!(removed.len(), 2);
        assert_eq!(registry.current(), None);
    }

    #[test]
    fn shift_current_saturates() {
        let mut registry = PageRegistry::new();
        for _ in 0..3 {
            registry.add(page());
        }
        assert_eq!(registry.shift_current(-4), Some(0));
        assert_eq!(registry.shift_current(9), Some(2));
        assert_eq!(registry.shift_current(-1), Some(1));
    }
}
