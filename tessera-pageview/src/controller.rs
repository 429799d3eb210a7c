//! Paged scroll controller tying pages, layout, gestures and glides together.
//!
//! ## Usage
//!
//! Own one controller per paged container. Forward the container size, touch
//! events and a per-frame tick; read page placement back from the handles.

use std::{fmt, sync::Arc};

use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::{
    animator::{AutoScroll, AutoScroller},
    config::{ConfigError, PageViewConfig, is_positive},
    event::{EventListeners, ListenerId, PageTurnTarget, PageViewEvent},
    geometry::Size,
    gesture::{GestureTranslator, Interception, Touch, TouchPhase},
    layout::{Boundaries, BoundaryPages, PageLayout},
    orientation::{Orientation, ScrollDirection},
    page::{DetachedHost, Page, PageContainer, PageHandle, PageHost},
    registry::PageRegistry,
    scroller::{clamp_offset, move_pages},
};

/// A paged, scrollable container.
///
/// Pages are laid out along one axis. Dragging moves them with a hard stop at
/// the first and last page; releasing either commits to a neighbouring page or
/// snaps back, gliding at constant speed until the target page rests at the
/// leading boundary.
///
/// # Examples
///
/// ```
/// use tessera_pageview::{
///     BasicPage, Orientation, PageHandle, PageViewConfig, PagedScrollController, Size,
/// };
///
/// let config = PageViewConfig::default().orientation(Orientation::Horizontal);
/// let mut pager = PagedScrollController::<BasicPage<()>>::try_with_config(config)
///     .expect("valid config");
/// pager.set_content_size(Size::new(100.0, 80.0));
/// for _ in 0..3 {
///     pager.add_page(PageHandle::new(BasicPage::default()));
/// }
///
/// pager.scroll_to_page(2);
/// while pager.is_auto_scrolling() {
///     pager.update(1.0 / 60.0);
/// }
/// assert_eq!(pager.cur_page_index(), Some(2));
/// ```
pub struct PagedScrollController<P: Page> {
    registry: PageRegistry<P>,
    layout: PageLayout,
    boundary_pages: Option<BoundaryPages<P>>,
    gesture: GestureTranslator,
    animator: AutoScroller,
    custom_scroll_threshold: f32,
    using_custom_scroll_threshold: bool,
    touch_enabled: bool,
    intercepting: bool,
    listeners: EventListeners<Self>,
    host: Box<dyn PageHost<P>>,
}

impl<P: Page> Default for PagedScrollController<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> PagedScrollController<P> {
    /// Creates a controller with the default configuration and no host.
    pub fn new() -> Self {
        Self::from_valid_config(&PageViewConfig::default())
    }

    /// Creates a controller from `config` after validating it.
    pub fn try_with_config(config: PageViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    /// Replaces the scene-graph host that mirrors page parenting.
    pub fn with_host(mut self, host: impl PageHost<P> + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    fn from_valid_config(config: &PageViewConfig) -> Self {
        let (custom_scroll_threshold, using_custom_scroll_threshold) =
            match config.scroll_threshold {
                Some(threshold) => (threshold, true),
                None => (0.0, false),
            };
        Self {
            registry: PageRegistry::new(),
            layout: PageLayout::new(config.orientation, config.pages_shown),
            boundary_pages: None,
            gesture: GestureTranslator::new(config.orientation, config.child_focus_cancel_offset),
            animator: AutoScroller::new(config.glide_duration),
            custom_scroll_threshold,
            using_custom_scroll_threshold,
            touch_enabled: true,
            intercepting: false,
            listeners: EventListeners::new(),
            host: Box::new(DetachedHost),
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> PageViewConfig {
        PageViewConfig {
            orientation: self.layout.orientation(),
            pages_shown: self.layout.pages_shown(),
            scroll_threshold: self
                .using_custom_scroll_threshold
                .then_some(self.custom_scroll_threshold),
            child_focus_cancel_offset: self.gesture.child_focus_cancel_offset(),
            glide_duration: self.animator.duration(),
        }
    }

    // Page registry

    /// Appends `page`. Duplicates are ignored.
    pub fn add_page(&mut self, page: PageHandle<P>) -> bool {
        if !self.registry.add(page.clone()) {
            return false;
        }
        self.host.attach_page(&page);
        self.registry_changed();
        true
    }

    /// Inserts `page` at `index`, appending when `index` is past the end.
    pub fn insert_page(&mut self, page: PageHandle<P>, index: usize) -> bool {
        if !self.registry.insert(page.clone(), index) {
            return false;
        }
        self.host.attach_page(&page);
        self.registry_changed();
        true
    }

    /// Removes `page`. Returns `false` when it isn't one of this pager's pages.
    pub fn remove_page(&mut self, page: &PageHandle<P>) -> bool {
        if !self.registry.remove(page) {
            return false;
        }
        self.host.detach_page(page);
        self.registry_changed();
        true
    }

    /// Removes the page at `index`.
    pub fn remove_page_at_index(&mut self, index: usize) -> Option<PageHandle<P>> {
        let page = self.registry.remove_at(index)?;
        self.host.detach_page(&page);
        self.registry_changed();
        Some(page)
    }

    /// Removes every page.
    pub fn remove_all_pages(&mut self) {
        for page in self.registry.clear() {
            self.host.detach_page(&page);
        }
        self.registry_changed();
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.registry.len()
    }

    /// Page at `index`, if any.
    pub fn page(&self, index: usize) -> Option<PageHandle<P>> {
        self.registry.get(index).cloned()
    }

    /// All pages in display order.
    pub fn pages(&self) -> &[PageHandle<P>] {
        self.registry.pages()
    }

    /// Index of the current page, `None` while there are no pages.
    pub fn cur_page_index(&self) -> Option<usize> {
        self.registry.current()
    }

    /// Makes `index` the current page without animating.
    pub fn set_cur_page_index(&mut self, index: usize) -> bool {
        if !self.registry.set_current(index) {
            return false;
        }
        self.layout.mark_dirty();
        true
    }

    fn registry_changed(&mut self) {
        self.boundary_pages = None;
        self.layout.mark_dirty();
    }

    // Layout

    /// Scroll axis.
    pub fn direction(&self) -> Orientation {
        self.layout.orientation()
    }

    /// Changes the scroll axis.
    pub fn set_direction(&mut self, orientation: Orientation) {
        self.layout.set_orientation(orientation);
        self.gesture.reset(orientation);
    }

    /// Number of pages visible at once.
    pub fn pages_shown(&self) -> usize {
        self.layout.pages_shown()
    }

    /// Changes how many pages are visible at once. Zero is ignored.
    pub fn set_pages_shown(&mut self, pages_shown: usize) -> bool {
        self.layout.set_pages_shown(pages_shown)
    }

    /// Container size.
    pub fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// Resizes the container and re-lays out the pages at once.
    ///
    /// A glide in flight is abandoned.
    pub fn set_content_size(&mut self, size: Size) {
        self.layout.set_content_size(size);
        self.do_layout();
    }

    /// Uniform page size derived from the container.
    pub fn page_size(&self) -> Size {
        self.layout.page_size()
    }

    /// Main-axis window the current page rests in.
    pub fn boundaries(&self) -> Boundaries {
        self.layout.boundaries()
    }

    /// Cached first and last pages, resolved by the last layout pass.
    pub fn boundary_pages(&self) -> Option<&BoundaryPages<P>> {
        self.boundary_pages.as_ref()
    }

    /// Whether the pages need a layout pass.
    pub fn is_layout_dirty(&self) -> bool {
        self.layout.is_dirty()
    }

    /// Places and sizes every page relative to the current page.
    ///
    /// Does nothing unless something changed since the last pass.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn do_layout(&mut self) {
        if !self.layout.is_dirty() {
            return;
        }
        self.animator.cancel();
        self.update_all_pages_position();
        self.update_all_pages_size();
        self.boundary_pages = BoundaryPages::resolve(&self.registry);
        self.layout.clear_dirty();
    }

    fn update_all_pages_position(&mut self) {
        let Some(current) = self.registry.current() else {
            return;
        };
        for (index, page) in self.registry.iter().enumerate() {
            let position = self.layout.position_for(index, current);
            page.with_mut(|page| page.set_position(position));
        }
    }

    fn update_all_pages_size(&mut self) {
        let size = self.layout.page_size();
        for page in self.registry.iter() {
            page.with_mut(|page| page.set_size(size));
        }
    }

    // Scrolling

    /// Moves every page by `offset`, stopping the first or last page at the
    /// boundary window.
    ///
    /// Returns `true` when the offset was applied unchanged.
    pub fn apply_offset(&mut self, offset: Vec2) -> bool {
        if self.registry.is_empty() {
            return false;
        }
        let Some(boundary_pages) = &self.boundary_pages else {
            return false;
        };
        let orientation = self.layout.orientation();
        let intent = match self.gesture.intent() {
            intent if intent.is_on(orientation) => intent,
            _ => orientation.advancing_direction(),
        };
        let clamped = clamp_offset(
            intent,
            offset,
            &boundary_pages.leading.rect(),
            &boundary_pages.trailing.rect(),
            self.layout.boundaries(),
        );
        move_pages(self.registry.iter(), clamped.offset);
        clamped.honored
    }

    /// Glides to the page at `index`, making it the current page.
    ///
    /// Issuing a new scroll while gliding replaces the previous target.
    pub fn scroll_to_page(&mut self, index: usize) -> bool {
        self.do_layout();
        if !self.registry.set_current(index) {
            return false;
        }
        let Some(page) = self.registry.get(index) else {
            return false;
        };
        let orientation = self.layout.orientation();
        let distance = self.layout.anchor() - orientation.component(page.position());
        debug!(index, distance, "Scrolling to page");
        self.animator.start(orientation, distance);
        true
    }

    /// Whether a glide is in flight.
    pub fn is_auto_scrolling(&self) -> bool {
        self.animator.is_scrolling()
    }

    /// Current glide state.
    pub fn auto_scroll(&self) -> AutoScroll {
        self.animator.state()
    }

    /// Advances the controller by one frame of `dt` seconds.
    ///
    /// Glide steps bypass the boundary clamp; a glide always ends with a page
    /// resting on the anchor.
    pub fn update(&mut self, dt: f32) {
        self.do_layout();
        let Some(step) = self.animator.step(dt) else {
            return;
        };
        move_pages(self.registry.iter(), step.delta);
        if step.finished {
            debug!(page = ?self.registry.current(), "Page turned");
            self.listeners.emit(self, PageViewEvent::Turning);
        }
    }

    // Touch handling

    /// Whether the pager reacts to touches.
    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    /// Enables or disables touch handling.
    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }

    /// Direction of the current drag.
    pub fn touch_intent(&self) -> ScrollDirection {
        self.gesture.intent()
    }

    /// A touch went down on the pager. Returns whether it is accepted.
    pub fn on_touch_began(&mut self, _touch: &Touch) -> bool {
        if !self.touch_enabled {
            return false;
        }
        self.animator.cancel();
        self.gesture.reset(self.layout.orientation());
        true
    }

    /// A touch moved. Returns whether the drag offset was applied unclamped.
    pub fn on_touch_moved(&mut self, touch: &Touch) -> bool {
        if !self.touch_enabled || self.intercepting {
            return false;
        }
        self.handle_move(touch)
    }

    /// A touch was lifted.
    pub fn on_touch_ended(&mut self) {
        if self.touch_enabled && !self.intercepting {
            self.handle_release();
        }
        self.intercepting = false;
    }

    /// The host cancelled the touch. Settles exactly like a release.
    pub fn on_touch_cancelled(&mut self) {
        self.on_touch_ended();
    }

    /// Handles a touch that began on a child widget.
    ///
    /// Moves only drag the pages once they travelled further than the child
    /// focus cancel offset; the returned [`Interception::Dragging`] tells the
    /// child to drop its pressed highlight.
    pub fn intercept_touch(&mut self, phase: TouchPhase, touch: &Touch) -> Interception {
        if !self.touch_enabled {
            return Interception::Ignored;
        }
        if phase == TouchPhase::Began {
            self.intercepting = true;
        }
        let interception = self
            .gesture
            .intercept(self.layout.orientation(), phase, touch);
        match interception {
            Interception::Ignored => {}
            Interception::Dragging => {
                self.handle_move(touch);
            }
            Interception::Released => {
                self.handle_release();
                self.intercepting = false;
            }
        }
        interception
    }

    fn handle_move(&mut self, touch: &Touch) -> bool {
        self.do_layout();
        let offset = self.gesture.translate(self.layout.orientation(), touch);
        self.apply_offset(offset)
    }

    fn handle_release(&mut self) {
        self.do_layout();
        let extent = self.layout.page_extent();
        if !is_positive(extent) {
            return;
        }
        let Some(page) = self.registry.current_page() else {
            return;
        };

        let moved_pages = (self.advance_of(page) / extent).floor() as isize;
        let Some(current) = self.registry.shift_current(moved_pages) else {
            return;
        };
        let Some(page) = self.registry.get(current).cloned() else {
            return;
        };

        let advance = self.advance_of(&page);
        let threshold = self.effective_scroll_threshold();
        let last = self.registry.len() - 1;
        trace!(current, advance, threshold, "Settling after release");

        if advance >= threshold {
            if current >= last {
                self.realign(&page);
            } else {
                self.scroll_to_page(current + 1);
            }
        } else if advance <= -threshold {
            if current == 0 {
                self.realign(&page);
            } else {
                self.scroll_to_page(current - 1);
            }
        } else {
            self.scroll_to_page(current);
        }
    }

    fn advance_of(&self, page: &PageHandle<P>) -> f32 {
        self.layout
            .orientation()
            .advance_from(&page.rect(), self.layout.anchor())
    }

    /// Puts `page` back on the anchor at once, moving every page with it.
    fn realign(&mut self, page: &PageHandle<P>) {
        let orientation = self.layout.orientation();
        let offset = self.layout.anchor() - orientation.component(page.position());
        trace!(offset, "Realigning end page");
        move_pages(self.registry.iter(), orientation.offset(offset));
    }

    // Threshold

    /// Sets the release distance that commits to a neighbouring page.
    ///
    /// # Panics
    ///
    /// Debug builds panic on non-positive values; release builds ignore them.
    pub fn set_custom_scroll_threshold(&mut self, threshold: f32) {
        debug_assert!(is_positive(threshold), "Invalid threshold: {threshold}");
        if !is_positive(threshold) {
            warn!(threshold, "Ignoring non-positive scroll threshold");
            return;
        }
        self.custom_scroll_threshold = threshold;
        self.using_custom_scroll_threshold = true;
    }

    /// Last custom threshold, meaningful while it is in use.
    pub fn custom_scroll_threshold(&self) -> f32 {
        self.custom_scroll_threshold
    }

    /// Switches between the custom threshold and half a page.
    pub fn set_using_custom_scroll_threshold(&mut self, using: bool) {
        self.using_custom_scroll_threshold = using;
    }

    /// Whether the custom threshold is in use.
    pub fn is_using_custom_scroll_threshold(&self) -> bool {
        self.using_custom_scroll_threshold
    }

    /// Threshold the next release is compared against.
    pub fn effective_scroll_threshold(&self) -> f32 {
        if self.using_custom_scroll_threshold {
            self.custom_scroll_threshold
        } else {
            self.layout.page_extent() / 2.0
        }
    }

    // Events

    /// Registers an object-style page turn listener.
    pub fn add_event_listener_target(&mut self, target: Arc<dyn PageTurnTarget<Self>>) -> ListenerId {
        self.listeners.subscribe_target(target)
    }

    /// Registers a page turn callback.
    pub fn add_event_listener(
        &mut self,
        callback: impl Fn(&Self, PageViewEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Registers an integer-coded page turn callback.
    pub fn add_coded_event_listener(
        &mut self,
        callback: impl Fn(&Self, i32) + Send + Sync + 'static,
    ) -> ListenerId {
        self.listeners.subscribe_coded(callback)
    }

    /// Removes a listener registered through any of the `add_*` methods.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl<P: PageContainer> PagedScrollController<P> {
    /// Creates an empty page sized for this container.
    ///
    /// The page isn't added; see [`add_widget_to_page`](Self::add_widget_to_page).
    pub fn create_page(&self) -> PageHandle<P> {
        PageHandle::new(P::with_size(self.layout.page_size()))
    }

    /// Places `child` on the page at `index`.
    ///
    /// When no such page exists and `force_create` is set, a new page holding
    /// `child` is appended instead.
    pub fn add_widget_to_page(&mut self, child: P::Child, index: usize, force_create: bool) -> bool {
        if let Some(page) = self.registry.get(index) {
            page.with_mut(|page| page.add_child(child));
            return true;
        }
        if !force_create {
            return false;
        }
        if index > self.registry.len() {
            debug!(
                index,
                page_index = self.registry.len(),
                "Requested page doesn't exist, appending a new one"
            );
        }
        let page = self.create_page();
        page.with_mut(|page| page.add_child(child));
        self.add_page(page)
    }
}

impl<P: Page + Clone> Clone for PagedScrollController<P> {
    fn clone(&self) -> Self {
        let mut layout = PageLayout::new(self.layout.orientation(), self.layout.pages_shown());
        layout.set_content_size(self.layout.content_size());
        let mut clone = Self {
            registry: PageRegistry::new(),
            layout,
            boundary_pages: None,
            gesture: GestureTranslator::new(
                self.layout.orientation(),
                self.gesture.child_focus_cancel_offset(),
            ),
            animator: AutoScroller::new(self.animator.duration()),
            custom_scroll_threshold: self.custom_scroll_threshold,
            using_custom_scroll_threshold: self.using_custom_scroll_threshold,
            touch_enabled: self.touch_enabled,
            intercepting: false,
            listeners: self.listeners.clone(),
            host: self.host.clone(),
        };
        for page in self.registry.iter() {
            clone.add_page(page.deep_clone());
        }
        clone
    }
}

impl<P: Page> fmt::Debug for PagedScrollController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedScrollController")
            .field("page_count", &self.registry.len())
            .field("current", &self.registry.current())
            .field("layout", &self.layout)
            .field("auto_scroll", &self.animator.state())
            .field("intent", &self.gesture.intent())
            .field("scroll_threshold", &self.effective_scroll_threshold())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
