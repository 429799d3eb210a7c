//! tessera-pageview drives a paged, scrollable container.
//!
//! Pages are laid out end to end along one axis. Dragging moves every page
//! together and stops at the first and last page; releasing commits to the
//! neighbouring page once the drag crossed a threshold, otherwise the current
//! page settles back. Settling glides at a constant speed chosen so every
//! glide takes the same time, and listeners hear about it once the glide
//! finishes.
//!
//! The crate doesn't render anything. Pages belong to the host scene graph and
//! are reached through [`PageHandle`]s; the host forwards its container size,
//! touch events and a per-frame tick.
//!
//! # Quick start
//!
//! ```
//! use tessera_pageview::{
//!     BasicPage, Orientation, PageHandle, PageViewConfig, PagedScrollController, Size, Touch,
//!     glam::Vec2,
//! };
//!
//! let config = PageViewConfig::default().orientation(Orientation::Horizontal);
//! let mut pager = PagedScrollController::<BasicPage<&str>>::try_with_config(config)
//!     .expect("valid config");
//! pager.set_content_size(Size::new(320.0, 480.0));
//! pager.add_widget_to_page("intro", 0, true);
//! pager.add_widget_to_page("details", 1, true);
//!
//! // Swipe left by more than half a page.
//! let start = Vec2::new(300.0, 200.0);
//! pager.on_touch_began(&Touch::at(start));
//! pager.on_touch_moved(&Touch::new(start - Vec2::new(200.0, 0.0), start));
//! pager.on_touch_ended();
//!
//! while pager.is_auto_scrolling() {
//!     pager.update(1.0 / 60.0);
//! }
//! assert_eq!(pager.cur_page_index(), Some(1));
//! ```
//!
//! # Coordinates
//!
//! Positions are bottom-left corners in container-local space with y pointing
//! up. Horizontal pagers place following pages to the right; vertical pagers
//! place them below, at lower y.

#![deny(missing_docs, clippy::unwrap_used)]

pub mod animator;
pub mod config;
mod controller;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod orientation;
pub mod page;
pub mod registry;
pub mod scroller;

pub use glam;

pub use crate::{
    animator::{AutoScroll, AutoScroller, DEFAULT_GLIDE_DURATION, GlideStep},
    config::{ConfigError, PageViewConfig},
    controller::PagedScrollController,
    event::{
        CodedPageViewCallback, EventListeners, ListenerId, PageTurnTarget, PageViewCallback,
        PageViewEvent,
    },
    geometry::{PageRect, Size},
    gesture::{
        DEFAULT_CHILD_FOCUS_CANCEL_OFFSET, GestureTranslator, Interception, Touch, TouchPhase,
    },
    layout::{Boundaries, BoundaryPages, PageLayout},
    orientation::{Orientation, ScrollDirection},
    page::{BasicPage, DetachedHost, Page, PageContainer, PageHandle, PageHost},
    registry::PageRegistry,
    scroller::{ClampedOffset, clamp_offset, move_pages},
};
