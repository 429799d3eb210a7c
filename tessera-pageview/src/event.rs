//! Page-turning notifications.
//!
//! ## Usage
//!
//! Observe completed page turns through a target object, a typed callback or
//! an integer-coded callback. All three are subscribers of the same list and
//! each one is invoked for every event.

use std::{fmt, sync::Arc};

/// Events emitted by the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageViewEvent {
    /// An auto-scroll glide finished and the current page is at rest.
    Turning,
}

impl PageViewEvent {
    /// Integer code delivered to coded listeners.
    pub fn code(self) -> i32 {
        match self {
            Self::Turning => 0,
        }
    }
}

/// Object-style listener, the counterpart of a target + selector pair.
pub trait PageTurnTarget<T: ?Sized>: Send + Sync {
    /// Called for every event emitted by `sender`.
    fn on_page_view_event(&self, sender: &T, event: PageViewEvent);
}

/// Typed callback listener.
pub type PageViewCallback<T> = Arc<dyn Fn(&T, PageViewEvent) + Send + Sync>;

/// Integer-coded callback listener.
pub type CodedPageViewCallback<T> = Arc<dyn Fn(&T, i32) + Send + Sync>;

/// Identifies a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

enum Subscriber<T: ?Sized> {
    Target(Arc<dyn PageTurnTarget<T>>),
    Callback(PageViewCallback<T>),
    Coded(CodedPageViewCallback<T>),
}

impl<T: ?Sized> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Target(target) => Self::Target(target.clone()),
            Self::Callback(callback) => Self::Callback(callback.clone()),
            Self::Coded(callback) => Self::Coded(callback.clone()),
        }
    }
}

impl<T: ?Sized> Subscriber<T> {
    fn notify(&self, sender: &T, event: PageViewEvent) {
        match self {
            Self::Target(target) => target.on_page_view_event(sender, event),
            Self::Callback(callback) => callback(sender, event),
            Self::Coded(callback) => callback(sender, event.code()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Target(_) => "target",
            Self::Callback(_) => "callback",
            Self::Coded(_) => "coded",
        }
    }
}

/// Ordered list of page view listeners.
///
/// Cloning the list shares the listeners themselves.
pub struct EventListeners<T: ?Sized> {
    subscribers: Vec<(ListenerId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: ?Sized> Default for EventListeners<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: ?Sized> Clone for EventListeners<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
            next_id: self.next_id,
        }
    }
}

impl<T: ?Sized> fmt::Debug for EventListeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.subscribers
                    .iter()
                    .map(|(id, subscriber)| (id, subscriber.kind())),
            )
            .finish()
    }
}

impl<T: ?Sized> EventListeners<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Registers an object-style listener.
    pub fn subscribe_target(&mut self, target: Arc<dyn PageTurnTarget<T>>) -> ListenerId {
        self.push(Subscriber::Target(target))
    }

    /// Registers a typed callback.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&T, PageViewEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.push(Subscriber::Callback(Arc::new(callback)))
    }

    /// Registers an integer-coded callback.
    pub fn subscribe_coded(
        &mut self,
        callback: impl Fn(&T, i32) + Send + Sync + 'static,
    ) -> ListenerId {
        self.push(Subscriber::Coded(Arc::new(callback)))
    }

    /// Removes a listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Removes every listener.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Delivers `event` to every listener in registration order.
    pub fn emit(&self, sender: &T, event: PageViewEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber.notify(sender, event);
        }
    }

    fn push(&mut self, subscriber: Subscriber<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

    use super::*;

    struct Sender;

    #[derive(Default)]
    struct CountingTarget {
        calls: AtomicUsize,
    }

    impl PageTurnTarget<Sender> for CountingTarget {
        fn on_page_view_event(&self, _sender: &Sender, event: PageViewEvent) {
            assert_eq!(event, PageViewEvent::Turning);
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn all_listener_shapes_fire() {
        let mut listeners = EventListeners::<Sender>::new();
        let target = Arc::new(CountingTarget::default());
        let callback_calls = Arc::new(AtomicUsize::new(0));
        let last_code = Arc::new(AtomicI32::new(-1));

        listeners.subscribe_target(target.clone());
        let calls = callback_calls.clone();
        listeners.subscribe(move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        });
        let code = last_code.clone();
        listeners.subscribe_coded(move |_, value| code.store(value, Ordering::SeqCst));

        listeners.emit(&Sender, PageViewEvent::Turning);

        assert_eq!(target.calls.load(Ordering::SeqCst), 1);
        assert_eq!(callback_calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_code.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribed_listeners_stay_silent() {
        let mut listeners = EventListeners::<Sender>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = listeners.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&Sender, PageViewEvent::Turning);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(listeners.is_empty());
    }

    #[test]
    fn clones_share_listeners() {
        let mut listeners = EventListeners::<Sender>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        listeners.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let copy = listeners.clone();
        listeners.emit(&Sender, PageViewEvent::Turning);
        copy.emit(&Sender, PageViewEvent::Turning);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(copy.len(), 1);
    }
}
