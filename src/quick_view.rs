//! Quick view slot
//!
//! Application-owned state holding the one item currently shown full-screen.
//! The store is a cheap cloneable handle: the explorer view gets a clone
//! injected, the overlay that renders the item subscribes to changes, and the
//! slot outlives any single view until it is explicitly cleared.

use crate::items::ExplorerItem;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`QuickViewStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Option<&ExplorerItem>)>;

#[derive(Default)]
struct Inner {
    item: Option<ExplorerItem>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared quick view slot with get/set/subscribe access
#[derive(Clone, Default)]
pub struct QuickViewStore {
    inner: Rc<RefCell<Inner>>,
}

impl QuickViewStore {
    /// Create an empty (closed) quick view slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Item currently shown, if the quick view is open
    #[must_use]
    pub fn get(&self) -> Option<ExplorerItem> {
        self.inner.borrow().item.clone()
    }

    /// Whether the quick view is open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().item.is_some()
    }

    /// Show `item`, replacing whatever was shown before
    pub fn set(&self, item: ExplorerItem) {
        log::debug!("quick view opened for item {}", item.id);
        self.inner.borrow_mut().item = Some(item);
        self.notify();
    }

    /// Close the quick view
    pub fn clear(&self) {
        if self.inner.borrow_mut().item.take().is_some() {
            log::debug!("quick view closed");
            self.notify();
        }
    }

    /// Register a listener called with the new slot value on every change
    pub fn subscribe(&self, listener: impl Fn(Option<&ExplorerItem>) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(registered, _)| *registered != id);
        inner.listeners.len() < before
    }

    fn notify(&self) {
        // Listeners may read the store, so release the borrow before calling them
        let (item, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.item.clone(), listeners)
        };
        for listener in listeners {
            listener(item.as_ref());
        }
    }
}

impl fmt::Debug for QuickViewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("QuickViewStore")
            .field("item", &inner.item.as_ref().map(|item| item.id))
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::path_item;
    use std::cell::Cell;

    #[test]
    fn test_starts_closed() {
        let store = QuickViewStore::new();
        assert!(!store.is_open());
        assert!(store.get().is_none());
    }

    #[test]
    fn test_set_replaces_and_clear_empties() {
        let store = QuickViewStore::new();
        store.set(path_item(1, "/", "a", false));
        store.set(path_item(2, "/", "b", false));

        assert_eq!(store.get().map(|item| item.id), Some(2));

        store.clear();
        assert!(!store.is_open());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = QuickViewStore::new();
        let other = store.clone();

        other.set(path_item(3, "/", "c", false));
        assert!(store.is_open());
    }

    #[test]
    fn test_subscribers_are_notified() {
        let store = QuickViewStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |item| sink.borrow_mut().push(item.map(|i| i.id)));

        store.set(path_item(1, "/", "a", false));
        store.clear();
        store.clear();

        assert_eq!(*seen.borrow(), vec![Some(1), None]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = QuickViewStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(path_item(1, "/", "a", false));

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = QuickViewStore::new();
        let reader = store.clone();
        let open = Rc::new(Cell::new(false));
        let flag = open.clone();
        store.subscribe(move |_| flag.set(reader.is_open()));

        store.set(path_item(1, "/", "a", false));
        assert!(open.get());
    }
}
