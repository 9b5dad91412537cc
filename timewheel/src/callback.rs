//! Callback handles and instance-scoped event subscription.
//!
//! Handlers are registered against a specific dial instance and removed
//! again when the returned [`Subscription`] guard is dropped; nothing is
//! ever attached to global state.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use slotmap::{DefaultKey, SlotMap};
use smallvec::SmallVec;

/// Stable, comparable slot handle for any shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`) so callback-bearing config
/// structs can stay `PartialEq` without deep closure comparisons.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Create a slot from a shared callable trait object.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Read the current callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Stable, comparable callback handle for `Fn(T)`.
///
/// This is what update handlers are stored as.
pub struct CallbackWith<T> {
    slot: Slot<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        let handler = self.slot.shared();
        handler(value);
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallbackWith").finish()
    }
}

type Registry<T> = RwLock<SlotMap<DefaultKey, CallbackWith<T>>>;

/// A set of handlers for one event kind on one dial instance.
pub struct Subscribers<T> {
    registry: Arc<Registry<T>>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            registry: Arc::new(RwLock::new(SlotMap::new())),
        }
    }
}

impl<T: Clone + 'static> Subscribers<T> {
    /// Registers a handler and returns the guard that keeps it alive.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let key = self.registry.write().insert(CallbackWith::new(handler));
        let registry = Arc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = Weak::upgrade(&registry) {
                    registry.write().remove(key);
                }
            })),
        }
    }

    /// Calls every live handler with a clone of `value`.
    ///
    /// Handlers are snapshotted before the first call, so a handler may
    /// subscribe or drop subscriptions without deadlocking the registry.
    pub fn emit(&self, value: &T) {
        let handlers: SmallVec<[CallbackWith<T>; 4]> =
            self.registry.read().values().cloned().collect();
        for handler in handlers {
            handler.call(value.clone());
        }
    }

    /// Number of live handlers.
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}

/// Guard tying a registered handler to its owner's lifetime.
///
/// Dropping the guard unregisters the handler; [`Subscription::detach`]
/// leaves it registered for as long as the dial lives.
#[must_use = "dropping a Subscription immediately unregisters the handler"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Keeps the handler registered for the lifetime of the dial.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn emit_reaches_all_subscribers() {
        let subscribers = Subscribers::<u32>::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let a = {
            let hits = hits.clone();
            subscribers.subscribe(move |v| {
                hits.fetch_add(v as usize, Ordering::SeqCst);
            })
        };
        let b = {
            let hits = hits.clone();
            subscribers.subscribe(move |v| {
                hits.fetch_add(v as usize, Ordering::SeqCst);
            })
        };

        subscribers.emit(&3);
        assert_eq!(hits.load(Ordering::SeqCst), 6);
        drop((a, b));
    }

    #[test]
    fn dropping_the_guard_unregisters() {
        let subscribers = Subscribers::<u32>::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let sub = {
            let hits = hits.clone();
            subscribers.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        subscribers.emit(&0);
        drop(sub);
        subscribers.emit(&0);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn detached_handler_outlives_the_guard() {
        let subscribers = Subscribers::<u32>::default();
        let hits = Arc::new(AtomicUsize::new(0));

        {
            let hits = hits.clone();
            subscribers
                .subscribe(move |_| {
                    hits.fetch_add(1, Ordering::SeqCst);
                })
                .detach();
        }
        subscribers.emit(&0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let a = CallbackWith::<u32>::new(|_| {});
        let b = a.clone();
        let c = CallbackWith::<u32>::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
