//! Minimal observable cell.
//!
//! A thread-safe value that views subscribe to. No streams, no
//! scheduling: a write notifies every listener synchronously on the
//! writing thread, and a new subscriber is replayed the current value
//! so it can render without waiting for the next write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    listeners: RwLock<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
}

/// Shared observable value. Cloning yields another handle to the same
/// cell, so a store can hand handles to any number of views.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Replaces the value and notifies listeners. Listeners run outside
    /// the value lock, so they may read the cell freely.
    pub fn set(&self, value: T) {
        {
            *self.inner.value.write() = value.clone();
        }
        self.notify(&value);
    }

    /// Mutates the value in place and notifies listeners with the result.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let next = {
            let mut guard = self.inner.value.write();
            f(&mut guard);
            guard.clone()
        };
        self.notify(&next);
    }

    /// Registers a listener and replays the current value to it
    /// immediately. Dropping the returned handle unsubscribes.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener<T> = Arc::new(listener);

        // Replay first so new subscribers render immediately.
        listener(&self.get());
        self.inner.listeners.write().push((id, listener));

        let inner = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = Weak::upgrade(&inner) {
                    inner.listeners.write().retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .read()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();

        for listener in listeners {
            listener(value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Listener registration handle. The listener stays attached until this
/// is dropped or leaked via [`Subscription::detach`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Keeps the listener attached for the lifetime of the observable.
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
