//! Change notification
//!
//! A plain callback registry. Whoever owns the state calls [`Subscribers::notify`]
//! after every mutation with the full current sequence.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Plain number form, for handing the id across FFI boundaries
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Rebuild an id from [`SubscriptionId::as_u64`]
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

type Listener<T> = Box<dyn FnMut(&[T])>;

/// Registered listeners, called in registration order
pub struct Subscribers<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl<T> Subscribers<T> {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is not called until the next notify
    pub fn subscribe(&mut self, listener: impl FnMut(&[T]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener with `items`
    pub fn notify(&mut self, items: &[T]) {
        for (_, listener) in &mut self.listeners {
            listener(items);
        }
    }

    /// Call a single listener (used to hand a new subscriber the current state)
    pub fn notify_one(&mut self, id: SubscriptionId, items: &[T]) {
        if let Some((_, listener)) = self.listeners.iter_mut().find(|(lid, _)| *lid == id) {
            listener(items);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if nobody is listening
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
