//! Observable value containers.
//!
//! An [`Observable`] holds a current value and a list of subscribers that are
//! notified synchronously, in registration order, on every change. New
//! subscribers receive the current value immediately on registration.
//!
//! Containers are single-threaded by design: every notification completes
//! before the triggering `set`/`update` call returns.

/// Handle returned by [`Observable::subscribe`], used to de-register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A value container that notifies registered subscribers on every change.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
}

impl<T> Observable<T> {
    /// Create a container holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a subscriber.
    ///
    /// The callback is invoked immediately with the current value, and again
    /// after every subsequent [`set`](Self::set) or [`update`](Self::update).
    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> SubscriberId {
        callback(&self.value);

        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Replace the value and notify all subscribers before returning.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }

    /// Compute the new value from the old one, then notify as `set` does.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
