//! Timeline-changed notifications.
//!
//! Hosts register callbacks on the editor instance instead of listening on
//! a global event bus. Callbacks run synchronously, in subscription order,
//! after the segment labels have been refreshed.

use std::fmt;

use crate::video::Video;

/// Handle returned by [`TimelineListeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Video) + Send>;

/// Registry of timeline-changed callbacks.
#[derive(Default)]
pub struct TimelineListeners {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl TimelineListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It stays registered until unsubscribed.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Video) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Invoke every callback with the current video.
    pub fn notify(&mut self, video: &Video) {
        for (_, listener) in &mut self.listeners {
            listener(video);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for TimelineListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineListeners")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
