//! Widget event handlers.
//!
//! Widgets register closures in a [`HandlerRegistry`] keyed by
//! (element id, event type) while building their elements. The
//! containing scope later dispatches activations by element id (see
//! [`crate::dispatch`]). The registry must be cleared before each page
//! build so handlers from a previous build don't persist.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A handler closure for an activation event.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// A state-change notification closure.
///
/// Receives the new value after the state commit. Fire-and-forget: the
/// widget does not observe what the containing scope does with it.
pub type ChangeHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's ID (from `Element.id`)
    /// - `event`: The event type (e.g. `"on_activate"`)
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Clear all handlers.
    ///
    /// Call before rebuilding a page so stale handlers are dropped.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }
}
