use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reactive disclosure state.
///
/// One boolean flag, collapsed by default. The handle is cheap to clone
/// and shares the flag, so a widget builder and an event handler can
/// both hold it. A separate dirty bit records that the flag changed
/// since the containing scope last rebuilt its page.
///
/// # Example
///
/// ```
/// use furl::ToggleState;
///
/// let state = ToggleState::new();
/// assert!(!state.is_expanded());
/// assert!(state.toggle());
/// assert!(state.is_dirty());
/// ```
#[derive(Debug, Default)]
pub struct ToggleState {
    expanded: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl ToggleState {
    /// Create a collapsed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an already-expanded state.
    pub fn expanded() -> Self {
        let state = Self::new();
        state.expanded.store(true, Ordering::SeqCst);
        state
    }

    /// Check whether the disclosure is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded.load(Ordering::SeqCst)
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        let new = !self.expanded.fetch_xor(true, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        new
    }

    /// Set the flag directly. Marks dirty only on an actual change.
    pub fn set_expanded(&self, expanded: bool) {
        if self.expanded.swap(expanded, Ordering::SeqCst) != expanded {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Expand the disclosure.
    pub fn expand(&self) {
        self.set_expanded(true);
    }

    /// Collapse the disclosure.
    pub fn collapse(&self) {
        self.set_expanded(false);
    }

    /// Check if the state has changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for ToggleState {
    fn clone(&self) -> Self {
        Self {
            expanded: Arc::clone(&self.expanded),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
