//! Dropdown widget - a disclosure menu with an activator button.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use furl_dom::Element;
use log::debug;

use crate::handlers::{ChangeHandler, HandlerRegistry};
use crate::state::ToggleState;

/// Root container class.
pub const DROPDOWN_CLASS: &str = "dropdown";
/// Activator button class.
pub const BUTTON_CLASS: &str = "dropdown-button";
/// Menu base class, present whenever the menu is.
pub const MENU_CLASS: &str = "dropdown-menu";
/// Menu modifier class, present iff expanded.
pub const OPEN_CLASS: &str = "dropdown-open";

/// Derive the menu class list from the expanded flag.
///
/// Recomputed on every build; never stored alongside the flag it is
/// derived from.
pub fn menu_classes(expanded: bool) -> Vec<&'static str> {
    let mut classes = vec![MENU_CLASS];
    if expanded {
        classes.push(OPEN_CLASS);
    }
    classes
}

/// Unique identifier for a Dropdown widget instance.
///
/// Each allocation yields a fresh ID, so two dropdowns built into the
/// same page never share activator or menu identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dropdown-{}", self.0)
    }
}

/// Typestate marker: dropdown needs a state reference.
pub struct NeedsState;

/// Typestate marker: dropdown has a state reference.
pub struct HasState<'a>(&'a ToggleState);

/// A dropdown widget builder.
///
/// Shows an activator button that toggles the visibility of a menu of
/// externally supplied items. The menu element is only part of the
/// built output while the state is expanded; collapsed dropdowns emit
/// the activator alone.
///
/// # Example
///
/// ```
/// use furl::{HandlerRegistry, ToggleState};
/// use furl::widgets::Dropdown;
///
/// let registry = HandlerRegistry::new();
/// let open = ToggleState::new();
/// let page = Dropdown::new()
///     .state(&open)
///     .id("more")
///     .label("More items")
///     .build(&registry);
/// assert_eq!(page.id.as_deref(), Some("more"));
/// ```
#[derive(Clone)]
pub struct Dropdown<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    label: String,
    children: Vec<Element>,
    on_change: Option<ChangeHandler>,
}

impl Default for Dropdown<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown<NeedsState> {
    /// Create a new dropdown builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            label: String::new(),
            children: Vec::new(),
            on_change: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &ToggleState) -> Dropdown<HasState<'_>> {
        Dropdown {
            state_marker: HasState(s),
            id: self.id,
            label: self.label,
            children: self.children,
            on_change: self.on_change,
        }
    }
}

impl<S> Dropdown<S> {
    /// Set the dropdown id.
    ///
    /// Without one, a fresh [`DropdownId`] is allocated per build.
    /// Containing scopes that rebuild pages and address the activator
    /// across builds should supply a stable id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the activator label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the menu items (content when expanded).
    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    /// Add a single menu item.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the state-change notification callback.
    ///
    /// Invoked once per toggle, after the commit, with the new value.
    /// Building alone never invokes it. Remote synchronization (or any
    /// other transport) is the callback's business, not this widget's.
    pub fn on_change(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }
}

impl<'a> Dropdown<HasState<'a>> {
    /// Build the dropdown element, registering the activator's
    /// `on_activate` handler in `registry`.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let state = self.state_marker.0;
        let expanded = state.is_expanded();
        let id = self
            .id
            .unwrap_or_else(|| DropdownId::new().to_string());
        let button_id = format!("{id}-button");

        let button = Element::button()
            .id(&button_id)
            .class(BUTTON_CLASS)
            .attr("aria-haspopup", "true")
            .text_content(self.label.as_str());

        // Register toggle handler
        let state_clone = state.clone();
        let on_change = self.on_change.clone();
        let handler_id = id.clone();
        registry.register(
            &button_id,
            "on_activate",
            Arc::new(move || {
                let expanded = state_clone.toggle();
                debug!("dropdown {handler_id} expanded={expanded}");
                if let Some(changed) = &on_change {
                    changed(expanded);
                }
            }),
        );

        let mut container = Element::container()
            .id(&id)
            .class(DROPDOWN_CLASS)
            .child(button);

        // Menu exists in the output only while expanded
        if expanded {
            let menu = Element::menu()
                .classes(menu_classes(true))
                .attr("role", "menu")
                .attr("aria-labelledby", &button_id)
                .children(self.children);

            container = container.child(menu);
        }

        container
    }
}
