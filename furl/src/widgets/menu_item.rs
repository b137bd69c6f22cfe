//! Menu item renderers.
//!
//! A menu item is a pure mapping from a descriptor to one list entry:
//! no state, no handlers, identical output for identical input. The
//! entry wrapper (`li`) is shared; the inner element is selected by an
//! explicit [`ItemKind`] tag, so variants stay independently testable
//! and new kinds slot in without touching existing ones.

use furl_dom::Element;
use serde::{Deserialize, Serialize};

/// Class applied to non-interactive hint items.
pub const HINT_CLASS: &str = "dropdown-hint";

/// Which inner element a menu item renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// An anchor. A missing destination yields a link with no `href`
    /// attribute; that is the caller's lookout, not validated here.
    Link { href: Option<String> },
    /// A checkable entry.
    Checkbox { checked: bool },
    /// Non-interactive explanatory text.
    Hint,
}

/// A menu item descriptor.
///
/// Pass-through attributes are forwarded unmodified to the produced
/// list entry, so callers can attach arbitrary data or styling hooks
/// without this renderer knowing about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    kind: ItemKind,
    label: String,
    attrs: Vec<(String, String)>,
}

impl MenuItem {
    /// Create an item with an explicit kind.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            label: String::new(),
            attrs: Vec::new(),
        }
    }

    /// Create a link item.
    pub fn link(href: impl Into<String>) -> Self {
        Self::new(ItemKind::Link {
            href: Some(href.into()),
        })
    }

    /// Create a checkbox item.
    pub fn checkbox(checked: bool) -> Self {
        Self::new(ItemKind::Checkbox { checked })
    }

    /// Create a hint item.
    pub fn hint() -> Self {
        Self::new(ItemKind::Hint)
    }

    /// Set the visible content.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a pass-through attribute for the list entry.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Render the list entry.
    pub fn element(&self) -> Element {
        let entry = Element::item().attrs(self.attrs.iter().cloned());

        match &self.kind {
            ItemKind::Link { href } => {
                let mut link = Element::link().text_content(self.label.as_str());
                if let Some(href) = href {
                    link = link.attr("href", href);
                }
                entry.child(link)
            }
            ItemKind::Checkbox { checked } => {
                let mut input = Element::node("input")
                    .attr("type", "checkbox")
                    .focusable(true)
                    .clickable(true);
                if *checked {
                    input = input.attr("checked", "checked");
                }
                entry.child(input).child(Element::text(self.label.as_str()))
            }
            ItemKind::Hint => {
                entry.child(Element::text(self.label.as_str()).class(HINT_CLASS))
            }
        }
    }
}

/// A menu item as data, e.g. decoded from a server payload.
///
/// Externally tagged on `kind`:
///
/// ```json
/// { "kind": "link", "href": "/page2", "label": "Page 2" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemSpec {
    Link {
        #[serde(default)]
        href: Option<String>,
        label: String,
    },
    Checkbox {
        label: String,
        #[serde(default)]
        checked: bool,
    },
    Hint { label: String },
}

impl ItemSpec {
    /// Convert into a renderable item.
    pub fn item(&self) -> MenuItem {
        match self {
            Self::Link { href, label } => {
                MenuItem::new(ItemKind::Link { href: href.clone() }).label(label)
            }
            Self::Checkbox { label, checked } => MenuItem::checkbox(*checked).label(label),
            Self::Hint { label } => MenuItem::hint().label(label),
        }
    }
}

/// Render a slice of item specs into list entries.
pub fn menu_items(specs: &[ItemSpec]) -> Vec<Element> {
    specs.iter().map(|spec| spec.item().element()).collect()
}
