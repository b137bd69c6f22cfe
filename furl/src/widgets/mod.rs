//! Built-in widgets.
//!
//! Widgets are builders that produce `furl_dom` Elements. Stateful
//! widgets take a state handle and register their event handlers in a
//! [`crate::HandlerRegistry`] while building; stateless ones are pure
//! element constructors.

pub mod dropdown;
pub mod menu_item;

pub use dropdown::{menu_classes, Dropdown};
pub use menu_item::{menu_items, ItemKind, ItemSpec, MenuItem};
