//! Activation dispatch.
//!
//! A single event kind exists in this crate: *activate* (a click on, or
//! Enter while focused on, an activatable element). The containing
//! scope resolves the event target against the current page tree and
//! runs the registered handler.

use furl_dom::{find_element, Element};
use log::debug;
use thiserror::Error;

use crate::handlers::HandlerRegistry;

/// Why an activation could not be delivered.
///
/// The handlers themselves cannot fail; these errors only describe
/// mis-addressed events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No element with this ID exists in the page.
    #[error("no element with id `{0}` in page")]
    UnknownTarget(String),
    /// The element exists but is not activatable.
    #[error("element `{0}` is not clickable")]
    NotActivatable(String),
    /// The element is activatable but nothing registered a handler.
    #[error("no on_activate handler registered for `{0}`")]
    NoHandler(String),
}

/// Deliver an activation event to the element with the given ID.
///
/// Looks the target up in `page`, checks it is clickable, and runs the
/// `on_activate` handler registered for it during the last build.
pub fn dispatch_activation(
    page: &Element,
    registry: &HandlerRegistry,
    target_id: &str,
) -> Result<(), DispatchError> {
    let target = find_element(page, target_id)
        .ok_or_else(|| DispatchError::UnknownTarget(target_id.to_string()))?;

    if !target.clickable {
        return Err(DispatchError::NotActivatable(target_id.to_string()));
    }

    let handler = registry
        .get(target_id, "on_activate")
        .ok_or_else(|| DispatchError::NoHandler(target_id.to_string()))?;

    debug!("activate {target_id}");
    handler();
    Ok(())
}
