mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
///
/// Only explicitly assigned IDs participate; elements without an ID are
/// skipped (their children are still searched).
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
