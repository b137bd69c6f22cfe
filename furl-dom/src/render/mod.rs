//! Markup serialization for element trees.
//!
//! Output is deterministic: attributes are emitted in `BTreeMap` order,
//! classes in insertion order. Two equal trees serialize to identical
//! bytes.

use crate::element::{Content, Element};

/// Serialize an element tree to a markup string.
pub fn markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if let Some(id) = &el.id {
        out.push_str(" id=\"");
        escape_into(id, out);
        out.push('"');
    }

    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&el.class_list(), out);
        out.push('"');
    }

    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }

    out.push('>');

    match &el.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, out),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
