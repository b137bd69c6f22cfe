use std::collections::BTreeMap;

use log::debug;

use super::Content;

/// A retained markup element.
///
/// Elements form a tree: a node carries a tag, an optional explicit ID,
/// an ordered class list, a deterministic attribute map, interaction
/// flags, and either text or child elements as content.
///
/// Attributes live in a `BTreeMap` so that two elements built from the
/// same inputs compare equal and serialize to identical markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: Option<String>,
    pub tag: String,

    // Content
    pub content: Content,

    // Visual
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
}

impl Element {
    /// Create an element with an arbitrary tag.
    pub fn node(tag: impl Into<String>) -> Self {
        Self {
            id: None,
            tag: tag.into(),
            content: Content::None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            focusable: false,
            clickable: false,
        }
    }

    /// Generic block container (`div`).
    pub fn container() -> Self {
        Self::node("div")
    }

    /// Navigation landmark (`nav`).
    pub fn nav() -> Self {
        Self::node("nav")
    }

    /// Activatable button (`button`), focusable and clickable.
    pub fn button() -> Self {
        let mut el = Self::node("button");
        el.focusable = true;
        el.clickable = true;
        el.attrs.insert("type".into(), "button".into());
        el
    }

    /// Item list container (`ul`).
    pub fn menu() -> Self {
        Self::node("ul")
    }

    /// List entry (`li`).
    pub fn item() -> Self {
        Self::node("li")
    }

    /// Anchor (`a`).
    pub fn link() -> Self {
        let mut el = Self::node("a");
        el.clickable = true;
        el
    }

    /// Inline text node (`span`).
    pub fn text(content: impl Into<String>) -> Self {
        let mut el = Self::node("span");
        el.content = Content::Text(content.into());
        el
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Space-joined class list, as it appears in markup.
    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if let Some(old) = self.attrs.insert(key.clone(), value.into()) {
            debug!("attribute {key:?} overwritten (was {old:?})");
        }
        self
    }

    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in attrs {
            self = self.attr(key, value);
        }
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Content
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(_) => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }
}
