#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Text payload, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Child elements, if this is a container node.
    pub fn as_children(&self) -> Option<&[super::Element]> {
        match self {
            Self::Children(c) => Some(c),
            _ => None,
        }
    }
}
