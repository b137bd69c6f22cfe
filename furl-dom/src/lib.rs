pub mod element;
pub mod render;

pub use element::{find_element, Content, Element};
pub use render::markup;
