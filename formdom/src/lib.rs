pub mod element;
pub mod render;

pub use element::{Content, Element, find_by_class, find_element, text_content};
pub use render::to_html;
