//! HTML serialization for element trees.

use crate::element::{Content, Element};

/// Elements that never carry content or a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// Serialize an element tree to HTML.
///
/// Output is deterministic: `id` first, then `class` (omitted when empty),
/// then the remaining attributes in insertion order.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }
    if !el.classes.is_empty() {
        write_attr(out, "class", &el.class_name());
    }
    for (name, value) in &el.attrs {
        write_attr(out, name, value);
    }
    out.push('>');

    if is_void(&el.tag) {
        if !el.content.is_none() {
            log::warn!("Dropping content of void element <{}>", el.tag);
        }
        return;
    }

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
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

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
