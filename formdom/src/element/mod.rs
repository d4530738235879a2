mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
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

/// Collect every element carrying `class`, in document order.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_class(root, class, &mut found);
    found
}

fn collect_by_class<'a>(el: &'a Element, class: &str, out: &mut Vec<&'a Element>) {
    if el.has_class(class) {
        out.push(el);
    }
    if let Content::Children(children) = &el.content {
        for child in children {
            collect_by_class(child, class, out);
        }
    }
}

/// Concatenated text of the element and all its descendants.
pub fn text_content(el: &Element) -> String {
    match &el.content {
        Content::None => String::new(),
        Content::Text(s) => s.clone(),
        Content::Children(children) => children.iter().map(text_content).collect(),
    }
}
