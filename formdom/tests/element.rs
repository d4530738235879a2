use formdom::{Content, Element, find_by_class, find_element, text_content};

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_appends_in_order() {
    let el = Element::div().class("form-group").class("has-error");
    assert_eq!(el.class_name(), "form-group has-error");
}

#[test]
fn test_class_splits_whitespace_and_skips_duplicates() {
    let el = Element::input().class("wide  form-control").class("form-control");
    assert_eq!(el.classes, vec!["wide", "form-control"]);
}

#[test]
fn test_class_ignores_empty() {
    let el = Element::div().class("").class("   ");
    assert!(el.classes.is_empty());
    assert_eq!(el.class_name(), "");
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attr_overwrites_in_place() {
    let el = Element::input()
        .attr("type", "text")
        .attr("value", "a")
        .attr("type", "email");

    assert_eq!(
        el.attrs,
        vec![
            ("type".to_string(), "email".to_string()),
            ("value".to_string(), "a".to_string()),
        ]
    );
    assert_eq!(el.get_attr("type"), Some("email"));
    assert_eq!(el.get_attr("missing"), None);
}

#[test]
fn test_attr_opt_skips_none() {
    let el = Element::input()
        .attr_opt("placeholder", None::<String>)
        .attr_opt("name", Some("email"));
    assert_eq!(el.get_attr("placeholder"), None);
    assert_eq!(el.get_attr("name"), Some("email"));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_child_replaces_text() {
    let el = Element::div().text("hello").child(Element::new("span"));
    assert_eq!(el.child_elements().len(), 1);
}

#[test]
fn test_text_replaces_children() {
    let el = Element::div().child(Element::new("span")).text("hello");
    assert_eq!(el.content, Content::Text("hello".into()));
    assert!(el.child_elements().is_empty());
}

#[test]
fn test_children_extend() {
    let el = Element::div()
        .child(Element::new("span").id("a"))
        .children(vec![Element::new("span").id("b"), Element::new("span").id("c")]);
    let ids: Vec<_> = el
        .child_elements()
        .iter()
        .filter_map(|c| c.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// ============================================================================
// Queries
// ============================================================================

fn sample_tree() -> Element {
    Element::div()
        .id("root")
        .class("form-group")
        .child(Element::label().class("control-label").text("Email"))
        .child(
            Element::div()
                .class("input-group")
                .child(Element::input().id("email").class("form-control"))
                .child(Element::div().class("input-group-addon").text("@")),
        )
        .child(Element::div().class("help-block hidden").text("Required"))
}

#[test]
fn test_find_element_nested() {
    let root = sample_tree();
    let found = find_element(&root, "email");
    assert!(found.is_some());
    assert_eq!(found.map(|e| e.tag.as_str()), Some("input"));
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_find_by_class_document_order() {
    let root = sample_tree();
    let found = find_by_class(&root, "input-group-addon");
    assert_eq!(found.len(), 1);
    assert_eq!(text_content(found[0]), "@");

    let hidden = find_by_class(&root, "hidden");
    assert_eq!(hidden.len(), 1);
    assert!(hidden[0].has_class("help-block"));
}

#[test]
fn test_text_content_concatenates() {
    let root = sample_tree();
    assert_eq!(text_content(&root), "Email@Required");
}
