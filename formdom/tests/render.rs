use formdom::{Element, to_html};

#[test]
fn test_render_empty_div() {
    assert_eq!(to_html(&Element::div()), "<div></div>");
}

#[test]
fn test_render_attribute_order() {
    let el = Element::input()
        .attr("type", "text")
        .class("form-control")
        .id("name");
    assert_eq!(
        to_html(&el),
        r#"<input id="name" class="form-control" type="text">"#
    );
}

#[test]
fn test_render_void_element_drops_content() {
    let el = Element::input().text("ignored");
    assert_eq!(to_html(&el), "<input>");
}

#[test]
fn test_render_nested() {
    let el = Element::div()
        .class("form-group")
        .child(Element::label().attr("for", "x").text("X"))
        .child(Element::input().id("x"));
    assert_eq!(
        to_html(&el),
        r#"<div class="form-group"><label for="x">X</label><input id="x"></div>"#
    );
}

#[test]
fn test_render_escapes_text() {
    let el = Element::div().text("a < b & c > d");
    assert_eq!(to_html(&el), "<div>a &lt; b &amp; c &gt; d</div>");
}

#[test]
fn test_render_escapes_attribute_quotes() {
    let el = Element::input().attr("value", r#"say "hi" & <bye>"#);
    assert_eq!(
        to_html(&el),
        r#"<input value="say &quot;hi&quot; &amp; &lt;bye&gt;">"#
    );
}
