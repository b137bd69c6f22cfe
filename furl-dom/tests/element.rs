use furl_dom::{find_element, markup, Content, Element};

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_basics() {
    let el = Element::container()
        .id("root")
        .class("a")
        .class("b")
        .attr("data-x", "1");

    assert_eq!(el.tag, "div");
    assert_eq!(el.id.as_deref(), Some("root"));
    assert_eq!(el.class_list(), "a b");
    assert!(el.has_class("a"));
    assert!(!el.has_class("c"));
    assert_eq!(el.get_attr("data-x"), Some("1"));
    assert_eq!(el.get_attr("data-y"), None);
}

#[test]
fn test_button_is_interactive() {
    let el = Element::button();
    assert!(el.focusable);
    assert!(el.clickable);
    assert_eq!(el.get_attr("type"), Some("button"));
}

#[test]
fn test_attr_overwrite_last_wins() {
    let el = Element::item().attr("data-id", "1").attr("data-id", "2");
    assert_eq!(el.get_attr("data-id"), Some("2"));
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::container()
        .text_content("gone")
        .child(Element::text("kept"));

    let children = el.content.as_children().expect("children");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].content.as_text(), Some("kept"));
}

#[test]
fn test_children_extend_existing() {
    let el = Element::menu()
        .child(Element::item())
        .children(vec![Element::item(), Element::item()]);

    assert_eq!(el.content.as_children().map(|c| c.len()), Some(3));
}

// ============================================================================
// find_element Tests
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::container().id("root").child(
        Element::menu().child(Element::item().id("target")),
    );

    let found = find_element(&root, "target").expect("should find nested element");
    assert_eq!(found.tag, "li");
}

#[test]
fn test_find_element_missing() {
    let root = Element::container().id("root");
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_find_element_skips_idless_but_searches_their_children() {
    // The intermediate menu has no id; its child is still reachable
    let root = Element::container().child(Element::menu().child(Element::link().id("deep")));
    assert!(find_element(&root, "deep").is_some());
}

// ============================================================================
// Markup Tests
// ============================================================================

#[test]
fn test_markup_shape() {
    let el = Element::container()
        .id("root")
        .class("a")
        .class("b")
        .attr("data-x", "1")
        .child(Element::text("hi"));

    assert_eq!(
        markup(&el),
        "<div id=\"root\" class=\"a b\" data-x=\"1\"><span>hi</span></div>"
    );
}

#[test]
fn test_markup_text_node() {
    let el = Element::text("Page 2");
    assert_eq!(markup(&el), "<span>Page 2</span>");
}

#[test]
fn test_markup_deterministic() {
    let build = || {
        Element::item()
            .attr("b", "2")
            .attr("a", "1")
            .child(Element::link().attr("href", "/x").text_content("x"))
    };
    assert_eq!(build(), build());
    assert_eq!(markup(&build()), markup(&build()));
    // Attributes come out sorted regardless of insertion order
    assert!(markup(&build()).starts_with("<li a=\"1\" b=\"2\">"));
}

#[test]
fn test_markup_escaping() {
    let el = Element::container()
        .attr("title", "a \"b\" & c")
        .text_content("1 < 2");
    assert_eq!(
        markup(&el),
        "<div title=\"a &quot;b&quot; &amp; c\">1 &lt; 2</div>"
    );
}

#[test]
fn test_empty_container_markup() {
    assert_eq!(markup(&Element::menu()), "<ul></ul>");
}
