//! Comprehensive tests for glint-dom
//!
//! Exercises the public API end to end through the in-memory host.

use glint_dom::{
    add_class, add_event, empty, get_attr, has_attr, has_class, is_element, is_text,
    remove_class, remove_event, set_attr, window_size, AttrValue, ClientArea, Handler,
    MemoryElement, ViewportMetrics,
};

#[test]
fn test_class_round_trip_on_both_hosts() {
    for native in [false, true] {
        let mut node = MemoryElement::element("div").with_native_token_list(native);

        add_class(&mut node, "menu");
        add_class(&mut node, "open");
        assert!(has_class(&node, "menu"), "native={}", native);
        assert!(has_class(&node, "open"), "native={}", native);

        remove_class(&mut node, "menu");
        assert!(!has_class(&node, "menu"), "native={}", native);
        assert!(has_class(&node, "open"), "native={}", native);
    }
}

#[test]
fn test_class_attribute_stays_normalized() {
    let mut node = MemoryElement::element("div");

    add_class(&mut node, "a");
    add_class(&mut node, "b");
    add_class(&mut node, "c");
    remove_class(&mut node, "b");

    let value = get_attr(&node, "class");
    assert_eq!(value, "a c");
    assert!(!value.starts_with(' '));
    assert!(!value.ends_with(' '));
    assert!(!value.contains("  "), "no doubled separators: {:?}", value);
}

#[test]
fn test_substring_tokens_are_distinct() {
    let mut node = MemoryElement::element("div");
    add_class(&mut node, "foobar");

    assert!(!has_class(&node, "foo"));
    add_class(&mut node, "foo");
    assert!(has_class(&node, "foo"));
    assert!(has_class(&node, "foobar"));

    remove_class(&mut node, "foo");
    assert!(has_class(&node, "foobar"));
}

#[test]
fn test_removing_last_class_drops_attribute() {
    let mut node = MemoryElement::element("div");
    add_class(&mut node, "solo");
    assert!(has_attr(&node, "class"));

    remove_class(&mut node, "solo");
    assert!(!has_attr(&node, "class"));
}

#[test]
fn test_set_attr_value_conversions() {
    let mut node = MemoryElement::element("div");

    set_attr(&mut node, "title", "hi");
    assert_eq!(get_attr(&node, "title"), "hi");

    set_attr(&mut node, "title", String::from("there"));
    assert_eq!(get_attr(&node, "title"), "there");

    set_attr(&mut node, "title", None::<&str>);
    assert!(!has_attr(&node, "title"));

    set_attr(&mut node, "hidden", true);
    assert!(has_attr(&node, "hidden"));

    set_attr(&mut node, "hidden", false);
    assert!(!has_attr(&node, "hidden"));

    set_attr(&mut node, "data-x", AttrValue::Text("1".into()));
    assert_eq!(get_attr(&node, "data-x"), "1");
}

#[test]
fn test_set_attr_writes_once_for_same_value() {
    let mut node = MemoryElement::element("div");

    set_attr(&mut node, "x", "v");
    set_attr(&mut node, "x", "v");
    assert_eq!(node.attr_writes(), 1);
}

#[test]
fn test_node_predicates_and_empty() {
    let mut parent = MemoryElement::element("section");
    parent.push_child(MemoryElement::text("lead"));
    parent.push_child(MemoryElement::element("p"));

    assert!(is_element(&parent));
    assert!(!is_text(&parent));

    empty(&mut parent);
    assert_eq!(parent.child_count(), 0);
}

#[test]
fn test_listener_registration_and_removal() {
    let mut node = MemoryElement::element("button");
    let first = Handler::new(|| {});
    let second = Handler::new(|| {});

    add_event(&mut node, "click", &first, false);
    add_event(&mut node, "click", &second, true);
    assert_eq!(node.listener_count("click"), 2);

    // Capture flag is part of the registration identity
    remove_event(&mut node, "click", &second, false);
    assert_eq!(node.listener_count("click"), 2);

    remove_event(&mut node, "click", &second, true);
    remove_event(&mut node, "click", &first, false);
    assert_eq!(node.listener_count("click"), 0);
}

#[test]
fn test_window_size_source_preference() {
    let metrics = ViewportMetrics {
        inner_width: 1280,
        inner_height: 720,
        body: Some(ClientArea { width: 1278, height: 700 }),
        document_element: Some(ClientArea { width: 1264, height: 696 }),
    };

    let size = window_size(&metrics);
    assert_eq!(size.width, Some(1264));
    assert_eq!(size.height, Some(696));
}
