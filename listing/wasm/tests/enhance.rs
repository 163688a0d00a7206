//! Browser-fixture tests for the enhancement layer.
//!
//! Run with: `wasm-pack test --headless --chrome listing/wasm`

#![cfg(target_arch = "wasm32")]

use vintry_wasm::{enhance, navigation_target};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount a fixture container with the given markup and enhance it.
fn mount(markup: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(markup);
    doc.body().unwrap().append_child(&root).unwrap();
    enhance(&root).unwrap();
    root
}

fn query(root: &Element, selector: &str) -> HtmlElement {
    use wasm_bindgen::JsCast;
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn low_stock_badge_is_flagged() {
    let root = mount(r#"<span class="stock-badge" data-stock="3" data-min-stock="5">3 / 5</span>"#);
    let badge = query(&root, ".stock-badge");

    assert!(badge.class_list().contains("bg-danger"));
    assert_eq!(badge.title(), "Stock is at or below minimum level");
}

#[wasm_bindgen_test]
fn adequate_stock_badge_is_unflagged() {
    let root =
        mount(r#"<span class="stock-badge" data-stock="10" data-min-stock="5">10 / 5</span>"#);
    let badge = query(&root, ".stock-badge");

    assert!(badge.class_list().contains("bg-success"));
    assert_eq!(badge.title(), "Stock level is good");
}

#[wasm_bindgen_test]
fn equal_stock_is_flagged() {
    let root = mount(r#"<span class="stock-badge" data-stock="5" data-min-stock="5">5 / 5</span>"#);
    let badge = query(&root, ".stock-badge");

    assert!(badge.class_list().contains("bg-danger"));
}

#[wasm_bindgen_test]
fn malformed_attributes_fall_through_to_success() {
    let root = mount(r#"<span class="stock-badge" data-stock="n/a">?</span>"#);
    let badge = query(&root, ".stock-badge");

    assert!(badge.class_list().contains("bg-success"));
    assert_eq!(badge.title(), "Stock level is good");
}

#[wasm_bindgen_test]
fn badges_are_classified_independently() {
    let root = mount(concat!(
        r#"<span id="a" class="stock-badge" data-stock="1" data-min-stock="5"></span>"#,
        r#"<span id="b" class="stock-badge" data-stock="9" data-min-stock="5"></span>"#,
    ));

    assert!(query(&root, "#a").class_list().contains("bg-danger"));
    assert!(query(&root, "#b").class_list().contains("bg-success"));
}

#[wasm_bindgen_test]
fn summary_counts_only_enhanced_elements() {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    // The SVG circle matches the badge selector but is not an HTML
    // element, so it is skipped and must not be counted.
    root.set_inner_html(concat!(
        r#"<table><tr class="clickable-row" data-href="/x/"><td>A</td></tr></table>"#,
        r#"<span class="stock-badge" data-stock="1" data-min-stock="5"></span>"#,
        r#"<svg><circle class="stock-badge"/></svg>"#,
    ));
    doc.body().unwrap().append_child(&root).unwrap();

    let summary = enhance(&root).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.badges, 1);
}

#[wasm_bindgen_test]
fn hover_sets_and_clears_highlight() {
    let root = mount(concat!(
        r#"<table><tr class="clickable-row" data-href="/packaging/bottles/1/">"#,
        r#"<td>Bordeaux</td></tr></table>"#,
    ));
    let row = query(&root, ".clickable-row");

    let enter = MouseEvent::new("mouseenter").unwrap();
    row.dispatch_event(&enter).unwrap();
    assert_eq!(
        row.style().get_property_value("background-color").unwrap(),
        "rgba(0, 123, 255, 0.1)"
    );

    let leave = MouseEvent::new("mouseleave").unwrap();
    row.dispatch_event(&leave).unwrap();
    assert_eq!(
        row.style().get_property_value("background-color").unwrap(),
        ""
    );
}

#[wasm_bindgen_test]
fn click_on_row_body_targets_data_href() {
    let root = mount(concat!(
        r#"<table><tr class="clickable-row" data-href="/packaging/bottles/1/">"#,
        r#"<td>Bordeaux</td><td><a href="/edit/">Edit</a></td></tr></table>"#,
    ));
    let row = query(&root, ".clickable-row");
    let cell = query(&root, "td");

    assert_eq!(
        navigation_target(&row, &cell),
        Some("/packaging/bottles/1/".to_string())
    );
}

#[wasm_bindgen_test]
fn click_on_nested_link_is_left_alone() {
    let root = mount(concat!(
        r#"<table><tr class="clickable-row" data-href="/packaging/bottles/1/">"#,
        r#"<td><a href="/edit/"><span>Edit</span></a></td>"#,
        r#"<td><button><b>Delete</b></button></td></tr></table>"#,
    ));
    let row = query(&root, ".clickable-row");

    // The link itself, a descendant of the link, and a descendant of the
    // button all suppress row navigation.
    assert_eq!(navigation_target(&row, &query(&root, "a")), None);
    assert_eq!(navigation_target(&row, &query(&root, "a span")), None);
    assert_eq!(navigation_target(&row, &query(&root, "button b")), None);
}

#[wasm_bindgen_test]
fn row_without_target_yields_empty_location() {
    let root = mount(r#"<table><tr class="clickable-row"><td>Stray</td></tr></table>"#);
    let row = query(&root, ".clickable-row");

    assert_eq!(navigation_target(&row, &query(&root, "td")), Some(String::new()));
}
