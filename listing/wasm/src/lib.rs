//! WASM enhancement layer for vintry listing pages.
//!
//! The listing pages arrive as static HTML from `vintry-listing`. This
//! crate attaches the interactive behavior in the browser:
//!
//! - rows marked `clickable-row` navigate to their `data-href` on click
//!   (unless the click lands on a nested link or button) and highlight on
//!   hover;
//! - elements marked `stock-badge` get their state class and tooltip from
//!   their `data-stock` / `data-min-stock` attributes.
//!
//! Every decision (selectors, classification, highlight color) comes from
//! `vintry-listing`; this crate is DOM plumbing only. Enhancement runs
//! once per call, there is no reactivity and no teardown: listeners live
//! for the page's lifetime.

use vintry_listing::behavior::{
    BADGE_SELECTOR, HREF_ATTR, INTERACTIVE_SELECTOR, MIN_STOCK_ATTR, ROW_HIGHLIGHT, ROW_SELECTOR,
    STOCK_ATTR, is_interactive_tag,
};
use vintry_listing::stock::{Quantity, StockStatus};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Counts of elements actually enhanced by one [`enhance`] pass.
///
/// Selector matches that are not HTML elements (an SVG node carrying a
/// marker class, say) are skipped and not counted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct EnhanceSummary {
    /// Rows that got click navigation and hover highlighting.
    pub rows: usize,
    /// Badges that got a state class and tooltip.
    pub badges: usize,
}

/// Enhance every listing element under `root`.
///
/// Explicit entry point instead of a page-ready hook so a test (or a
/// partial page swap) can run it against any container. Call it once per
/// container; calling it twice would attach duplicate row listeners.
#[wasm_bindgen]
pub fn enhance(root: &Element) -> Result<EnhanceSummary, JsValue> {
    let rows = enhance_clickable_rows(root)?;
    let badges = classify_stock_badges(root)?;

    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "[vintry] enhanced {rows} rows, {badges} badges"
    )));

    Ok(EnhanceSummary { rows, badges })
}

/// Enhance the whole current document. Convenience wrapper over
/// [`enhance`] for the page entry script.
#[wasm_bindgen]
pub fn enhance_document() -> Result<EnhanceSummary, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    enhance(&root)
}

/// Where a click on `clicked` inside `row` should navigate, if anywhere.
///
/// Returns `None` when the click belongs to a nested link or button
/// (native behavior proceeds). Otherwise returns the row's `data-href`
/// value; a row without the attribute yields the empty string, matching
/// what the pages have always done - templates populate the attribute
/// unconditionally.
pub fn navigation_target(row: &Element, clicked: &Element) -> Option<String> {
    let interactive = is_interactive_tag(&clicked.tag_name())
        || clicked
            .closest(INTERACTIVE_SELECTOR)
            .ok()
            .flatten()
            .is_some();
    if interactive {
        return None;
    }
    Some(row.get_attribute(HREF_ATTR).unwrap_or_default())
}

/// Attach click navigation and hover highlighting to every matching row.
/// Returns the number of rows enhanced.
fn enhance_clickable_rows(root: &Element) -> Result<usize, JsValue> {
    let rows = root.query_selector_all(ROW_SELECTOR)?;
    let mut enhanced = 0;

    for i in 0..rows.length() {
        let Some(node) = rows.item(i) else { continue };
        let Ok(row) = node.dyn_into::<HtmlElement>() else {
            continue;
        };

        attach_click_navigation(&row)?;
        attach_hover_highlight(&row)?;
        enhanced += 1;
    }

    Ok(enhanced)
}

fn attach_click_navigation(row: &HtmlElement) -> Result<(), JsValue> {
    let row_el: Element = row.clone().into();

    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(clicked) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if let Some(href) = navigation_target(&row_el, &clicked) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&href);
            }
        }
    }) as Box<dyn FnMut(_)>);

    row.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive

    Ok(())
}

fn attach_hover_highlight(row: &HtmlElement) -> Result<(), JsValue> {
    let style = row.style();
    let enter = Closure::wrap(Box::new(move || {
        let _ = style.set_property("background-color", ROW_HIGHLIGHT);
    }) as Box<dyn FnMut()>);
    row.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
    enter.forget();

    let style = row.style();
    let leave = Closure::wrap(Box::new(move || {
        let _ = style.remove_property("background-color");
    }) as Box<dyn FnMut()>);
    row.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
    leave.forget();

    Ok(())
}

/// Classify every matching badge once: parse the two quantity attributes,
/// add the state class, set the tooltip. Returns the number of badges.
///
/// Attribute changes after this pass are not observed; the pages are
/// fully re-rendered on data changes.
fn classify_stock_badges(root: &Element) -> Result<usize, JsValue> {
    let badges = root.query_selector_all(BADGE_SELECTOR)?;
    let mut classified = 0;

    for i in 0..badges.length() {
        let Some(node) = badges.item(i) else { continue };
        let Ok(badge) = node.dyn_into::<HtmlElement>() else {
            continue;
        };

        let stock = Quantity::parse(badge.get_attribute(STOCK_ATTR).as_deref());
        let min_stock = Quantity::parse(badge.get_attribute(MIN_STOCK_ATTR).as_deref());
        let status = StockStatus::classify(stock, min_stock);

        badge.class_list().add_1(status.css_class())?;
        badge.set_title(status.tooltip());
        classified += 1;
    }

    Ok(classified)
}
