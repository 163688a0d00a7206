//! Shared constants for the browser enhancement layer.
//!
//! The SSR components and the wasm crate agree on these selectors and
//! attribute names: the components render them, the wasm crate queries
//! them. Keeping them in one place is what keeps the two sides honest.

/// Selector for rows that navigate on click.
pub const ROW_SELECTOR: &str = ".clickable-row";

/// Selector for stock badges.
pub const BADGE_SELECTOR: &str = ".stock-badge";

/// Row attribute holding the navigation target URL.
pub const HREF_ATTR: &str = "data-href";

/// Badge attribute holding the current quantity.
pub const STOCK_ATTR: &str = "data-stock";

/// Badge attribute holding the reorder threshold.
pub const MIN_STOCK_ATTR: &str = "data-min-stock";

/// Elements a row click must be left to. A click on a link or button
/// inside a row (or on any of their descendants) belongs to that element,
/// not to the row navigation.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

/// Inline background applied to a row on mouse-enter and removed on
/// mouse-leave. Translucent so stylesheet striping still shows through.
pub const ROW_HIGHLIGHT: &str = "rgba(0, 123, 255, 0.1)";

/// True if a tag name counts as interactive for row-click purposes.
///
/// This is the same predicate `INTERACTIVE_SELECTOR` expresses for
/// `Element::closest`; it exists for callers that only have a tag name.
pub fn is_interactive_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_tags_match_selector() {
        assert!(is_interactive_tag("a"));
        assert!(is_interactive_tag("A"));
        assert!(is_interactive_tag("BUTTON"));
        assert!(!is_interactive_tag("td"));
        assert!(!is_interactive_tag("span"));
        assert!(!is_interactive_tag("abbr"));
    }
}
