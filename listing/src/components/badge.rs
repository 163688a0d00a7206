//! Stock badge component.

use leptos::prelude::*;

use crate::behavior::{MIN_STOCK_ATTR, STOCK_ATTR};
use crate::stock::{Quantity, StockStatus};

/// A stock badge: quantity over threshold, flagged when low.
///
/// The badge is rendered already classified so the page is correct
/// before any script runs; the data attributes let the browser layer
/// re-derive the same state from the DOM alone.
#[component]
pub fn StockBadgeView(stock: i64, minimum_stock: i64) -> impl IntoView {
    let status = StockStatus::classify(Quantity::Valid(stock), Quantity::Valid(minimum_stock));

    view! {
        <span
            class=format!("stock-badge {}", status.css_class())
            title=status.tooltip()
            data-stock=stock.to_string()
            data-min-stock=minimum_stock.to_string()
        >
            {format!("{stock} / {minimum_stock}")}
        </span>
    }
}
