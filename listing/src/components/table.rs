//! Bottle listing table with clickable rows.

use leptos::prelude::*;

use super::StockBadgeView;
use crate::types::BottleRow;

/// The listing table. Every row carries the `clickable-row` marker class
/// and a `data-href` pointing at its detail page; the browser layer turns
/// those into click navigation and hover highlighting.
#[component]
pub fn BottleTable(rows: Vec<BottleRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <p class="empty-note">"No bottles recorded yet."</p>
        }
        .into_any();
    }

    view! {
        <table class="listing-table">
            <tr>
                <th>"Name"</th>
                <th>"Type"</th>
                <th>"Volume"</th>
                <th>"Price"</th>
                <th>"Stock"</th>
            </tr>
            {rows.into_iter().map(|row| {
                view! {
                    <tr class="clickable-row" data-href=row.detail_url.clone()>
                        <td>{row.name.clone()}</td>
                        <td>{row.bottle_type.clone()}</td>
                        <td>{format!("{} ml", row.volume_ml)}</td>
                        <td>{row.price.clone()}</td>
                        <td>
                            <StockBadgeView
                                stock=row.stock
                                minimum_stock=row.minimum_stock
                            />
                            " "
                            <a href=row.detail_url.clone()>"Edit"</a>
                        </td>
                    </tr>
                }
            }).collect::<Vec<_>>()}
        </table>
    }
    .into_any()
}
