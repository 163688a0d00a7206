//! Root document component - the complete listing page.

use leptos::prelude::*;

use super::BottleTable;
use crate::styles::LISTING_CSS;
use crate::types::ListingSection;

/// The complete HTML document for one listing page.
#[component]
pub fn ListingDocument(section: ListingSection) -> impl IntoView {
    let low = section.low_stock_count();
    let total = section.rows.len();

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <title>{format!("Vintry - {}", section.title)}</title>
                <style>{LISTING_CSS}</style>
            </head>
            <body>
                <div class="listing-container">
                    <header class="listing-header">
                        <h1>{section.title.clone()}</h1>
                        <p>
                            {total} " items"
                            {if low > 0 {
                                view! {
                                    <span class="low-stock-note">
                                        " - " {low} " at or below minimum stock"
                                    </span>
                                }.into_any()
                            } else {
                                view! { "" }.into_any()
                            }}
                        </p>
                    </header>
                    <BottleTable rows=section.rows />
                </div>
            </body>
        </html>
    }
}
