//! # vintry-listing
//!
//! Leptos SSR renderer and behavior core for the vintry packaging listing
//! pages.
//!
//! This crate renders the bottle-inventory listing as static HTML and owns
//! every behavior decision the browser enhancement layer (`vintry-wasm`)
//! applies on top: stock badge classification, the row-click policy, and
//! the selectors/attributes both sides agree on. Keeping the decisions
//! here means they run and test on the host; the wasm crate is DOM
//! plumbing only.
//!
//! ## Quick Start
//!
//! ```rust
//! use vintry_listing::{render_listing, types::{BottleRow, ListingSection}};
//!
//! let section = ListingSection {
//!     title: "Bottles".into(),
//!     rows: vec![BottleRow {
//!         name: "Bordeaux 750ml".into(),
//!         stock: 12,
//!         minimum_stock: 24,
//!         detail_url: "/packaging/bottles/1/".into(),
//!         ..Default::default()
//!     }],
//! };
//!
//! let html = render_listing(&section);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data structures for listing content
//! - [`stock`] - Quantity parsing and badge classification
//! - [`behavior`] - Selectors, attribute names, highlight color
//! - [`tailwind`] - Build-scan configuration for the CSS generator
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no reactive runtime or
//! hydration is needed, pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod behavior;
pub mod components;
pub mod stock;
pub mod styles;
pub mod tailwind;
pub mod types;

use components::ListingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::ListingSection;

/// Render a complete listing page from section data.
///
/// This is the main entry point. It takes a [`ListingSection`] and
/// produces a complete HTML document as a `String`, including
/// `<!DOCTYPE html>`. Rows come out carrying the `clickable-row` /
/// `stock-badge` markers and data attributes that `vintry-wasm` queries
/// in the browser.
pub fn render_listing(section: &ListingSection) -> String {
    let doc = view! {
        <ListingDocument section=section.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
