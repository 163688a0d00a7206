//! Leptos UI components for rendering listing pages.
//!
//! Each component is a Leptos `#[component]` function; together they
//! render the static HTML the browser enhancement layer
//! (`vintry-wasm`) later makes interactive.
//!
//! # Component Hierarchy
//!
//! ```text
//! ListingDocument
//! └── BottleTable
//!     └── (per row) StockBadgeView
//! ```
//!
//! Components are typically used via [`crate::render_listing`], but can
//! be composed directly for custom layouts.

mod badge;
mod document;
mod table;

pub use badge::StockBadgeView;
pub use document::ListingDocument;
pub use table::BottleTable;
