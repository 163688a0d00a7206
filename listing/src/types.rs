//! Listing page data types.
//!
//! These types define the data model for a packaging listing page. They're
//! designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Default-able** - Create partial pages with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use vintry_listing::types::{BottleRow, ListingSection};
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
//! assert_eq!(section.low_stock_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::stock::{Quantity, StockStatus};

/// One bottle line in the listing table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BottleRow {
    /// Name or identifier of the bottle.
    pub name: String,
    /// Style of the bottle (bordeaux, burgundy, champagne, ...).
    pub bottle_type: String,
    /// Volume in milliliters.
    pub volume_ml: f64,
    /// Price per unit, pre-formatted for display.
    pub price: String,
    /// Current stock quantity.
    pub stock: i64,
    /// Reorder threshold.
    pub minimum_stock: i64,
    /// URL of the bottle's detail page; the row navigates here on click.
    pub detail_url: String,
}

impl BottleRow {
    /// Badge state for this row, same decision the browser layer makes.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(
            Quantity::Valid(self.stock),
            Quantity::Valid(self.minimum_stock),
        )
    }
}

/// A complete listing page: title plus the rows to render.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListingSection {
    /// Page title.
    pub title: String,
    /// Table rows.
    #[serde(default)]
    pub rows: Vec<BottleRow>,
}

impl ListingSection {
    /// Number of rows at or below their reorder threshold. Shown in the
    /// page header so low stock is visible without scanning the table.
    pub fn low_stock_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.stock_status() == StockStatus::Low)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(stock: i64, minimum_stock: i64) -> BottleRow {
        BottleRow {
            stock,
            minimum_stock,
            ..Default::default()
        }
    }

    #[test]
    fn counts_low_stock_rows() {
        let section = ListingSection {
            title: "Bottles".into(),
            rows: vec![row(3, 5), row(10, 5), row(5, 5)],
        };
        assert_eq!(section.low_stock_count(), 2);
    }

    #[test]
    fn empty_listing_has_no_low_stock() {
        assert_eq!(ListingSection::default().low_stock_count(), 0);
    }
}
