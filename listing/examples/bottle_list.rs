//! Basic listing page generation example.
//!
//! Run with: `cargo run --example bottle_list`

use vintry_listing::render_listing;
use vintry_listing::types::{BottleRow, ListingSection};

fn main() {
    let section = ListingSection {
        title: "Bottles".into(),
        rows: vec![
            BottleRow {
                name: "Bordeaux 750ml green".into(),
                bottle_type: "bordeaux".into(),
                volume_ml: 750.0,
                price: "0.84".into(),
                stock: 120,
                minimum_stock: 200,
                detail_url: "/packaging/bottles/1/".into(),
            },
            BottleRow {
                name: "Champagne 750ml dark green".into(),
                bottle_type: "champagne".into(),
                volume_ml: 750.0,
                price: "1.40".into(),
                stock: 960,
                minimum_stock: 300,
                detail_url: "/packaging/bottles/2/".into(),
            },
        ],
    };

    let html = render_listing(&section);

    let output_path = "bottle_list.html";
    std::fs::write(output_path, &html).expect("Failed to write listing");

    println!("Listing written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
