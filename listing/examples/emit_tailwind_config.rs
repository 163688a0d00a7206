//! Regenerate `tailwind.config.js` from the typed configuration.
//!
//! Run with: `cargo run --example emit_tailwind_config`

use vintry_listing::tailwind::ScanConfig;

fn main() {
    let config = ScanConfig::default();
    config.validate().expect("default config must be valid");

    let output_path = "tailwind.config.js";
    std::fs::write(output_path, config.render_js()).expect("Failed to write config");

    println!("Config written to: {}", output_path);
}
