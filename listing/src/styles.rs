//! CSS for the listing pages.
//!
//! The project's utility classes come from the Tailwind build (see
//! [`crate::tailwind`]); this constant covers only what utilities can't
//! express: the badge state classes the enhancement layer toggles and the
//! table chrome around them.
//!
//! To extend or override:
//!
//! ```rust
//! use vintry_listing::styles::LISTING_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", LISTING_CSS, my_css);
//! ```

/// Complete CSS for the listing page - wine-toned light theme.
///
/// Palette values match the `wine*` colors declared in
/// [`crate::tailwind::ScanConfig::default`].
pub const LISTING_CSS: &str = r#"
:root {
    --wine: #722F37;
    --wine-light: #A4424D;
    --wine-dark: #4A1F24;
    --text-main: #1f2430;
    --text-dim: #6b7280;
    --border-subtle: rgba(31, 36, 48, 0.12);
    --container-max: 1000px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    color: var(--text-main);
    font-family: system-ui, -apple-system, sans-serif;
    line-height: 1.5;
}

.listing-container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 24px 16px;
}

.listing-header h1 {
    color: var(--wine-dark);
    margin: 0 0 4px;
}

.listing-header p {
    color: var(--text-dim);
    margin: 0 0 16px;
}

.low-stock-note {
    color: var(--wine-light);
    font-weight: 600;
}

table.listing-table {
    width: 100%;
    border-collapse: collapse;
}

.listing-table th {
    text-align: left;
    color: var(--wine-dark);
    border-bottom: 2px solid var(--wine);
    padding: 8px 12px;
}

.listing-table td {
    border-bottom: 1px solid var(--border-subtle);
    padding: 8px 12px;
}

tr.clickable-row {
    cursor: pointer;
}

.stock-badge {
    display: inline-block;
    min-width: 64px;
    text-align: center;
    padding: 2px 8px;
    border-radius: 9999px;
    color: #fff;
    font-size: 0.85em;
}

.stock-badge.bg-danger {
    background: #dc2626;
}

.stock-badge.bg-success {
    background: #059669;
}
"#;
