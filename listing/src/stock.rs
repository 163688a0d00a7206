//! Stock badge classification.
//!
//! The listing pages mark every inventory quantity with a stock badge.
//! A badge carries two integer attributes, the current quantity and the
//! reorder threshold, and is flagged when the quantity is at or below the
//! threshold.
//!
//! Attribute values arrive as strings (they are DOM data attributes), so
//! classification goes through an explicit parse step first. [`Quantity`]
//! makes the "attribute missing or malformed" case a visible variant
//! instead of a number that silently fails every comparison.

use serde::{Deserialize, Serialize};

/// A stock attribute after parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    /// Attribute parsed to an integer.
    Valid(i64),
    /// Attribute missing, empty, or not starting with a base-10 integer.
    Invalid,
}

impl Quantity {
    /// Parse a raw attribute value.
    ///
    /// Follows the lenient base-10 semantics the listing pages have always
    /// used: leading whitespace is skipped, an optional sign is accepted,
    /// and the longest leading digit run is taken ("12 bottles" parses as
    /// 12). An empty digit run yields [`Quantity::Invalid`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use vintry_listing::stock::Quantity;
    ///
    /// assert_eq!(Quantity::parse(Some("42")), Quantity::Valid(42));
    /// assert_eq!(Quantity::parse(Some("  7 left")), Quantity::Valid(7));
    /// assert_eq!(Quantity::parse(Some("n/a")), Quantity::Invalid);
    /// assert_eq!(Quantity::parse(None), Quantity::Invalid);
    /// ```
    pub fn parse(raw: Option<&str>) -> Quantity {
        let Some(raw) = raw else {
            return Quantity::Invalid;
        };
        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let run: &str = digits
            .split_once(|c: char| !c.is_ascii_digit())
            .map(|(head, _)| head)
            .unwrap_or(digits);
        if run.is_empty() {
            return Quantity::Invalid;
        }
        match run.parse::<i64>() {
            Ok(n) => Quantity::Valid(if negative { -n } else { n }),
            Err(_) => Quantity::Invalid,
        }
    }

    /// The parsed integer, if any.
    pub fn value(self) -> Option<i64> {
        match self {
            Quantity::Valid(n) => Some(n),
            Quantity::Invalid => None,
        }
    }
}

/// Visual state of a stock badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// Quantity is at or below the reorder threshold.
    Low,
    /// Quantity is above the reorder threshold.
    Adequate,
}

impl StockStatus {
    /// Classify a badge from its two parsed attributes.
    ///
    /// The boundary is inclusive: a quantity equal to the threshold is
    /// `Low`. If either attribute is [`Quantity::Invalid`] the comparison
    /// cannot hold and the badge classifies as `Adequate` — the listing
    /// pages have always fallen through to the unflagged state on bad
    /// data, and templates rely on that.
    pub fn classify(stock: Quantity, min_stock: Quantity) -> StockStatus {
        match (stock.value(), min_stock.value()) {
            (Some(stock), Some(min)) if stock <= min => StockStatus::Low,
            _ => StockStatus::Adequate,
        }
    }

    /// CSS class added to the badge element.
    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::Low => "bg-danger",
            StockStatus::Adequate => "bg-success",
        }
    }

    /// Advisory tooltip set as the badge's `title` attribute.
    pub fn tooltip(self) -> &'static str {
        match self {
            StockStatus::Low => "Stock is at or below minimum level",
            StockStatus::Adequate => "Stock level is good",
        }
    }
}
