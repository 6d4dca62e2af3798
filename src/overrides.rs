//! Price overrides
//!
//! User-entered cost/price values keyed by product id. Each field is stored
//! independently, so recording a cost never disturbs a recorded price.

use std::fmt;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An editable per-unit price field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    /// What the salon pays per unit
    Cost,

    /// Recommended retail price per unit
    Price,
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Cost => f.write_str("cost"),
            PriceField::Price => f.write_str("price"),
        }
    }
}

/// Override for a single product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceOverride {
    /// Overridden cost, if the user edited it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,

    /// Overridden price, if the user edited it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl PriceOverride {
    /// Value recorded for `field`, if any.
    pub fn get(&self, field: PriceField) -> Option<Decimal> {
        match field {
            PriceField::Cost => self.cost,
            PriceField::Price => self.price,
        }
    }

    /// Record `value` for `field`, leaving the other field untouched.
    pub fn set(&mut self, field: PriceField, value: Decimal) {
        match field {
            PriceField::Cost => self.cost = Some(value),
            PriceField::Price => self.price = Some(value),
        }
    }
}

/// All overrides for a session.
///
/// Entries are never removed; a later edit of the same field overwrites the
/// earlier value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceOverrides {
    entries: FxHashMap<String, PriceOverride>,
}

impl PriceOverrides {
    /// Create an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override recorded for a product, if any.
    pub fn get(&self, product_id: &str) -> Option<&PriceOverride> {
        self.entries.get(product_id)
    }

    /// Record a single field for a product.
    pub fn record(&mut self, product_id: &str, field: PriceField, value: Decimal) {
        self.entries
            .entry(product_id.to_string())
            .or_default()
            .set(field, value);
    }

    /// Number of products with an override.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no override has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_recorded_independently() {
        let mut overrides = PriceOverrides::new();

        overrides.record("p", PriceField::Cost, Decimal::new(15, 0));
        overrides.record("p", PriceField::Price, Decimal::new(30, 0));

        assert_eq!(
            overrides.get("p"),
            Some(&PriceOverride {
                cost: Some(Decimal::new(15, 0)),
                price: Some(Decimal::new(30, 0)),
            })
        );
    }

    #[test]
    fn later_edit_overwrites_only_its_field() {
        let mut overrides = PriceOverrides::new();

        overrides.record("p", PriceField::Cost, Decimal::new(15, 0));
        overrides.record("p", PriceField::Price, Decimal::new(30, 0));
        overrides.record("p", PriceField::Cost, Decimal::new(12, 0));

        let entry = overrides.get("p").copied().unwrap_or_default();

        assert_eq!(entry.cost, Some(Decimal::new(12, 0)));
        assert_eq!(entry.price, Some(Decimal::new(30, 0)));
    }

    #[test]
    fn products_are_independent() {
        let mut overrides = PriceOverrides::new();

        overrides.record("a", PriceField::Cost, Decimal::ONE);
        overrides.record("b", PriceField::Price, Decimal::new(2, 0));

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("a").and_then(|o| o.price), None);
        assert_eq!(overrides.get("b").and_then(|o| o.cost), None);
    }

    #[test]
    fn field_names_display() {
        assert_eq!(PriceField::Cost.to_string(), "cost");
        assert_eq!(PriceField::Price.to_string(), "price");
    }
}
