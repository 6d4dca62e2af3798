//! Session state and selection resolver
//!
//! [`SessionState`] holds everything the form shows. [`Resolver`] applies
//! user actions to it: picking a brand or product refills cost and price,
//! and editing cost or price records an override for the selected product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    catalog::{Catalog, Product},
    input::sanitize_amount,
    overrides::{PriceField, PriceOverrides},
    promotion::{PromotionInputs, PromotionResult},
};

/// Promotion length for a fresh session.
pub const DEFAULT_DAYS: i64 = 7;

/// Stylist count for a fresh session.
pub const DEFAULT_STYLISTS: i64 = 3;

/// Units per stylist per day for a fresh session.
pub const DEFAULT_UNITS_PER_STYLIST_PER_DAY: i64 = 2;

/// An editable promotion volume field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionField {
    /// Promotion length in days
    Days,

    /// Number of stylists selling
    Stylists,

    /// Units each stylist sells per day
    UnitsPerStylistPerDay,
}

/// Cost and price to display for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrices {
    /// Effective cost
    pub cost: Decimal,

    /// Effective price
    pub price: Decimal,
}

/// Everything the form holds for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Selected brand
    pub brand: Option<String>,

    /// Selected product id
    pub product_id: Option<String>,

    /// Per-product cost/price overrides
    #[serde(default)]
    pub overrides: PriceOverrides,

    /// Live cost per unit
    pub cost: Decimal,

    /// Live price per unit
    pub price: Decimal,

    /// Promotion length in days
    pub days: Decimal,

    /// Number of stylists selling
    pub stylists: Decimal,

    /// Units each stylist sells per day
    pub units_per_stylist_per_day: Decimal,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            brand: None,
            product_id: None,
            overrides: PriceOverrides::new(),
            cost: Decimal::ZERO,
            price: Decimal::ZERO,
            days: Decimal::from(DEFAULT_DAYS),
            stylists: Decimal::from(DEFAULT_STYLISTS),
            units_per_stylist_per_day: Decimal::from(DEFAULT_UNITS_PER_STYLIST_PER_DAY),
        }
    }
}

impl SessionState {
    /// Current calculator inputs.
    pub fn promotion_inputs(&self) -> PromotionInputs {
        PromotionInputs {
            cost: self.cost,
            price: self.price,
            days: self.days,
            stylists: self.stylists,
            units_per_stylist_per_day: self.units_per_stylist_per_day,
        }
    }

    /// Compute the outcome for the live values.
    pub fn compute(&self) -> PromotionResult {
        self.promotion_inputs().compute()
    }

    fn set_prices(&mut self, prices: ResolvedPrices) {
        self.cost = prices.cost;
        self.price = prices.price;
    }
}

/// Resolve the cost and price to show for a product.
///
/// Each field independently prefers the user's override, then the catalog
/// default, then zero.
pub fn resolve_defaults(product: &Product, overrides: &PriceOverrides) -> ResolvedPrices {
    let entry = overrides.get(&product.id);
    let resolve = |field: PriceField, default: Option<Decimal>| {
        entry
            .and_then(|o| o.get(field))
            .or(default)
            .unwrap_or(Decimal::ZERO)
    };

    ResolvedPrices {
        cost: resolve(PriceField::Cost, product.default_cost),
        price: resolve(PriceField::Price, product.default_price),
    }
}

/// Applies selection changes and edits to a [`SessionState`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
    catalog_locked: bool,
}

impl<'c> Resolver<'c> {
    /// Resolver restricted to the products in `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            catalog_locked: true,
        }
    }

    /// Resolver that accepts free-text product ids.
    ///
    /// Ids matching a catalog product still pick up its defaults.
    pub fn unlocked(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            catalog_locked: false,
        }
    }

    /// Whether product selection is restricted to the catalog.
    pub fn catalog_locked(&self) -> bool {
        self.catalog_locked
    }

    /// A fresh session: first brand, its first product, default volumes.
    pub fn initial_state(&self) -> SessionState {
        let mut state = SessionState::default();

        if let Some(brand) = self.catalog.brands().next() {
            self.on_brand_changed(&mut state, brand);
        }

        state
    }

    /// Switch brand, jumping to its first product.
    ///
    /// The previous product selection is discarded. For a brand with no
    /// products the selection is cleared and the live prices are kept. A
    /// brand the catalog does not know falls back to the first brand.
    pub fn on_brand_changed(&self, state: &mut SessionState, brand: &str) {
        if !self.catalog.contains_brand(brand) {
            warn!(brand, "unknown brand, using first brand");

            self.fall_back_to_first_brand(state);

            return;
        }

        state.brand = Some(brand.to_string());

        match self.catalog.first_product(brand) {
            Some(product) => {
                debug!(brand, product_id = %product.id, "brand changed");

                state.product_id = Some(product.id.clone());
                state.set_prices(resolve_defaults(product, &state.overrides));
            }
            None => {
                debug!(brand, "brand changed to a brand without products");

                state.product_id = None;
            }
        }
    }

    /// Select a product and refill cost and price.
    ///
    /// In locked mode an id that is not part of the selected brand falls
    /// back to the brand's first product.
    pub fn on_product_changed(&self, state: &mut SessionState, product_id: &str) {
        if self.catalog_locked {
            self.select_catalog_product(state, product_id);
        } else {
            self.select_free_text_product(state, product_id);
        }
    }

    /// Apply an edit to the cost or price field and return the parsed value.
    ///
    /// The value is recorded as an override for the selected product; with
    /// no product selected only the live value changes.
    pub fn on_field_edited(
        &self,
        state: &mut SessionState,
        field: PriceField,
        raw: &str,
    ) -> Decimal {
        let value = sanitize_amount(raw);

        match field {
            PriceField::Cost => state.cost = value,
            PriceField::Price => state.price = value,
        }

        if let Some(product_id) = state.product_id.as_deref() {
            debug!(product_id, %field, %value, "override recorded");

            state.overrides.record(product_id, field, value);
        }

        value
    }

    /// Apply an edit to a promotion volume field and return the parsed value.
    pub fn on_promotion_field_edited(
        &self,
        state: &mut SessionState,
        field: PromotionField,
        raw: &str,
    ) -> Decimal {
        let value = sanitize_amount(raw);

        match field {
            PromotionField::Days => state.days = value,
            PromotionField::Stylists => state.stylists = value,
            PromotionField::UnitsPerStylistPerDay => state.units_per_stylist_per_day = value,
        }

        value
    }

    /// Repair a restored session against the current catalog.
    ///
    /// An unknown brand falls back to the first brand, an unknown product
    /// to the brand's first product. Overrides are kept as they are. The
    /// live cost and price are re-resolved for the selected product.
    pub fn reconcile(&self, state: &mut SessionState) {
        let brand_known = state
            .brand
            .as_deref()
            .is_some_and(|brand| self.catalog.contains_brand(brand));

        if !brand_known {
            warn!(brand = ?state.brand, "stale brand selection, using first brand");

            self.fall_back_to_first_brand(state);

            return;
        }

        match state.product_id.clone() {
            Some(product_id) => self.on_product_changed(state, &product_id),
            None => {
                if let Some(brand) = state.brand.clone() {
                    self.on_brand_changed(state, &brand);
                }
            }
        }
    }

    fn fall_back_to_first_brand(&self, state: &mut SessionState) {
        match self.catalog.brands().next() {
            Some(first) => self.on_brand_changed(state, first),
            None => {
                state.brand = None;
                state.product_id = None;
            }
        }
    }

    fn select_catalog_product(&self, state: &mut SessionState, product_id: &str) {
        let brand = state.brand.as_deref().unwrap_or_default();

        let product = match self.catalog.product(brand, product_id) {
            Some(product) => Some(product),
            None => {
                warn!(
                    brand,
                    product_id, "unknown product, using first product of brand"
                );

                self.catalog.first_product(brand)
            }
        };

        match product {
            Some(product) => {
                debug!(product_id = %product.id, "product changed");

                state.product_id = Some(product.id.clone());
                state.set_prices(resolve_defaults(product, &state.overrides));
            }
            None => state.product_id = None,
        }
    }

    fn select_free_text_product(&self, state: &mut SessionState, product_id: &str) {
        let product_id = product_id.trim();

        if product_id.is_empty() {
            state.product_id = None;
            return;
        }

        let prices = match self.catalog.find_product(product_id) {
            Some(product) => resolve_defaults(product, &state.overrides),
            None => resolve_defaults(&Product::new(product_id, product_id), &state.overrides),
        };

        debug!(product_id, "free-text product selected");

        state.product_id = Some(product_id.to_string());
        state.set_prices(prices);
    }
}
