//! Catalog
//!
//! Static, read-only mapping from brand name to an ordered list of products.
//! Lookups never fail loudly: an unknown brand yields no products and an
//! unknown product id yields `None`.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Product Key
    pub(crate) struct ProductKey;
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id, unique across the whole catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Default salon cost per unit
    pub default_cost: Option<Decimal>,

    /// Default recommended retail price per unit
    pub default_price: Option<Decimal>,
}

impl Product {
    /// Create a product with no default pricing.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_cost: None,
            default_price: None,
        }
    }

    /// Set the default cost and price.
    #[must_use]
    pub fn with_defaults(mut self, cost: Decimal, price: Decimal) -> Self {
        self.default_cost = Some(cost);
        self.default_price = Some(price);
        self
    }
}

/// Brand
#[derive(Debug, Clone)]
pub(crate) struct Brand {
    name: String,
    products: Vec<ProductKey>,
}

impl Brand {
    /// Brand name
    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

/// Catalog of brands and their products.
#[derive(Debug, Clone)]
pub struct Catalog {
    brands: Vec<Brand>,
    product_meta: SlotMap<ProductKey, Product>,
    product_keys: FxHashMap<String, ProductKey>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            brands: Vec::new(),
            product_meta: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
            currency,
        }
    }

    /// The catalog the salon form ships with.
    pub fn salon_default() -> Self {
        let mut catalog = Self::new(iso::GBP);

        catalog.push_brand(
            "REF Stockholm",
            [Product::new("ref-gift-set", "REF Gift Set")
                .with_defaults(Decimal::ZERO, Decimal::ZERO)],
        );

        catalog.push_brand(
            "MY.ORGANICS",
            [
                Product::new("myorg-retail-shampoo", "MY.ORGANICS RETAIL SHAMPOO")
                    .with_defaults(Decimal::new(1045, 2), Decimal::new(2099, 2)),
            ],
        );

        catalog
    }

    /// Append a brand and its products, keeping insertion order.
    ///
    /// Products whose id is already present in the catalog are skipped, so
    /// ids stay unique across brands. Returns the number of products added.
    pub fn push_brand(
        &mut self,
        name: impl Into<String>,
        products: impl IntoIterator<Item = Product>,
    ) -> usize {
        let mut keys = Vec::new();

        for product in products {
            if self.product_keys.contains_key(&product.id) {
                continue;
            }

            let id = product.id.clone();
            let key = self.product_meta.insert(product);

            self.product_keys.insert(id, key);
            keys.push(key);
        }

        let added = keys.len();

        self.brands.push(Brand {
            name: name.into(),
            products: keys,
        });

        added
    }

    /// Brand names in configuration order.
    pub fn brands(&self) -> impl Iterator<Item = &str> + '_ {
        self.brands.iter().map(Brand::name)
    }

    /// Products of a brand in configuration order; empty for an unknown brand.
    pub fn products<'a>(
        &'a self,
        brand: &str,
    ) -> impl Iterator<Item = &'a Product> + use<'a> {
        self.brand(brand)
            .map(|brand| brand.products.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|key| self.product_meta.get(*key))
    }

    /// First product of a brand, if the brand exists and has any.
    pub fn first_product(&self, brand: &str) -> Option<&Product> {
        self.products(brand).next()
    }

    /// Look up a product within a brand.
    pub fn product(&self, brand: &str, product_id: &str) -> Option<&Product> {
        self.products(brand).find(|product| product.id == product_id)
    }

    /// Look up a product by id regardless of brand.
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.product_keys
            .get(product_id)
            .and_then(|key| self.product_meta.get(*key))
    }

    /// Whether the catalog knows this brand.
    pub fn contains_brand(&self, brand: &str) -> bool {
        self.brand(brand).is_some()
    }

    /// Currency every catalog amount is expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of brands.
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    /// Whether the catalog has no brands.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    fn brand(&self, name: &str) -> Option<&Brand> {
        self.brands.iter().find(|brand| brand.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brands_keep_configuration_order() {
        let catalog = Catalog::salon_default();

        assert_eq!(
            catalog.brands().collect::<Vec<_>>(),
            ["REF Stockholm", "MY.ORGANICS"]
        );
    }

    #[test]
    fn unknown_brand_has_no_products() {
        let catalog = Catalog::salon_default();

        assert_eq!(catalog.products("Nope").count(), 0);
        assert!(catalog.first_product("Nope").is_none());
    }

    #[test]
    fn product_lookup_is_scoped_to_brand() {
        let catalog = Catalog::salon_default();

        assert!(
            catalog
                .product("MY.ORGANICS", "myorg-retail-shampoo")
                .is_some()
        );
        assert!(
            catalog
                .product("REF Stockholm", "myorg-retail-shampoo")
                .is_none()
        );
        assert!(catalog.find_product("myorg-retail-shampoo").is_some());
    }

    #[test]
    fn default_pricing_is_carried() {
        let catalog = Catalog::salon_default();
        let shampoo = catalog.find_product("myorg-retail-shampoo");

        assert_eq!(
            shampoo.and_then(|p| p.default_cost),
            Some(Decimal::new(1045, 2))
        );
        assert_eq!(
            shampoo.and_then(|p| p.default_price),
            Some(Decimal::new(2099, 2))
        );
    }

    #[test]
    fn duplicate_ids_are_skipped() {
        let mut catalog = Catalog::new(iso::GBP);

        assert_eq!(catalog.push_brand("A", [Product::new("x", "X")]), 1);
        assert_eq!(catalog.push_brand("B", [Product::new("x", "Other X")]), 0);

        assert_eq!(catalog.products("B").count(), 0);
        assert_eq!(
            catalog.find_product("x").map(|p| p.name.as_str()),
            Some("X")
        );
    }

    #[test]
    fn brand_without_products_is_listed() {
        let mut catalog = Catalog::new(iso::GBP);
        catalog.push_brand("Empty", []);

        assert!(catalog.contains_brand("Empty"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.first_product("Empty").is_none());
    }
}
