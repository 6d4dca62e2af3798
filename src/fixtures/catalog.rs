//! Catalog Fixtures

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashSet;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    catalog::{Catalog, Product},
    fixtures::FixtureError,
};

/// Wrapper for the catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Brands in display order
    pub brands: Vec<BrandFixture>,
}

/// Brand Fixture
#[derive(Debug, Deserialize)]
pub struct BrandFixture {
    /// Brand name
    pub name: String,

    /// Products in display order
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Default salon cost (e.g., "10.45 GBP")
    #[serde(default)]
    pub cost: Option<String>,

    /// Default retail price (e.g., "20.99 GBP")
    #[serde(default)]
    pub price: Option<String>,
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let mut currency: Option<&'static Currency> = None;
        let mut brand_names = FxHashSet::default();
        let mut product_ids = FxHashSet::default();
        let mut brands = Vec::with_capacity(fixture.brands.len());

        for brand in fixture.brands {
            if !brand_names.insert(brand.name.clone()) {
                return Err(FixtureError::DuplicateBrand(brand.name));
            }

            let mut products = Vec::with_capacity(brand.products.len());

            for product in brand.products {
                if !product_ids.insert(product.id.clone()) {
                    return Err(FixtureError::DuplicateProduct(product.id));
                }

                let default_cost =
                    parse_default(&product.id, product.cost.as_deref(), &mut currency)?;
                let default_price =
                    parse_default(&product.id, product.price.as_deref(), &mut currency)?;

                products.push(Product {
                    id: product.id,
                    name: product.name,
                    default_cost,
                    default_price,
                });
            }

            brands.push((brand.name, products));
        }

        let mut catalog = Catalog::new(currency.unwrap_or(GBP));

        for (name, products) in brands {
            catalog.push_brand(name, products);
        }

        Ok(catalog)
    }
}

/// Parse an optional default amount, checking sign and currency consistency.
fn parse_default(
    product_id: &str,
    amount: Option<&str>,
    currency: &mut Option<&'static Currency>,
) -> Result<Option<Decimal>, FixtureError> {
    let Some(amount) = amount else {
        return Ok(None);
    };

    let (value, amount_currency) = parse_price(amount)?;

    if value < Decimal::ZERO {
        return Err(FixtureError::NegativeAmount {
            product: product_id.to_string(),
            amount: amount.to_string(),
        });
    }

    if let Some(existing) = *currency {
        if existing != amount_currency {
            return Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                amount_currency.iso_alpha_code.to_string(),
            ));
        }
    } else {
        *currency = Some(amount_currency);
    }

    Ok(Some(value))
}

/// Parse price string (e.g., "2.99 GBP") into an amount and currency
///
/// The amount is rounded to the currency's minor unit.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount =
        amount.round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);

    Ok((amount, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::fixtures::parse_catalog;

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        let (amount, currency) = parse_price("10.45 GBP")?;

        assert_eq!(amount, Decimal::new(1045, 2));
        assert_eq!(currency, GBP);

        Ok(())
    }

    #[test]
    fn parse_price_rounds_half_away_from_zero() -> TestResult {
        let (amount, _) = parse_price("10.445 GBP")?;

        assert_eq!(
            amount,
            Decimal::new(1045, 2),
            "half a penny should round up to the minor unit"
        );

        let (amount, _) = parse_price("10.435 GBP")?;

        assert_eq!(amount, Decimal::new(1044, 2), "rounding should not favour even digits");

        Ok(())
    }

    #[test]
    fn parse_price_rejects_bad_format() {
        assert!(matches!(
            parse_price("10.45"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("ten GBP"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("10 XYZ"),
            Err(FixtureError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn products_without_defaults_are_allowed() -> TestResult {
        let catalog = parse_catalog(
            "brands:\n  - name: A\n    products:\n      - id: a\n        name: A\n        price: 5.00 USD\n",
        )?;

        let product = catalog.first_product("A");

        assert_eq!(product.and_then(|p| p.default_cost), None);
        assert_eq!(product.and_then(|p| p.default_price), Some(Decimal::new(5, 0)));
        assert_eq!(catalog.currency(), USD);

        Ok(())
    }

    #[test]
    fn unpriced_catalog_defaults_to_gbp() -> TestResult {
        let catalog = parse_catalog("brands:\n  - name: A\n")?;

        assert_eq!(catalog.currency(), GBP);
        assert_eq!(catalog.products("A").count(), 0);

        Ok(())
    }

    #[test]
    fn negative_defaults_are_rejected() {
        let result = parse_catalog(
            "brands:\n  - name: A\n    products:\n      - id: a\n        name: A\n        cost: -1.00 GBP\n",
        );

        assert!(matches!(
            result,
            Err(FixtureError::NegativeAmount { product, .. }) if product == "a"
        ));
    }

    #[test]
    fn default_price_below_cost_is_allowed() -> TestResult {
        let catalog = parse_catalog(
            "brands:\n  - name: A\n    products:\n      - id: a\n        name: A\n        cost: 12.00 GBP\n        price: 10.00 GBP\n",
        )?;

        assert!(catalog.find_product("a").is_some());

        Ok(())
    }

    #[test]
    fn mixed_currencies_are_rejected() {
        let result = parse_catalog(
            "brands:\n  - name: A\n    products:\n      - id: a\n        name: A\n        cost: 1.00 GBP\n        price: 2.00 EUR\n",
        );

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let result = parse_catalog(
            "brands:\n  - name: A\n    products:\n      - id: x\n        name: X\n  - name: B\n    products:\n      - id: x\n        name: X again\n",
        );

        assert!(matches!(result, Err(FixtureError::DuplicateProduct(id)) if id == "x"));
    }

    #[test]
    fn duplicate_brands_are_rejected() {
        let result = parse_catalog("brands:\n  - name: A\n  - name: A\n");

        assert!(matches!(result, Err(FixtureError::DuplicateBrand(name)) if name == "A"));
    }
}
