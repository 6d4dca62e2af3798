//! Fixtures
//!
//! Catalog configuration loaded from YAML files under a fixtures directory.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;

pub mod catalog;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Default cost or price below zero
    #[error("Negative amount for product {product}: {amount}")]
    NegativeAmount {
        /// Product id
        product: String,
        /// Amount as written in the fixture
        amount: String,
    },

    /// Product id used more than once
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Brand name used more than once
    #[error("Duplicate brand: {0}")]
    DuplicateBrand(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from `catalog/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// catalog it describes is invalid.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let catalog = parse_catalog(&contents)?;

        debug!(path = %file_path.display(), brands = catalog.len(), "catalog loaded");

        Ok(catalog)
    }
}

/// Parse a catalog from YAML text
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the catalog is invalid.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: catalog::CatalogFixture = serde_norway::from_str(yaml)?;

    fixture.try_into()
}
