//! Salon Retail prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, Product},
    fixtures::{Fixture, FixtureError},
    input::{parse_or_zero, sanitize_amount},
    overrides::{PriceField, PriceOverride, PriceOverrides},
    promotion::{PromotionInputs, PromotionResult, compute_totals, round2},
    report::{Report, ReportError},
    session::{PromotionField, ResolvedPrices, Resolver, SessionState, resolve_defaults},
    store::{SessionStore, StoreError, YamlFileStore},
};
