//! Salon Retail
//!
//! Profit calculator for in-salon retail promotions: pick a product from a
//! brand catalog, accept or override its cost and retail price, describe the
//! promotion, and get units, cost, revenue and profit totals back.

pub mod catalog;
pub mod fixtures;
pub mod input;
pub mod logging;
pub mod overrides;
pub mod prelude;
pub mod promotion;
pub mod report;
pub mod session;
pub mod store;
pub mod utils;
