//! Promotion calculator
//!
//! Turns the five promotion inputs into the derived totals. The calculation
//! is pure: the same inputs always give the same [`PromotionResult`].
//!
//! Volume factors and the per-unit amounts feeding the totals are clamped to
//! zero. Per-unit profit and margin use the per-unit amounts as entered, so a
//! negative cost shows up as extra unit profit while contributing nothing to
//! the totals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::input::parse_or_zero;

/// Inputs for a promotion calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionInputs {
    /// Salon cost per unit
    pub cost: Decimal,

    /// Recommended retail price per unit
    pub price: Decimal,

    /// Promotion length in days
    pub days: Decimal,

    /// Number of stylists selling
    pub stylists: Decimal,

    /// Units each stylist sells per day
    pub units_per_stylist_per_day: Decimal,
}

impl PromotionInputs {
    /// Build inputs from raw form text; anything non-numeric reads as zero.
    pub fn from_raw(
        cost: &str,
        price: &str,
        days: &str,
        stylists: &str,
        units_per_stylist_per_day: &str,
    ) -> Self {
        Self {
            cost: parse_or_zero(cost),
            price: parse_or_zero(price),
            days: parse_or_zero(days),
            stylists: parse_or_zero(stylists),
            units_per_stylist_per_day: parse_or_zero(units_per_stylist_per_day),
        }
    }

    /// Compute the derived totals for these inputs.
    pub fn compute(&self) -> PromotionResult {
        compute_totals(
            self.cost,
            self.price,
            self.days,
            self.stylists,
            self.units_per_stylist_per_day,
        )
    }
}

/// Derived promotion outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PromotionResult {
    /// Units each stylist sells per day (clamped)
    pub per_day_units: Decimal,

    /// Units the whole salon sells per day
    pub salon_units_per_day: Decimal,

    /// Units sold over the whole promotion
    pub total_units: Decimal,

    /// Cost of the units sold in one day
    pub day_cost: Decimal,

    /// Revenue from one day of sales
    pub day_revenue: Decimal,

    /// Profit from one day of sales
    pub day_profit: Decimal,

    /// Cost of all units sold
    pub total_cost: Decimal,

    /// Revenue from all units sold
    pub total_revenue: Decimal,

    /// Profit on a single unit, may be negative
    pub unit_profit: Decimal,

    /// Profit over the whole promotion, may be negative
    pub total_profit: Decimal,

    /// Unit profit as a percentage of price, zero when price is not positive
    pub margin_percent: Decimal,
}

impl PromotionResult {
    /// Whether each unit sells for less than it costs.
    pub fn is_loss_making(&self) -> bool {
        self.unit_profit < Decimal::ZERO
    }
}

/// Compute the promotion outcome.
///
/// Totals are rounded to two decimal places once each; total profit is
/// rounded revenue minus rounded cost rather than units times unit profit.
pub fn compute_totals(
    cost: Decimal,
    price: Decimal,
    days: Decimal,
    stylists: Decimal,
    units_per_stylist_per_day: Decimal,
) -> PromotionResult {
    let clamped_cost = clamp(cost);
    let clamped_price = clamp(price);
    let days = clamp(days);
    let stylists = clamp(stylists);
    let per_day_units = clamp(units_per_stylist_per_day);

    let salon_units_per_day = stylists.saturating_mul(per_day_units);
    let total_units = days.saturating_mul(salon_units_per_day);

    let day_cost = round2(salon_units_per_day.saturating_mul(clamped_cost));
    let day_revenue = round2(salon_units_per_day.saturating_mul(clamped_price));

    let total_cost = round2(total_units.saturating_mul(clamped_cost));
    let total_revenue = round2(total_units.saturating_mul(clamped_price));

    let raw_unit_profit = price.saturating_sub(cost);

    PromotionResult {
        per_day_units,
        salon_units_per_day,
        total_units,
        day_cost,
        day_revenue,
        day_profit: round2(day_revenue.saturating_sub(day_cost)),
        total_cost,
        total_revenue,
        unit_profit: round2(raw_unit_profit),
        total_profit: round2(total_revenue.saturating_sub(total_cost)),
        margin_percent: margin_percent(raw_unit_profit, price),
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn clamp(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

fn margin_percent(unit_profit: Decimal, price: Decimal) -> Decimal {
    if price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    unit_profit
        .checked_div(price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
