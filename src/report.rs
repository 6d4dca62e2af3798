//! Report
//!
//! Console rendering of a promotion outcome. Amounts are shown in the
//! catalog currency; the numbers themselves come straight from
//! [`PromotionResult`].

use std::io;

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::promotion::{PromotionInputs, PromotionResult};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Outcome of a promotion ready for display.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    brand: Option<&'a str>,
    product_name: Option<&'a str>,
    inputs: PromotionInputs,
    result: PromotionResult,
    currency: &'static Currency,
}

impl<'a> Report<'a> {
    /// Create a report for the given inputs, computing the outcome.
    pub fn new(inputs: PromotionInputs, currency: &'static Currency) -> Self {
        Self {
            brand: None,
            product_name: None,
            inputs,
            result: inputs.compute(),
            currency,
        }
    }

    /// Label the report with the selected brand and product.
    #[must_use]
    pub fn with_product(
        mut self,
        brand: Option<&'a str>,
        product_name: Option<&'a str>,
    ) -> Self {
        self.brand = brand;
        self.product_name = product_name;
        self
    }

    /// The computed outcome.
    pub fn result(&self) -> &PromotionResult {
        &self.result
    }

    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        self.write_heading(&mut out)?;
        self.write_table(&mut out)?;
        self.write_summary(&mut out)
    }

    fn write_heading(&self, out: &mut impl io::Write) -> Result<(), ReportError> {
        let product = match (self.brand, self.product_name) {
            (Some(brand), Some(name)) => format!("{brand} / {name}"),
            (Some(brand), None) => format!("{brand} / (no product)"),
            (None, Some(name)) => name.to_string(),
            (None, None) => "(no product)".to_string(),
        };

        writeln!(out, "\n \x1b[1m{product}\x1b[0m").map_err(|_err| ReportError::IO)?;

        writeln!(
            out,
            " {} days × {} stylists × {} per stylist per day",
            self.inputs.days, self.inputs.stylists, self.inputs.units_per_stylist_per_day,
        )
        .map_err(|_err| ReportError::IO)
    }

    fn write_table(&self, out: &mut impl io::Write) -> Result<(), ReportError> {
        let result = &self.result;
        let mut builder = Builder::default();

        builder.push_record(["", "Per unit", "Per day", "Promotion total"]);
        builder.push_record([
            "Units sold".to_string(),
            String::new(),
            result.salon_units_per_day.to_string(),
            result.total_units.to_string(),
        ]);
        builder.push_record([
            "Cost".to_string(),
            self.money(self.inputs.cost),
            self.money(result.day_cost),
            self.money(result.total_cost),
        ]);
        builder.push_record([
            "Revenue".to_string(),
            self.money(self.inputs.price),
            self.money(result.day_revenue),
            self.money(result.total_revenue),
        ]);
        builder.push_record([
            "Profit".to_string(),
            self.money(result.unit_profit),
            self.money(result.day_profit),
            self.money(result.total_profit),
        ]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReportError::IO)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReportError> {
        let margin = self
            .result
            .margin_percent
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

        writeln!(out, " Margin: {margin:.1}%").map_err(|_err| ReportError::IO)?;

        if self.result.is_loss_making() {
            let loss = self.money(self.result.unit_profit.abs());

            writeln!(
                out,
                " \x1b[33mPrice is below cost: each unit sold loses {loss}\x1b[0m"
            )
            .map_err(|_err| ReportError::IO)?;
        }

        Ok(())
    }

    fn money(&self, amount: Decimal) -> String {
        Money::from_decimal(amount, self.currency).to_string()
    }
}
