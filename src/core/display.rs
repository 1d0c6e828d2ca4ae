//! Presentation helpers for the totals block.
//!
//! The engine computes at full precision; everything printed goes through
//! [`round_display`] (two decimals, half away from zero).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::types::{BillingSummary, RateConfig};

/// Round to two decimals using half-up (commercial rounding).
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount the French way: space-grouped thousands, decimal
/// comma, always two decimals.
///
/// ```
/// use facture::core::format_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1234567.891)), "1 234 567,89");
/// assert_eq!(format_amount(dec!(0)), "0,00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_display(value);
    rounded.rescale(2);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((&digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

/// Format a rate fraction as a percentage (`0.19` → `"19 %"`, `0.025` → `"2,5 %"`).
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{} %", percent.to_string().replace('.', ","))
}

/// Which summary field a printed row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SummaryField {
    GrossTotal,
    Discount,
    NetAfterDiscount,
    Refund,
    TotalHt,
    Vat,
    StampTax,
    TotalTtc,
}

/// One labelled line of the printed totals block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub field: SummaryField,
    pub label: String,
    /// Rounded for display.
    pub amount: Decimal,
}

impl SummaryRow {
    fn new(field: SummaryField, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            field,
            label: label.into(),
            amount: round_display(amount),
        }
    }
}

impl std::fmt::Display for SummaryRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, format_amount(self.amount))
    }
}

/// Rows of the totals block, in print order.
///
/// A zero discount, refund or stamp-tax rate hides its rows (the discount
/// also takes its "Net après remise" line with it). TVA is always printed.
pub fn summary_rows(summary: &BillingSummary, rates: &RateConfig) -> Vec<SummaryRow> {
    use SummaryField::*;

    let mut rows = vec![SummaryRow::new(GrossTotal, "Total brut", summary.gross_total)];

    if !rates.discount_rate.is_zero() {
        rows.push(SummaryRow::new(
            Discount,
            format!("Remise ({})", format_rate(rates.discount_rate)),
            summary.discount,
        ));
        rows.push(SummaryRow::new(
            NetAfterDiscount,
            "Net après remise",
            summary.net_after_discount,
        ));
    }
    if !rates.refund_rate.is_zero() {
        rows.push(SummaryRow::new(
            Refund,
            format!("R.G. ({})", format_rate(rates.refund_rate)),
            summary.refund,
        ));
    }

    rows.push(SummaryRow::new(TotalHt, "Total HT", summary.total_ht));
    rows.push(SummaryRow::new(
        Vat,
        format!("TVA ({})", format_rate(rates.vat_rate)),
        summary.vat,
    ));

    if !rates.stamp_tax_rate.is_zero() {
        rows.push(SummaryRow::new(
            StampTax,
            format!("Timbre ({})", format_rate(rates.stamp_tax_rate)),
            summary.stamp_tax,
        ));
    }

    rows.push(SummaryRow::new(TotalTtc, "Total TTC", summary.total_ttc));
    rows
}
