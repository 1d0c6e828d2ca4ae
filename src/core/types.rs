use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Standard Algerian TVA rate applied when no rate is configured.
pub const DEFAULT_VAT_RATE: Decimal = dec!(0.19);

/// One billed article on an invoice.
///
/// The position of an item in its slice is its print order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier, unique within the invoice.
    pub id: String,
    /// Free-text label (désignation).
    pub designation: String,
    /// Billed quantity, a positive whole number.
    pub quantity: Decimal,
    /// Price per unit, two-decimal precision.
    pub unit_price: Decimal,
    /// Contribution to the gross total. Authoritative: the engine never
    /// recomputes it from `quantity * unit_price`, so upstream overrides stick.
    pub amount: Decimal,
}

impl LineItem {
    /// Whether `amount` still equals `quantity * unit_price`.
    pub fn is_amount_derived(&self) -> bool {
        self.quantity.checked_mul(self.unit_price) == Some(self.amount)
    }
}

/// The four fiscal rates of an invoice, each a fraction in `[0, 1)`.
///
/// A zero rate means "not applicable" for display, but the cascade runs
/// every step regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Remise, applied to the gross total.
    pub discount_rate: Decimal,
    /// Retenue de garantie (R.G.), applied after the discount.
    pub refund_rate: Decimal,
    /// TVA, applied to the total HT.
    pub vat_rate: Decimal,
    /// Timbre, applied to the VAT-inclusive subtotal.
    pub stamp_tax_rate: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            discount_rate: Decimal::ZERO,
            refund_rate: Decimal::ZERO,
            vat_rate: DEFAULT_VAT_RATE,
            stamp_tax_rate: Decimal::ZERO,
        }
    }
}

/// Totals block of an invoice. Every field is derived by
/// [`compute_billing_summary`](super::compute_billing_summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Sum of all line amounts.
    pub gross_total: Decimal,
    /// gross_total × discount_rate.
    pub discount: Decimal,
    /// gross_total − discount.
    pub net_after_discount: Decimal,
    /// net_after_discount × refund_rate.
    pub refund: Decimal,
    /// net_after_discount − refund.
    pub total_ht: Decimal,
    /// total_ht × vat_rate.
    pub vat: Decimal,
    /// (total_ht + vat) × stamp_tax_rate.
    pub stamp_tax: Decimal,
    /// total_ht + vat + stamp_tax.
    pub total_ttc: Decimal,
}

impl BillingSummary {
    /// The summary of an invoice with no lines.
    pub const ZERO: Self = Self {
        gross_total: Decimal::ZERO,
        discount: Decimal::ZERO,
        net_after_discount: Decimal::ZERO,
        refund: Decimal::ZERO,
        total_ht: Decimal::ZERO,
        vat: Decimal::ZERO,
        stamp_tax: Decimal::ZERO,
        total_ttc: Decimal::ZERO,
    };

    /// Copy with every field rounded to two decimals for display.
    ///
    /// Each field is rounded on its own; the rounded fields are not
    /// guaranteed to add up to the rounded total.
    pub fn rounded(&self) -> Self {
        use super::display::round_display;
        Self {
            gross_total: round_display(self.gross_total),
            discount: round_display(self.discount),
            net_after_discount: round_display(self.net_after_discount),
            refund: round_display(self.refund),
            total_ht: round_display(self.total_ht),
            vat: round_display(self.vat),
            stamp_tax: round_display(self.stamp_tax),
            total_ttc: round_display(self.total_ttc),
        }
    }
}
