use rust_decimal::Decimal;

use super::types::*;

/// Builder for LineItem.
///
/// The amount defaults to `quantity * unit_price`, saturating at the
/// `Decimal` bounds; call [`amount`](Self::amount) to record a manual
/// override.
///
/// ```
/// use facture::core::*;
/// use rust_decimal_macros::dec;
///
/// let item = LineItemBuilder::new("1", "Ciment CPJ 42.5", dec!(20), dec!(850.00)).build();
/// assert_eq!(item.amount, dec!(17000));
///
/// let rebated = LineItemBuilder::new("2", "Sable", dec!(3), dec!(100))
///     .amount(dec!(280))
///     .build();
/// assert!(!rebated.is_amount_derived());
/// ```
pub struct LineItemBuilder {
    id: String,
    designation: String,
    quantity: Decimal,
    unit_price: Decimal,
    amount: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(
        id: impl Into<String>,
        designation: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            designation: designation.into(),
            quantity,
            unit_price,
            amount: None,
        }
    }

    /// Override the computed amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn build(self) -> LineItem {
        let amount = self
            .amount
            .unwrap_or_else(|| self.quantity.saturating_mul(self.unit_price));
        LineItem {
            id: self.id,
            designation: self.designation,
            quantity: self.quantity,
            unit_price: self.unit_price,
            amount,
        }
    }
}

/// Builder for RateConfig, starting from the defaults (TVA 19 %, everything else 0).
///
/// Rates are not checked here; [`validate_rates`](super::validate_rates)
/// and the computing entry points reject out-of-range values.
#[derive(Debug, Default)]
pub struct RateConfigBuilder {
    rates: RateConfig,
}

impl RateConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discount_rate(mut self, rate: Decimal) -> Self {
        self.rates.discount_rate = rate;
        self
    }

    pub fn refund_rate(mut self, rate: Decimal) -> Self {
        self.rates.refund_rate = rate;
        self
    }

    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.rates.vat_rate = rate;
        self
    }

    pub fn stamp_tax_rate(mut self, rate: Decimal) -> Self {
        self.rates.stamp_tax_rate = rate;
        self
    }

    /// Set a rate from a percentage as typed in a form (e.g. `5` for 5 %).
    pub fn discount_percent(self, percent: Decimal) -> Self {
        self.discount_rate(percent / Decimal::ONE_HUNDRED)
    }

    pub fn refund_percent(self, percent: Decimal) -> Self {
        self.refund_rate(percent / Decimal::ONE_HUNDRED)
    }

    pub fn vat_percent(self, percent: Decimal) -> Self {
        self.vat_rate(percent / Decimal::ONE_HUNDRED)
    }

    pub fn stamp_tax_percent(self, percent: Decimal) -> Self {
        self.stamp_tax_rate(percent / Decimal::ONE_HUNDRED)
    }

    pub fn build(self) -> RateConfig {
        self.rates
    }
}
