use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::error::{FactureError, Result, ValidationError};
use super::types::*;
use super::validation::ensure_valid;

/// Compute the totals block of an invoice.
///
/// The rates cascade: each step works on the result of the previous one,
/// they are not independent percentages of the gross total.
///
/// 1. `gross_total = Σ amount`
/// 2. `discount = gross_total × discount_rate`
/// 3. `net_after_discount = gross_total − discount`
/// 4. `refund = net_after_discount × refund_rate`
/// 5. `total_ht = net_after_discount − refund`
/// 6. `vat = total_ht × vat_rate`
/// 7. `stamp_tax = (total_ht + vat) × stamp_tax_rate`
/// 8. `total_ttc = total_ht + vat + stamp_tax`
///
/// Nothing is rounded here; see [`BillingSummary::rounded`] for display.
/// Items and rates are validated first and the first violation is returned.
/// Totals that would leave the `Decimal` range are reported as
/// [`FactureError::InvalidInput`] on field `items`.
///
/// ```
/// use facture::core::*;
/// use rust_decimal_macros::dec;
///
/// let items: Vec<_> = [dec!(100), dec!(200), dec!(300)]
///     .into_iter()
///     .enumerate()
///     .map(|(i, a)| LineItemBuilder::new(i.to_string(), "Article", dec!(1), a).build())
///     .collect();
///
/// let summary = compute_billing_summary(&items, &RateConfig::default()).unwrap();
/// assert_eq!(summary.vat, dec!(114));
/// assert_eq!(summary.total_ttc, dec!(714));
/// ```
pub fn compute_billing_summary(items: &[LineItem], rates: &RateConfig) -> Result<BillingSummary> {
    ensure_valid(items, rates)?;

    let gross_total = items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.amount))
        .ok_or_else(out_of_range)?;
    let summary = cascade(gross_total, rates).ok_or_else(out_of_range)?;

    debug!(
        items = items.len(),
        gross_total = %summary.gross_total,
        total_ht = %summary.total_ht,
        total_ttc = %summary.total_ttc,
        "computed billing summary"
    );
    Ok(summary)
}

fn out_of_range() -> FactureError {
    FactureError::InvalidInput(ValidationError::input(
        "items",
        "invoice totals exceed the representable amount range",
    ))
}

/// Run the rate cascade on an already validated gross total.
/// `None` if any step overflows.
fn cascade(gross_total: Decimal, rates: &RateConfig) -> Option<BillingSummary> {
    let discount = gross_total.checked_mul(rates.discount_rate)?;
    let net_after_discount = gross_total.checked_sub(discount)?;
    let refund = net_after_discount.checked_mul(rates.refund_rate)?;
    let total_ht = net_after_discount.checked_sub(refund)?;
    let vat = total_ht.checked_mul(rates.vat_rate)?;
    // Timbre is levied on the VAT-inclusive amount.
    let taxed = total_ht.checked_add(vat)?;
    let stamp_tax = taxed.checked_mul(rates.stamp_tax_rate)?;
    let total_ttc = taxed.checked_add(stamp_tax)?;

    trace!(%discount, %refund, %vat, %stamp_tax, "rate cascade");

    Some(BillingSummary {
        gross_total,
        discount,
        net_after_discount,
        refund,
        total_ht,
        vat,
        stamp_tax,
        total_ttc,
    })
}
