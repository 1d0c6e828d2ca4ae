use rust_decimal::Decimal;

use super::error::{FactureError, ValidationError};
use super::types::*;

/// Validate line items before billing.
/// Returns all validation errors found (not just the first), in item order.
pub fn validate_line_items(items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, item) in items.iter().enumerate() {
        validate_line(item, i, &mut errors);
    }
    errors
}

/// Validate a rate configuration: every rate must lie in `[0, 1)`.
/// Returns all validation errors found.
pub fn validate_rates(rates: &RateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (name, rate) in [
        ("discount_rate", rates.discount_rate),
        ("refund_rate", rates.refund_rate),
        ("vat_rate", rates.vat_rate),
        ("stamp_tax_rate", rates.stamp_tax_rate),
    ] {
        if rate < Decimal::ZERO {
            errors.push(ValidationError::rate(
                format!("rates.{name}"),
                format!("rate {rate} must not be negative"),
            ));
        } else if rate >= Decimal::ONE {
            errors.push(ValidationError::rate(
                format!("rates.{name}"),
                format!("rate {rate} must be below 1 (100 %)"),
            ));
        }
    }
    errors
}

/// Full validation pass over items then rates; fails with the first violation.
pub fn ensure_valid(items: &[LineItem], rates: &RateConfig) -> Result<(), FactureError> {
    if let Some(err) = validate_line_items(items).into_iter().next() {
        return Err(err.into());
    }
    if let Some(err) = validate_rates(rates).into_iter().next() {
        return Err(err.into());
    }
    Ok(())
}

fn validate_line(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.quantity <= Decimal::ZERO {
        errors.push(ValidationError::input(
            format!("{prefix}.quantity"),
            format!("quantity {} must be positive", item.quantity),
        ));
    } else if !item.quantity.fract().is_zero() {
        errors.push(ValidationError::input(
            format!("{prefix}.quantity"),
            format!("quantity {} must be a whole number", item.quantity),
        ));
    }

    if item.unit_price < Decimal::ZERO {
        errors.push(ValidationError::input(
            format!("{prefix}.unit_price"),
            format!("unit price {} must not be negative", item.unit_price),
        ));
    }

    if item.amount < Decimal::ZERO {
        errors.push(ValidationError::input(
            format!("{prefix}.amount"),
            format!("amount {} must not be negative", item.amount),
        ));
    }
}
