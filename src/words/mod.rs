//! Amount in words for the legal "total in words" line.
//!
//! An amount is split into a major part (floored) and a two-digit minor
//! part (rounded, so centimes are never understated), each spelled with a
//! locale's cardinal rules and set in a fixed sentence:
//!
//! ```
//! use facture::words::amount_in_words;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     amount_in_words(dec!(1234.56)).unwrap(),
//!     "Arrêtée la présente facture à la somme de : \
//!      mille deux cent trente-quatre dinars et cinquante-six centimes"
//! );
//! ```

mod french;

pub use french::French;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{FactureError, Result, ValidationError};

/// Opening words of the legal total line.
pub const LEGAL_PREAMBLE: &str = "Arrêtée la présente facture à la somme de :";

/// Spells whole numbers with a locale's cardinal rules.
pub trait CardinalSpeller {
    /// Spell `n`; zero must yield the locale's word for zero.
    /// Only called with `n <= self.max_value()`.
    fn spell(&self, n: u64) -> String;

    /// Largest number this speller handles.
    fn max_value(&self) -> u64;
}

/// Names of the currency's major and minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyUnits {
    pub major_singular: String,
    pub major_plural: String,
    pub minor_singular: String,
    pub minor_plural: String,
}

impl CurrencyUnits {
    pub fn new(
        major_singular: impl Into<String>,
        major_plural: impl Into<String>,
        minor_singular: impl Into<String>,
        minor_plural: impl Into<String>,
    ) -> Self {
        Self {
            major_singular: major_singular.into(),
            major_plural: major_plural.into(),
            minor_singular: minor_singular.into(),
            minor_plural: minor_plural.into(),
        }
    }

    /// Algerian dinar: dinars and centimes.
    pub fn dinar() -> Self {
        Self::new("dinar", "dinars", "centime", "centimes")
    }

    /// Euro: euros and centimes.
    pub fn euro() -> Self {
        Self::new("euro", "euros", "centime", "centimes")
    }

    fn major(&self, count: u64) -> &str {
        if count > 1 { &self.major_plural } else { &self.major_singular }
    }

    fn minor(&self, count: u64) -> &str {
        if count > 1 { &self.minor_plural } else { &self.minor_singular }
    }
}

impl Default for CurrencyUnits {
    fn default() -> Self {
        Self::dinar()
    }
}

/// An amount split for spelling: whole major units and rounded minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitAmount {
    pub major: u64,
    /// Always `0..=99`.
    pub minor: u64,
}

impl SplitAmount {
    /// Split a non-negative amount. A minor part that rounds up to 100
    /// carries into the major part.
    pub fn from_decimal(amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(FactureError::InvalidInput(ValidationError::input(
                "amount",
                format!("amount {amount} must not be negative"),
            )));
        }

        let major = amount.trunc();
        let minor = ((amount - major) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let too_large = || {
            FactureError::InvalidInput(ValidationError::input(
                "amount",
                format!("amount {amount} is too large to spell"),
            ))
        };
        let mut major = major.to_u64().ok_or_else(too_large)?;
        let mut minor = minor.to_u64().ok_or_else(too_large)?;
        if minor >= 100 {
            major = major.checked_add(1).ok_or_else(too_large)?;
            minor -= 100;
        }

        Ok(Self { major, minor })
    }
}

/// Formatter for the legal total line.
#[derive(Debug, Clone, Default)]
pub struct AmountInWords<S = French> {
    speller: S,
    units: CurrencyUnits,
}

impl AmountInWords<French> {
    /// French cardinals with dinar units.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: CardinalSpeller> AmountInWords<S> {
    /// Use a custom speller.
    pub fn with_speller(speller: S) -> Self {
        Self {
            speller,
            units: CurrencyUnits::default(),
        }
    }

    pub fn units(mut self, units: CurrencyUnits) -> Self {
        self.units = units;
        self
    }

    /// The spelled amount without the legal preamble, e.g.
    /// `"cent dinars et zéro centime"`.
    pub fn phrase(&self, amount: Decimal) -> Result<String> {
        let split = SplitAmount::from_decimal(amount)?;
        if split.major > self.speller.max_value() {
            return Err(FactureError::InvalidInput(ValidationError::input(
                "amount",
                format!("amount {amount} is too large to spell"),
            )));
        }

        let major_unit = self.units.major(split.major);
        // "un million de dinars", "deux milliards d'euros"
        let major_unit = if split.major >= 1_000_000 && split.major % 1_000_000 == 0 {
            if major_unit.starts_with(['a', 'e', 'i', 'o', 'u', 'é']) {
                format!("d'{major_unit}")
            } else {
                format!("de {major_unit}")
            }
        } else {
            major_unit.to_string()
        };

        let phrase = format!(
            "{} {major_unit} et {} {}",
            self.speller.spell(split.major),
            self.speller.spell(split.minor),
            self.units.minor(split.minor),
        );
        trace!(%amount, %phrase, "spelled amount");
        Ok(phrase)
    }

    /// The full legal sentence.
    pub fn sentence(&self, amount: Decimal) -> Result<String> {
        Ok(format!("{LEGAL_PREAMBLE} {}", self.phrase(amount)?))
    }
}

/// Legal total line with French cardinals and dinar units.
pub fn amount_in_words(amount: Decimal) -> Result<String> {
    AmountInWords::new().sentence(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn split_floors_major_and_rounds_minor() {
        assert_eq!(
            SplitAmount::from_decimal(dec!(1234.56)).unwrap(),
            SplitAmount { major: 1234, minor: 56 }
        );
        // 0.125 of a unit is 12.5 centimes, rounded up rather than floored
        assert_eq!(
            SplitAmount::from_decimal(dec!(10.125)).unwrap(),
            SplitAmount { major: 10, minor: 13 }
        );
        assert_eq!(
            SplitAmount::from_decimal(dec!(642.6)).unwrap(),
            SplitAmount { major: 642, minor: 60 }
        );
    }

    #[test]
    fn minor_rounding_carries() {
        assert_eq!(
            SplitAmount::from_decimal(dec!(99.999)).unwrap(),
            SplitAmount { major: 100, minor: 0 }
        );
    }

    #[test]
    fn negative_is_rejected() {
        let err = SplitAmount::from_decimal(dec!(-0.01)).unwrap_err();
        assert!(matches!(err, FactureError::InvalidInput(_)));
    }

    #[test]
    fn zero_is_spelled() {
        assert_eq!(
            AmountInWords::new().phrase(dec!(0)).unwrap(),
            "zéro dinar et zéro centime"
        );
    }

    #[test]
    fn singular_and_plural_units() {
        let words = AmountInWords::new();
        assert_eq!(words.phrase(dec!(1.01)).unwrap(), "un dinar et un centime");
        assert_eq!(
            words.phrase(dec!(2.02)).unwrap(),
            "deux dinars et deux centimes"
        );
    }

    #[test]
    fn round_millions_take_de() {
        let words = AmountInWords::new();
        assert_eq!(
            words.phrase(dec!(2000000)).unwrap(),
            "deux millions de dinars et zéro centime"
        );
        let euros = AmountInWords::new().units(CurrencyUnits::euro());
        assert_eq!(
            euros.phrase(dec!(1000000.5)).unwrap(),
            "un million d'euros et cinquante centimes"
        );
        assert_eq!(
            words.phrase(dec!(1000001)).unwrap(),
            "un million un dinars et zéro centime"
        );
    }

    #[test]
    fn beyond_u64_is_rejected() {
        let err = AmountInWords::new()
            .phrase(dec!(100000000000000000000))
            .unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    struct Digits;

    impl CardinalSpeller for Digits {
        fn spell(&self, n: u64) -> String {
            n.to_string()
        }

        fn max_value(&self) -> u64 {
            u64::MAX
        }
    }

    #[test]
    fn custom_speller() {
        let words = AmountInWords::with_speller(Digits);
        assert_eq!(
            words.sentence(dec!(714)).unwrap(),
            "Arrêtée la présente facture à la somme de : 714 dinars et 0 centime"
        );
    }
}
