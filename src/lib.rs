//! # facture
//!
//! Billing engine for printable invoices: the cascading remise / retenue de
//! garantie / TVA / timbre arithmetic, the legal "total in words" line, and
//! the page plan that spreads line items over fixed-capacity printed pages.
//!
//! All monetary values and rates use [`rust_decimal::Decimal`] — never floating point.
//! Every entry point is a pure function of its inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use facture::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItemBuilder::new("1", "Ciment CPJ 42.5", dec!(10), dec!(10)).build(),
//!     LineItemBuilder::new("2", "Sable", dec!(4), dec!(50)).build(),
//!     LineItemBuilder::new("3", "Gravier", dec!(3), dec!(100)).build(),
//! ];
//! let rates = RateConfigBuilder::new().discount_rate(dec!(0.1)).build();
//!
//! let summary = compute_billing_summary(&items, &rates).unwrap();
//! assert_eq!(summary.total_ht, dec!(540));
//! assert_eq!(summary.total_ttc, dec!(642.6));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Line items, rates, validation, billing cascade, display helpers |
//! | `words` | Amount in words (French cardinals) |
//! | `print` | Page planner and print plan (enables `words`) |
//! | `all` | Everything (same as default) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "words")]
pub mod words;

#[cfg(feature = "print")]
pub mod print;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
