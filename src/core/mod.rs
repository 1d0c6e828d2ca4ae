//! Core billing types, validation, and the totals cascade.
//!
//! This module holds the line item and rate model, the validators that
//! guard every computation, and the display helpers used to print the
//! totals block.

mod billing;
mod builder;
pub mod display;
mod error;
mod types;
mod validation;

pub use billing::*;
pub use builder::*;
pub use display::{SummaryField, SummaryRow, format_amount, format_rate, round_display, summary_rows};
pub use error::*;
pub use types::*;
pub use validation::*;
