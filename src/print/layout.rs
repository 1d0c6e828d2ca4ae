use serde::{Deserialize, Serialize};

use crate::core::{FactureError, ValidationError};

/// Items always kept together on the final page.
pub const RESERVED_TAIL: usize = 2;

/// Line capacity of a printed invoice page.
pub const INVOICE_PAGE_CAPACITY: usize = 13;

/// Item count up to which an invoice prints on a single page.
pub const INVOICE_SINGLE_PAGE_THRESHOLD: usize = 4;

/// Page geometry of one document type.
///
/// Pick one layout per document type and use it for every document of
/// that type; the single-page threshold is meant to be 2 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintLayout {
    /// Maximum number of line items on one page.
    pub page_capacity: usize,
    /// Documents with at most this many items print on one page.
    /// Values below [`RESERVED_TAIL`] behave as [`RESERVED_TAIL`].
    pub single_page_threshold: usize,
}

impl PrintLayout {
    /// A layout with the given capacity and the invoice threshold.
    pub fn new(page_capacity: usize) -> Self {
        Self {
            page_capacity,
            single_page_threshold: INVOICE_SINGLE_PAGE_THRESHOLD,
        }
    }

    /// The printed invoice layout (13 lines per page, single page up to 4 items).
    pub fn invoice() -> Self {
        Self::new(INVOICE_PAGE_CAPACITY)
    }

    pub fn single_page_threshold(mut self, threshold: usize) -> Self {
        self.single_page_threshold = threshold;
        self
    }

    /// Reject a zero page capacity.
    pub fn validate(&self) -> Result<(), FactureError> {
        if self.page_capacity == 0 {
            return Err(FactureError::InvalidCapacity(ValidationError::capacity(
                "layout.page_capacity",
                "page capacity must be positive",
            )));
        }
        Ok(())
    }

    /// Threshold actually applied by the planner.
    pub(crate) fn effective_threshold(&self) -> usize {
        self.single_page_threshold.max(RESERVED_TAIL)
    }
}

impl Default for PrintLayout {
    fn default() -> Self {
        Self::invoice()
    }
}
