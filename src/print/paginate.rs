use serde::Serialize;
use tracing::{debug, warn};

use super::layout::{PrintLayout, RESERVED_TAIL};
use crate::core::{LineItem, Result};

/// One printed page: a contiguous run of the invoice's line items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Page<'a> {
    items: &'a [LineItem],
    number: usize,
    page_count: usize,
    is_final: bool,
}

impl<'a> Page<'a> {
    fn new(items: &'a [LineItem], number: usize, page_count: usize) -> Self {
        Self {
            items,
            number,
            page_count,
            is_final: number == page_count,
        }
    }

    /// A one-page document holding every item.
    pub(super) fn single(items: &'a [LineItem]) -> Self {
        Self::new(items, 1, 1)
    }

    /// Items printed on this page, in invoice order.
    pub fn items(&self) -> &'a [LineItem] {
        self.items
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Total number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether the totals block and the amount in words follow this page's table.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Footer text, e.g. "Page 1 / 3".
    pub fn footer(&self) -> String {
        format!("Page {} / {}", self.number, self.page_count)
    }
}

/// Split `items` into pages of at most `page_capacity` lines, using the
/// invoice single-page threshold.
pub fn paginate(items: &[LineItem], page_capacity: usize) -> Result<Vec<Page<'_>>> {
    paginate_with(items, &PrintLayout::new(page_capacity))
}

/// Split `items` into pages according to `layout`.
///
/// - At most `single_page_threshold` items: one page holding everything.
/// - Otherwise the last two items get the final page to themselves, and
///   the rest is spread over `ceil(n / capacity)` pages whose sizes differ
///   by at most one, the first pages taking the remainder.
///
/// Only the last page is flagged final. Pages borrow from `items`;
/// concatenating them yields `items` unchanged.
///
/// ```
/// use facture::core::*;
/// use facture::print::paginate;
/// use rust_decimal_macros::dec;
///
/// let items: Vec<_> = (1..=10)
///     .map(|i| LineItemBuilder::new(i.to_string(), "Article", dec!(1), dec!(10)).build())
///     .collect();
///
/// let pages = paginate(&items, 13).unwrap();
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].items().len(), 8);
/// assert_eq!(pages[1].items().len(), 2);
/// assert!(pages[1].is_final());
/// ```
pub fn paginate_with<'a>(items: &'a [LineItem], layout: &PrintLayout) -> Result<Vec<Page<'a>>> {
    layout.validate()?;

    if items.len() <= layout.effective_threshold() {
        debug!(items = items.len(), "single-page document");
        return Ok(vec![Page::single(items)]);
    }

    let (main, tail) = items.split_at(items.len() - RESERVED_TAIL);
    let mut chunks = enforce_capacity(
        split_balanced(main, layout.page_capacity),
        layout.page_capacity,
    );
    chunks.push(tail);

    let page_count = chunks.len();
    debug!(
        items = items.len(),
        pages = page_count,
        capacity = layout.page_capacity,
        "paginated document"
    );

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| Page::new(chunk, i + 1, page_count))
        .collect())
}

/// Split into `ceil(len / capacity)` runs whose lengths differ by at most one.
fn split_balanced(items: &[LineItem], capacity: usize) -> Vec<&[LineItem]> {
    if items.is_empty() {
        return Vec::new();
    }

    let pages = items.len().div_ceil(capacity);
    let base = items.len() / pages;
    let remainder = items.len() % pages;

    let mut chunks = Vec::with_capacity(pages);
    let mut rest = items;
    for i in 0..pages {
        let size = if i < remainder { base + 1 } else { base };
        let (chunk, tail) = rest.split_at(size);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Re-split any run longer than `capacity` into fixed `capacity` slices.
fn enforce_capacity(chunks: Vec<&[LineItem]>, capacity: usize) -> Vec<&[LineItem]> {
    if chunks.iter().all(|c| c.len() <= capacity) {
        return chunks;
    }

    warn!(capacity, "page run exceeds capacity, re-chunking");
    chunks
        .into_iter()
        .flat_map(|chunk| chunk.chunks(capacity))
        .collect()
}
