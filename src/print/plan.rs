use tracing::debug;

use super::layout::PrintLayout;
use super::paginate::{Page, paginate_with};
use crate::core::{
    BillingSummary, LineItem, RateConfig, Result, SummaryRow, compute_billing_summary,
    summary_rows,
};
use crate::words::{AmountInWords, CardinalSpeller, French};

/// Everything a renderer needs to print one invoice.
///
/// Pages carry the line items; the summary rows and the total in words go
/// after the table of [`final_page`](Self::final_page) only.
#[derive(Debug, Clone)]
pub struct PrintPlan<'a> {
    pages: Vec<Page<'a>>,
    final_page: Page<'a>,
    summary: BillingSummary,
    rows: Vec<SummaryRow>,
    total_in_words: String,
}

impl<'a> PrintPlan<'a> {
    /// Build a plan with French wording and dinar units.
    ///
    /// Items, rates and layout are all validated before anything is
    /// computed, in that order.
    pub fn build(items: &'a [LineItem], rates: &RateConfig, layout: &PrintLayout) -> Result<Self> {
        Self::build_with(items, rates, layout, &AmountInWords::<French>::new())
    }

    /// Build a plan with a custom amount-in-words formatter.
    pub fn build_with<S: CardinalSpeller>(
        items: &'a [LineItem],
        rates: &RateConfig,
        layout: &PrintLayout,
        words: &AmountInWords<S>,
    ) -> Result<Self> {
        // Items and rates are validated by the calculator, the layout by the paginator.
        let summary = compute_billing_summary(items, rates)?;
        let pages = paginate_with(items, layout)?;
        let final_page = pages
            .last()
            .copied()
            .unwrap_or_else(|| Page::single(items));
        let rows = summary_rows(&summary, rates);
        let total_in_words = words.sentence(summary.total_ttc)?;

        debug!(pages = pages.len(), total_ttc = %summary.total_ttc, "built print plan");

        Ok(Self {
            pages,
            final_page,
            summary,
            rows,
            total_in_words,
        })
    }

    pub fn pages(&self) -> &[Page<'a>] {
        &self.pages
    }

    /// The page followed by the totals block.
    pub fn final_page(&self) -> &Page<'a> {
        &self.final_page
    }

    /// Full-precision totals.
    pub fn summary(&self) -> &BillingSummary {
        &self.summary
    }

    /// Printed totals rows, zero-rate rows already removed.
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn total_in_words(&self) -> &str {
        &self.total_in_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FactureError, LineItemBuilder, RateConfigBuilder};
    use crate::words::CurrencyUnits;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn items(n: usize) -> Vec<LineItem> {
        (1..=n)
            .map(|i| LineItemBuilder::new(format!("{i}"), format!("Article {i}"), dec!(2), dec!(50)).build())
            .collect()
    }

    #[test]
    fn plan_for_ten_items() {
        let items = items(10);
        let plan = PrintPlan::build(&items, &RateConfig::default(), &PrintLayout::invoice()).unwrap();

        assert_eq!(plan.pages().len(), 2);
        assert!(plan.final_page().is_final());
        assert_eq!(plan.summary().total_ttc, dec!(1190));
        assert_eq!(
            plan.total_in_words(),
            "Arrêtée la présente facture à la somme de : \
             mille cent quatre-vingt-dix dinars et zéro centime"
        );
        assert_eq!(plan.rows().len(), 4);
    }

    #[test]
    fn final_page_is_the_last_page() {
        for n in [0, 3, 10, 40] {
            let items = items(n);
            let plan = PrintPlan::build(&items, &RateConfig::default(), &PrintLayout::invoice()).unwrap();
            assert_eq!(plan.pages().last(), Some(plan.final_page()));
            assert_eq!(plan.final_page().number(), plan.pages().len());
        }
    }

    #[test]
    fn overflowing_totals_fail_before_layout() {
        let mut huge = items(2);
        huge[0].amount = Decimal::MAX;
        huge[1].amount = Decimal::MAX;
        let err = PrintPlan::build(&huge, &RateConfig::default(), &PrintLayout::new(0)).unwrap_err();
        assert!(matches!(err, FactureError::InvalidInput(_)));
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn custom_units() {
        let items = items(1);
        let words = AmountInWords::new().units(CurrencyUnits::euro());
        let plan = PrintPlan::build_with(&items, &RateConfig::default(), &PrintLayout::invoice(), &words)
            .unwrap();
        assert!(plan.total_in_words().ends_with("cent dix-neuf euros et zéro centime"));
    }

    #[test]
    fn validation_order_is_items_rates_layout() {
        let mut bad_items = items(2);
        bad_items[1].unit_price = dec!(-1);
        let bad_rates = RateConfigBuilder::new().vat_rate(dec!(1.5)).build();
        let bad_layout = PrintLayout::new(0);

        let err = PrintPlan::build(&bad_items, &bad_rates, &bad_layout).unwrap_err();
        assert!(matches!(err, FactureError::InvalidInput(_)));

        let good_items = items(2);
        let err = PrintPlan::build(&good_items, &bad_rates, &bad_layout).unwrap_err();
        assert!(matches!(err, FactureError::InvalidRate(_)));

        let err = PrintPlan::build(&good_items, &RateConfig::default(), &bad_layout).unwrap_err();
        assert!(matches!(err, FactureError::InvalidCapacity(_)));
    }
}
