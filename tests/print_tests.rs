use facture::core::*;
use facture::print::*;
use rust_decimal_macros::dec;

fn items(n: usize) -> Vec<LineItem> {
    (1..=n)
        .map(|i| {
            LineItemBuilder::new(format!("{i}"), format!("Article {i}"), dec!(1), dec!(100)).build()
        })
        .collect()
}

fn sizes(pages: &[Page<'_>]) -> Vec<usize> {
    pages.iter().map(|p| p.items().len()).collect()
}

fn ids(pages: &[Page<'_>]) -> Vec<String> {
    pages
        .iter()
        .flat_map(|p| p.items())
        .map(|item| item.id.clone())
        .collect()
}

// --- Worked scenarios ---

#[test]
fn ten_items_capacity_thirteen_threshold_four() {
    let items = items(10);
    let layout = PrintLayout::new(13).single_page_threshold(4);
    let pages = paginate_with(&items, &layout).unwrap();

    assert_eq!(sizes(&pages), [8, 2]);
    assert_eq!(pages[0].footer(), "Page 1 / 2");
    assert!(!pages[0].is_final());
    assert!(pages[1].is_final());
    assert_eq!(pages[1].items()[0].id, "9");
    assert_eq!(pages[1].items()[1].id, "10");
}

#[test]
fn three_items_threshold_four() {
    let items = items(3);
    let pages = paginate_with(&items, &PrintLayout::invoice()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].items().len(), 3);
    assert!(pages[0].is_final());
}

// --- Thresholds ---

#[test]
fn threshold_boundary() {
    let layout = PrintLayout::invoice();

    let four = items(4);
    assert_eq!(sizes(&paginate_with(&four, &layout).unwrap()), [4]);

    let five = items(5);
    assert_eq!(sizes(&paginate_with(&five, &layout).unwrap()), [3, 2]);
}

#[test]
fn threshold_two_layout() {
    let layout = PrintLayout::new(13).single_page_threshold(2);

    let two = items(2);
    assert_eq!(sizes(&paginate_with(&two, &layout).unwrap()), [2]);

    let four = items(4);
    assert_eq!(sizes(&paginate_with(&four, &layout).unwrap()), [2, 2]);
}

// --- Balancing ---

#[test]
fn long_invoice_spreads_evenly() {
    // 40 main items, capacity 13 → 4 pages of 10
    let items = items(42);
    let pages = paginate(&items, 13).unwrap();
    assert_eq!(sizes(&pages), [10, 10, 10, 10, 2]);
}

#[test]
fn full_pages_when_main_section_divides_evenly() {
    let items = items(28);
    let pages = paginate(&items, 13).unwrap();
    assert_eq!(sizes(&pages), [13, 13, 2]);
}

#[test]
fn capacity_one() {
    let items = items(6);
    let pages = paginate(&items, 1).unwrap();
    assert_eq!(sizes(&pages), [1, 1, 1, 1, 2]);
    assert_eq!(ids(&pages), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn order_is_preserved() {
    let items = items(37);
    let pages = paginate(&items, 9).unwrap();
    let expected: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids(&pages), expected);
}

// --- Layout config ---

#[test]
fn layout_loads_from_json() {
    let layout: PrintLayout = serde_json::from_str(r#"{ "page_capacity": 18 }"#).unwrap();
    assert_eq!(layout.page_capacity, 18);
    assert_eq!(layout.single_page_threshold, INVOICE_SINGLE_PAGE_THRESHOLD);

    let layout: PrintLayout = serde_json::from_str("{}").unwrap();
    assert_eq!(layout, PrintLayout::invoice());
}

#[test]
fn zero_capacity_is_invalid() {
    let err = paginate(&items(3), 0).unwrap_err();
    assert!(matches!(err, FactureError::InvalidCapacity(_)));
}

// --- Print plan ---

#[test]
fn print_plan_puts_totals_on_last_page() {
    let items = items(20);
    let rates = RateConfigBuilder::new().refund_percent(dec!(5)).build();
    let plan = PrintPlan::build(&items, &rates, &PrintLayout::invoice()).unwrap();

    assert_eq!(sizes(plan.pages()), [9, 9, 2]);
    assert_eq!(plan.final_page().number(), 3);

    // 2000 − 5 % R.G. = 1900; TVA 361; TTC 2261
    assert_eq!(plan.summary().total_ttc, dec!(2261));
    let labels: Vec<&str> = plan.rows().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Total brut", "R.G. (5 %)", "Total HT", "TVA (19 %)", "Total TTC"]
    );
    insta::assert_snapshot!(
        plan.total_in_words(),
        @"Arrêtée la présente facture à la somme de : deux mille deux cent soixante et un dinars et zéro centime"
    );
}

#[test]
fn print_plan_for_empty_invoice() {
    let plan = PrintPlan::build(&[], &RateConfig::default(), &PrintLayout::invoice()).unwrap();
    assert_eq!(plan.pages().len(), 1);
    assert!(plan.final_page().items().is_empty());
    assert_eq!(*plan.summary(), BillingSummary::ZERO);
}
