use facture::core::*;
use facture::print::*;
use rust_decimal_macros::dec;

fn main() {
    // A works invoice long enough to span several printed pages
    let mut items = Vec::new();
    for i in 1..=22 {
        items.push(
            LineItemBuilder::new(
                i.to_string(),
                format!("Fourniture lot {i}"),
                dec!(4) + rust_decimal::Decimal::from(i),
                dec!(1250.75),
            )
            .build(),
        );
    }
    items.push(
        LineItemBuilder::new("23", "Transport et déchargement", dec!(1), dec!(18000))
            .amount(dec!(15000))
            .build(),
    );

    let rates = RateConfigBuilder::new()
        .discount_percent(dec!(5))
        .refund_percent(dec!(5))
        .stamp_tax_percent(dec!(1))
        .build();

    let plan = match PrintPlan::build(&items, &rates, &PrintLayout::invoice()) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("cannot print invoice: {err}");
            std::process::exit(1);
        }
    };

    for page in plan.pages() {
        println!("=== FACTURE N° FA-2024-0042 ===");
        println!("{:<4} {:<30} {:>6} {:>14} {:>16}", "N°", "Désignation", "Qté", "P.U.", "Montant");
        for item in page.items() {
            println!(
                "{:<4} {:<30} {:>6} {:>14} {:>16}",
                item.id,
                item.designation,
                item.quantity,
                format_amount(item.unit_price),
                format_amount(item.amount)
            );
        }
        if page.is_final() {
            println!("---");
            for row in plan.rows() {
                println!("{:>50} {:>20}", row.label, format_amount(row.amount));
            }
            println!();
            println!("{}", plan.total_in_words());
        }
        println!("{:>72}", page.footer());
        println!();
    }
}
