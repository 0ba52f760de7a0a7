use invoice_document::*;
use proptest::prelude::*;

#[test]
fn test_consulting_scenario() {
    let items = vec![LineItemRaw::new("Consulting", 10.0, 100.0, 21.0)];
    let (computed, totals) = compute(&items, ItemMode::Strict).unwrap();

    assert_eq!(computed.len(), 1);
    assert_eq!(computed[0].line_total_excl, 1000.0);
    assert_eq!(computed[0].vat_amount, 210.0);
    assert_eq!(computed[0].line_total_incl, 1210.0);

    assert_eq!(
        totals,
        Totals {
            subtotal_excl: 1000.0,
            total_vat: 210.0,
            grand_total: 1210.0,
        }
    );
    assert_eq!(format::format_money(totals.grand_total, "€"), "€ 1.210,00");
}

#[test]
fn test_mixed_vat_rates() {
    let items = vec![
        LineItemRaw::new("Books", 3.0, 20.0, 9.0),
        LineItemRaw::new("Software", 1.0, 500.0, 21.0),
        LineItemRaw::new("Exempt service", 2.0, 75.0, 0.0),
    ];
    let (computed, totals) = compute(&items, ItemMode::Strict).unwrap();

    assert_eq!(computed[0].vat_amount, 5.4);
    assert_eq!(totals.subtotal_excl, 710.0);
    assert!((totals.total_vat - 110.4).abs() < 1e-9);
    assert!((totals.grand_total - 820.4).abs() < 1e-9);
}

#[test]
fn test_items_keep_input_order() {
    let items = vec![
        LineItemRaw::new("b", 1.0, 1.0, 0.0),
        LineItemRaw::new("a", 1.0, 1.0, 0.0),
    ];
    let (computed, _) = compute(&items, ItemMode::Lenient).unwrap();
    let names: Vec<&str> = computed.iter().map(|c| c.raw.description.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_zero_items_strict_and_lenient() {
    assert!(matches!(
        compute(&[], ItemMode::Strict),
        Err(InvoiceError::EmptyInput)
    ));

    let (computed, totals) = compute(&[], ItemMode::Lenient).unwrap();
    assert!(computed.is_empty());
    assert_eq!(totals.subtotal_excl, 0.0);
    assert_eq!(totals.total_vat, 0.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn test_coerced_values_flow_into_totals() {
    let table = RecordTable::new(ITEM_COLUMNS)
        .with_row(["Consulting", "10", "100", "21"])
        .with_row(["Broken row", "x", "100", "21"]);
    let raw = items_from_table(&table, NumberPolicy::Lenient).unwrap();
    let (_, totals) = compute(&raw, ItemMode::Strict).unwrap();
    assert_eq!(totals.grand_total, 1210.0);
}

fn line_item() -> impl Strategy<Value = LineItemRaw> {
    (0.0f64..1_000.0, -500.0f64..10_000.0, 0.0f64..100.0)
        .prop_map(|(qty, price, vat)| LineItemRaw::new("item", qty, price, vat))
}

proptest! {
    #[test]
    fn prop_line_incl_is_excl_plus_vat(item in line_item()) {
        let line = compute_line(&item);
        prop_assert_eq!(line.line_total_incl, line.line_total_excl + line.vat_amount);
    }

    #[test]
    fn prop_totals_are_consistent(items in prop::collection::vec(line_item(), 0..60)) {
        let (computed, totals) = compute(&items, ItemMode::Lenient).unwrap();

        prop_assert_eq!(totals.grand_total, totals.subtotal_excl + totals.total_vat);

        let excl_sum: f64 = computed.iter().map(|c| c.line_total_excl).sum();
        prop_assert_eq!(totals.subtotal_excl, excl_sum);

        let incl_sum: f64 = computed.iter().map(|c| c.line_total_incl).sum();
        prop_assert!((totals.grand_total - incl_sum).abs() < 0.005);
    }

    #[test]
    fn prop_formatted_total_matches_parts(items in prop::collection::vec(line_item(), 1..20)) {
        let (_, totals) = compute(&items, ItemMode::Strict).unwrap();
        let cents = |v: f64| (v * 100.0).round();
        let diff = cents(totals.grand_total) - (cents(totals.subtotal_excl) + cents(totals.total_vat));
        prop_assert!(diff.abs() <= 1.0);
    }
}
