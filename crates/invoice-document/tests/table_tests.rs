use invoice_document::*;

fn header_table() -> RecordTable {
    RecordTable::new(["key", "value"])
        .with_row(["invoice_number", "2025-0007"])
        .with_row(["client_name", "Acme BV"])
}

fn items_table() -> RecordTable {
    RecordTable::new(["description", "qty", "unit_price", "vat_pct"])
        .with_row(["Consulting", "10", "100", "21"])
}

#[test]
fn test_validate_schema_ok() {
    assert!(validate_schema(&header_table(), &items_table()).is_ok());
}

#[test]
fn test_missing_vat_column_is_schema_error() {
    let items = RecordTable::new(["description", "qty", "unit_price"])
        .with_row(["Consulting", "10", "100"]);

    match validate_schema(&header_table(), &items) {
        Err(InvoiceError::Schema { table, missing }) => {
            assert_eq!(table, "items");
            assert_eq!(missing, vec!["vat_pct".to_string()]);
        }
        other => panic!("Expected Schema error, got {:?}", other),
    }
}

#[test]
fn test_missing_header_columns_reports_all() {
    let header = RecordTable::new(["name"]);
    match validate_schema(&header, &items_table()) {
        Err(InvoiceError::Schema { table, missing }) => {
            assert_eq!(table, "header");
            assert_eq!(missing, vec!["key".to_string(), "value".to_string()]);
        }
        other => panic!("Expected Schema error, got {:?}", other),
    }
}

#[test]
fn test_schema_error_message_is_readable() {
    let items = RecordTable::new(["description"]);
    let err = items_from_table(&items, NumberPolicy::Lenient).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required columns in items table: qty, unit_price, vat_pct"
    );
}

#[test]
fn test_columns_match_case_insensitively_in_any_order() {
    let items = RecordTable::new([" VAT_PCT", "Unit_Price", "extra", "Qty ", "Description"])
        .with_row(["9", "12.5", "ignored", "2", "Paper"]);

    let raw = items_from_table(&items, NumberPolicy::Lenient).unwrap();
    assert_eq!(raw, vec![LineItemRaw::new("Paper", 2.0, 12.5, 9.0)]);
}

#[test]
fn test_non_numeric_values_coerce_to_zero() {
    let items = RecordTable::new(ITEM_COLUMNS)
        .with_row(["Hours", "n/a", "", "twenty-one"])
        .with_row(["Travel", "1", "NaN", "21"]);

    let raw = items_from_table(&items, NumberPolicy::Lenient).unwrap();
    assert_eq!(raw[0], LineItemRaw::new("Hours", 0.0, 0.0, 0.0));
    assert_eq!(raw[1], LineItemRaw::new("Travel", 1.0, 0.0, 21.0));
}

#[test]
fn test_short_rows_read_as_empty_cells() {
    let items = RecordTable::new(ITEM_COLUMNS).with_row(["Setup", "1"]);
    let raw = items_from_table(&items, NumberPolicy::Lenient).unwrap();
    assert_eq!(raw, vec![LineItemRaw::new("Setup", 1.0, 0.0, 0.0)]);
}

#[test]
fn test_strict_numbers_reject_bad_cell() {
    let items = RecordTable::new(ITEM_COLUMNS)
        .with_row(["Hours", "2", "50", "21"])
        .with_row(["Travel", "1", "abc", "21"]);

    match items_from_table(&items, NumberPolicy::Strict) {
        Err(InvoiceError::InvalidNumber { row, column, value }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "unit_price");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected InvalidNumber error, got {:?}", other),
    }
}

#[test]
fn test_blank_rows_skipped() {
    let items = RecordTable::new(ITEM_COLUMNS)
        .with_row(["", "", "", ""])
        .with_row(["Hours", "2", "50", "21"]);
    let raw = items_from_table(&items, NumberPolicy::Strict).unwrap();
    assert_eq!(raw.len(), 1);
}

#[test]
fn test_header_from_table() {
    let header = header_from_table(&header_table().with_row(["po_number", "PO-1"])).unwrap();
    assert_eq!(header.invoice_number, "2025-0007");
    assert_eq!(header.client_name, "Acme BV");
    assert_eq!(header.extra.get("po_number").map(String::as_str), Some("PO-1"));
    assert!(header.invoice_date.is_empty());
}

#[test]
fn test_header_without_invoice_number_uses_default() {
    let header = header_from_table(&RecordTable::new(["key", "value"])).unwrap();
    assert_eq!(header.invoice_number, DEFAULT_INVOICE_NUMBER);
    assert_eq!(header.suggested_filename(), "invoice_0000.pdf");
}

#[test]
fn test_parse_table_from_csv_text() {
    let data = b"description,qty,unit_price,vat_pct\n\"Design, logo\",1.5,80,21\nHosting,12\n";
    let table = parse_table(data).unwrap();

    assert_eq!(table.columns, ITEM_COLUMNS);
    assert_eq!(table.rows.len(), 2);

    let raw = items_from_table(&table, NumberPolicy::Lenient).unwrap();
    assert_eq!(raw[0], LineItemRaw::new("Design, logo", 1.5, 80.0, 21.0));
    assert_eq!(raw[1], LineItemRaw::new("Hosting", 12.0, 0.0, 0.0));
}

#[tokio::test]
async fn test_load_table_from_csv() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "key,value\ninvoice_number,2025-0007\n").unwrap();

    let table = load_table_from_csv(temp.path()).await.unwrap();
    let header = header_from_table(&table).unwrap();
    assert_eq!(header.invoice_number, "2025-0007");
}

#[tokio::test]
async fn test_load_table_missing_file() {
    let result = load_table_from_csv("/nonexistent/items.csv").await;
    assert!(matches!(result, Err(InvoiceError::Io(_))));
}

#[test]
fn test_parse_table_rejects_non_utf8() {
    let data = b"description,qty,unit_price,vat_pct\nCaf\xe9,1,80,9\n";
    assert!(matches!(parse_table(data), Err(InvoiceError::Csv(_))));
}

#[tokio::test]
async fn test_load_latin1_csv_is_csv_error() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), b"key,value\nclient_name,Caf\xe9 M\xfcller\n").unwrap();

    let result = load_table_from_csv(temp.path()).await;
    assert!(matches!(result, Err(InvoiceError::Csv(_))));
}
