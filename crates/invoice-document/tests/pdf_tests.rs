use invoice_document::*;
use lopdf::Document;

fn content(count: usize) -> ContentDocument {
    let header = InvoiceHeader::from_pairs([("invoice_number", "2025-0007")]);
    let raw: Vec<LineItemRaw> = (0..count)
        .map(|i| LineItemRaw::new(format!("Item {}", i), 2.5, 19.99, 21.0))
        .collect();
    let options = InvoiceOptions::default();
    let (computed, totals) = compute(&raw, options.item_mode).unwrap();
    build(&header, &computed, &totals, &options).unwrap()
}

#[test]
fn test_render_single_page() {
    let doc = content(1);
    let bytes = render_pdf_bytes(&doc).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    let loaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
}

#[test]
fn test_render_page_count_matches_layout() {
    let doc = content(150);
    assert!(doc.page_count() > 1);

    let bytes = render_pdf_bytes(&doc).unwrap();
    let loaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(loaded.get_pages().len(), doc.page_count());
}

#[test]
fn test_render_empty_document_fails() {
    let mut doc = content(1);
    doc.pages.clear();
    assert!(matches!(render_pdf_bytes(&doc), Err(InvoiceError::Pdf(_))));
}

#[tokio::test]
async fn test_generate_pdf_to_file() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    generate_pdf(&content(3), temp.path()).await.unwrap();

    let loaded = Document::load(temp.path()).unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
}

#[test]
fn test_rendered_text_keeps_non_ascii_characters() {
    let header = InvoiceHeader::from_pairs([
        ("invoice_number", "2025-0008"),
        ("client_name", "Café Zürich"),
    ]);
    let raw = vec![LineItemRaw::new("Consulting", 10.0, 100.0, 21.0)];
    let options = InvoiceOptions::default();
    let (computed, totals) = compute(&raw, options.item_mode).unwrap();
    let doc = build(&header, &computed, &totals, &options).unwrap();

    let bytes = render_pdf_bytes(&doc).unwrap();
    let loaded = Document::load_mem(&bytes).unwrap();
    let text = loaded.extract_text(&[1]).unwrap();

    assert!(text.contains("€ 1.210,00"), "extracted text: {text}");
    assert!(text.contains("€ 100,00"), "extracted text: {text}");
    assert!(text.contains("Café Zürich"), "extracted text: {text}");
    assert!(!text.contains('â'), "extracted text: {text}");
}
