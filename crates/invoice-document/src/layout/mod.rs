//! Invoice page layout
//!
//! Turns header fields, computed line items and totals into a
//! [`ContentDocument`]:
//! 1. Identity block (title, supplier, client, invoice details)
//! 2. Item table, continued across pages with its header row repeated
//! 3. Totals block, never split across a page boundary
//! 4. Optional trailing note

mod blocks;
mod flow;

pub use blocks::*;

use crate::constants::*;
use crate::fonts::Typeface;
use crate::format::{format_money, format_percent, format_quantity};
use crate::header::{InvoiceHeader, split_lines};
use crate::options::{InvoiceOptions, PageMargins};
use crate::types::*;
use flow::PageFlow;

/// One content page: blocks stacked top to bottom inside the margins
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentPage {
    pub blocks: Vec<Block>,
}

/// Ordered content pages sharing one page geometry
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    pub title: String,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margins: PageMargins,
    pub pages: Vec<ContentPage>,
}

impl ContentDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lay out an invoice.
///
/// Never fails on an empty item list: the table is then drawn with its
/// header row only.
pub fn build(
    header: &InvoiceHeader,
    items: &[LineItemComputed],
    totals: &Totals,
    options: &InvoiceOptions,
) -> Result<ContentDocument> {
    options.validate()?;
    Typeface::shared()?;

    let (page_width_mm, page_height_mm) = options.paper.dimensions_mm();
    let (content_width, content_height) = options.content_area_mm();
    let mut flow = PageFlow::new(content_width, content_height);

    for block in identity_blocks(header, options) {
        flow.place(block);
    }

    flow.place(Block::Spacer(SECTION_GAP_MM));
    flow.place_table(item_table(items, options));

    flow.place(Block::Spacer(SECTION_GAP_MM));
    flow.place_together(vec![Block::Rule, Block::Table(totals_table(totals, options))]);

    if !header.note.is_empty() {
        flow.place(Block::Spacer(SECTION_GAP_MM));
        for line in wrap_text(
            &header.note,
            content_width,
            options.font_size_pt,
            FontWeight::Regular,
        ) {
            flow.place(Block::Text(TextBlock::new(line, options.font_size_pt)));
        }
    }

    let pages = flow.finish();
    log::info!(
        "Laid out invoice {} with {} line items on {} page(s)",
        header.invoice_number,
        items.len(),
        pages.len()
    );

    Ok(ContentDocument {
        title: format!("{} {}", options.labels.title, header.invoice_number),
        page_width_mm,
        page_height_mm,
        margins: options.margins,
        pages,
    })
}

/// Title, supplier, client and invoice detail blocks
fn identity_blocks(header: &InvoiceHeader, options: &InvoiceOptions) -> Vec<Block> {
    let size = options.font_size_pt;
    let labels = &options.labels;
    let mut blocks = vec![
        Block::Text(TextBlock::new(labels.title.clone(), options.title_font_size_pt).bold()),
        Block::Spacer(SMALL_GAP_MM),
    ];

    // Supplier
    let mut supplier = Vec::new();
    supplier.extend(split_lines(&header.supplier_address).into_iter().map(str::to_string));
    if !header.supplier_vat_id.is_empty() {
        supplier.push(format!("{}: {}", labels.vat_id, header.supplier_vat_id));
    }
    if !header.supplier_iban.is_empty() {
        supplier.push(format!("{}: {}", labels.iban, header.supplier_iban));
    }
    if !header.supplier_name.is_empty() {
        blocks.push(Block::Text(TextBlock::new(header.supplier_name.clone(), size).bold()));
    }
    if !supplier.is_empty() {
        blocks.push(text_lines(supplier, size));
    }

    // Client
    let mut client = Vec::new();
    if !header.client_name.is_empty() {
        client.push(header.client_name.clone());
    }
    client.extend(split_lines(&header.client_address).into_iter().map(str::to_string));
    if !header.client_vat_id.is_empty() {
        client.push(format!("{}: {}", labels.vat_id, header.client_vat_id));
    }
    if !client.is_empty() {
        blocks.push(Block::Spacer(SECTION_GAP_MM));
        blocks.push(Block::Text(TextBlock::new(labels.bill_to.clone(), size).bold()));
        blocks.push(text_lines(client, size));
    }

    // Invoice details
    let mut details = vec![format!(
        "{}: {}",
        labels.invoice_number, header.invoice_number
    )];
    for (label, value) in [
        (&labels.invoice_date, &header.invoice_date),
        (&labels.due_date, &header.due_date),
        (&labels.reference, &header.reference),
    ] {
        if !value.is_empty() {
            details.push(format!("{}: {}", label, value));
        }
    }
    blocks.push(Block::Spacer(SECTION_GAP_MM));
    blocks.push(text_lines(details, size));

    blocks
}

fn text_lines(lines: Vec<String>, size_pt: f32) -> Block {
    Block::Text(TextBlock {
        lines,
        size_pt,
        weight: FontWeight::Regular,
        align: Align::Left,
    })
}

/// Description, quantity, unit price, VAT % and line total excl. VAT
fn item_table(items: &[LineItemComputed], options: &InvoiceOptions) -> TableBlock {
    let labels = &options.labels;
    let currency = options.currency_symbol.as_str();

    TableBlock {
        columns: vec![
            Column::flex(Align::Left),
            Column::fixed(QTY_COLUMN_MM, Align::Right),
            Column::fixed(UNIT_PRICE_COLUMN_MM, Align::Right),
            Column::fixed(VAT_COLUMN_MM, Align::Right),
            Column::fixed(LINE_TOTAL_COLUMN_MM, Align::Right),
        ],
        header: Some(vec![
            labels.description.clone(),
            labels.quantity.clone(),
            labels.unit_price.clone(),
            labels.vat.clone(),
            labels.line_total.clone(),
        ]),
        rows: items
            .iter()
            .map(|item| {
                TableRow::new(vec![
                    item.raw.description.clone(),
                    format_quantity(item.raw.quantity),
                    format_money(item.raw.unit_price, currency),
                    format_percent(item.raw.vat_pct),
                    format_money(item.line_total_excl, currency),
                ])
            })
            .collect(),
        size_pt: options.font_size_pt,
    }
}

/// Subtotal, VAT and grand total, right aligned
fn totals_table(totals: &Totals, options: &InvoiceOptions) -> TableBlock {
    let labels = &options.labels;
    let currency = options.currency_symbol.as_str();

    TableBlock {
        columns: vec![
            Column::flex(Align::Right),
            Column::fixed(TOTALS_AMOUNT_COLUMN_MM, Align::Right),
        ],
        header: None,
        rows: vec![
            TableRow::new(vec![
                labels.subtotal.clone(),
                format_money(totals.subtotal_excl, currency),
            ]),
            TableRow::new(vec![
                labels.total_vat.clone(),
                format_money(totals.total_vat, currency),
            ]),
            TableRow::new(vec![
                labels.grand_total.clone(),
                format_money(totals.grand_total, currency),
            ])
            .bold(),
        ],
        size_pt: options.font_size_pt,
    }
}
