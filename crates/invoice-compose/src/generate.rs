//! Mode B: invoice derived from header and item tables, then composed

use crate::overlay::overlay_bytes;
use crate::types::*;
use invoice_document::{
    InvoiceHeader, InvoiceOptions, LineItemComputed, RecordTable, Totals, build, compute,
    header_from_table, items_from_table, load_table_from_csv, render_pdf_bytes, validate_schema,
};
use std::path::{Path, PathBuf};

/// Header, computed items and totals, before layout
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedInvoice {
    pub header: InvoiceHeader,
    pub items: Vec<LineItemComputed>,
    pub totals: Totals,
}

/// Validate both tables and compute the ledger.
///
/// The schema of both tables is checked before any row is read, so a missing
/// column is reported even when the data is otherwise broken.
pub fn prepare(
    header_table: &RecordTable,
    items_table: &RecordTable,
    options: &InvoiceOptions,
) -> Result<PreparedInvoice> {
    validate_schema(header_table, items_table)?;

    let header = header_from_table(header_table)?;
    let raw_items = items_from_table(items_table, options.number_policy)?;
    let (items, totals) = compute(&raw_items, options.item_mode)?;

    Ok(PreparedInvoice {
        header,
        items,
        totals,
    })
}

/// Build, render and optionally compose an invoice from its tables.
///
/// Without a letterhead the rendered invoice is returned as is.
pub fn generate_invoice(
    header_table: &RecordTable,
    items_table: &RecordTable,
    template: Option<&[u8]>,
    options: &InvoiceOptions,
) -> Result<InvoiceOutput> {
    let prepared = prepare(header_table, items_table, options)?;

    let document = build(&prepared.header, &prepared.items, &prepared.totals, options)?;
    let rendered = render_pdf_bytes(&document)?;
    let filename = prepared.header.suggested_filename();

    let output = match template {
        Some(template) => {
            let composed = overlay_bytes(&rendered, template)?;
            InvoiceOutput {
                filename,
                ..composed
            }
        }
        None => InvoiceOutput {
            bytes: rendered,
            filename,
            page_count: document.page_count(),
        },
    };

    log::info!(
        "Generated {} ({} page(s), total {:.2})",
        output.filename,
        output.page_count,
        prepared.totals.grand_total
    );

    Ok(output)
}

/// [`generate_invoice`] in a blocking task
pub async fn generate_invoice_async(
    header_table: RecordTable,
    items_table: RecordTable,
    template: Option<Vec<u8>>,
    options: InvoiceOptions,
) -> Result<InvoiceOutput> {
    tokio::task::spawn_blocking(move || {
        generate_invoice(&header_table, &items_table, template.as_deref(), &options)
    })
    .await?
}

/// Input files for Mode B
#[derive(Debug, Clone)]
pub struct InvoiceSources {
    pub header_csv: PathBuf,
    pub items_csv: PathBuf,
    pub letterhead_pdf: Option<PathBuf>,
}

impl InvoiceSources {
    pub fn new(header_csv: impl AsRef<Path>, items_csv: impl AsRef<Path>) -> Self {
        Self {
            header_csv: header_csv.as_ref().to_owned(),
            items_csv: items_csv.as_ref().to_owned(),
            letterhead_pdf: None,
        }
    }

    pub fn with_letterhead(mut self, letterhead_pdf: impl AsRef<Path>) -> Self {
        self.letterhead_pdf = Some(letterhead_pdf.as_ref().to_owned());
        self
    }

    /// Load both CSV tables
    pub async fn load_tables(&self) -> Result<(RecordTable, RecordTable)> {
        let header = load_table_from_csv(&self.header_csv).await?;
        let items = load_table_from_csv(&self.items_csv).await?;
        Ok((header, items))
    }
}

/// Load the CSV tables and optional letterhead from disk and generate
pub async fn generate_invoice_files(
    sources: &InvoiceSources,
    options: InvoiceOptions,
) -> Result<InvoiceOutput> {
    let (header, items) = sources.load_tables().await?;
    let template = match &sources.letterhead_pdf {
        Some(path) => Some(tokio::fs::read(path).await?),
        None => None,
    };

    generate_invoice_async(header, items, template, options).await
}
