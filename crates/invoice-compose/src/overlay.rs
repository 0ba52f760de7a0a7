//! Mode A: a ready-made invoice PDF placed on a letterhead

use crate::types::*;
use letterhead_overlay::{Document, compose, load_pdf_bytes};
use std::path::Path;

/// Download name for an invoice composed from an existing PDF
pub const OVERLAY_FILENAME: &str = "invoice_on_letterhead.pdf";

/// Compose invoice PDF bytes onto letterhead PDF bytes.
///
/// The invoice is checked for pages before the letterhead is looked at. A
/// letterhead without pages returns the invoice bytes exactly as given.
pub fn overlay_bytes(content: &[u8], template: &[u8]) -> Result<InvoiceOutput> {
    let content_doc = decode("invoice", content)?;
    let page_count = content_doc.get_pages().len();
    if page_count == 0 {
        return Err(ComposeError::EmptyContent);
    }

    let template_doc = decode("letterhead", template)?;
    let bytes = if template_doc.get_pages().is_empty() {
        log::info!("Letterhead has no pages, returning invoice unchanged");
        content.to_vec()
    } else {
        let mut composed = compose(&content_doc, &template_doc)?;
        composed.to_bytes()?
    };

    Ok(InvoiceOutput {
        bytes,
        filename: OVERLAY_FILENAME.to_string(),
        page_count,
    })
}

/// [`overlay_bytes`] in a blocking task
pub async fn overlay_bytes_async(content: Vec<u8>, template: Vec<u8>) -> Result<InvoiceOutput> {
    tokio::task::spawn_blocking(move || overlay_bytes(&content, &template)).await?
}

/// Read both PDFs from disk and compose them
pub async fn overlay_files(
    content_path: impl AsRef<Path>,
    template_path: impl AsRef<Path>,
) -> Result<InvoiceOutput> {
    let content = tokio::fs::read(content_path.as_ref()).await?;
    let template = tokio::fs::read(template_path.as_ref()).await?;

    overlay_bytes_async(content, template).await
}

fn decode(role: &str, bytes: &[u8]) -> Result<Document> {
    load_pdf_bytes(bytes)
        .map_err(|e| ComposeError::Composition(format!("{} PDF could not be read: {}", role, e)))
}

