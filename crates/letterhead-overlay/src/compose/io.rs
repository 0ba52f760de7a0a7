//! Document I/O for composition

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Decode a PDF document held in memory
pub fn load_pdf_bytes(bytes: &[u8]) -> Result<Document> {
    Ok(Document::load_mem(bytes)?)
}

/// Serialize a document to PDF bytes
pub fn save_pdf_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || load_pdf_bytes(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Save a document to disk
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || save_pdf_bytes(&mut doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
