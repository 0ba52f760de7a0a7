//! Invoice composition: line items and letterheads in, finished PDF out
//!
//! Two entry modes:
//! - [`overlay_bytes`] places an existing invoice PDF on a letterhead
//! - [`generate_invoice`] builds the invoice from header and item tables
//!   first, then places it on the letterhead when one is given

mod generate;
mod overlay;
mod types;

pub use generate::{
    InvoiceSources, PreparedInvoice, generate_invoice, generate_invoice_async,
    generate_invoice_files, prepare,
};
pub use overlay::{OVERLAY_FILENAME, overlay_bytes, overlay_bytes_async, overlay_files};
pub use types::*;

// Re-export types from library crates
pub use invoice_document::{
    InvoiceHeader, InvoiceOptions, ItemMode, LineItemComputed, LineItemRaw, NumberPolicy,
    PaperType, RecordTable, Totals, format,
};
pub use letterhead_overlay::template_page_index;
