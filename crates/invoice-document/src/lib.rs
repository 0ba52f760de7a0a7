mod constants;
mod csv;
mod fonts;
pub mod format;
mod header;
pub mod layout;
mod ledger;
mod options;
mod pdf;
mod table;
mod types;

pub use crate::csv::{load_table_from_csv, parse_table};
pub use header::{DEFAULT_INVOICE_NUMBER, InvoiceHeader};
pub use layout::{ContentDocument, ContentPage, build};
pub use ledger::{compute, compute_line};
pub use options::*;
pub use pdf::{generate_pdf, render_pdf_bytes};
pub use table::{
    HEADER_COLUMNS, ITEM_COLUMNS, RecordTable, header_from_table, items_from_table,
    validate_schema,
};
pub use types::*;
