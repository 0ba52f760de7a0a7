use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Missing required columns in {table} table: {}", .missing.join(", "))]
    Schema {
        table: &'static str,
        missing: Vec<String>,
    },
    #[error("Invalid number in row {row}, column '{column}': '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("Invoice has no line items")]
    EmptyInput,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;

/// One invoice row as read from the item table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemRaw {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Percentage, e.g. `21.0` for 21%. Not clamped.
    pub vat_pct: f64,
}

impl LineItemRaw {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64, vat_pct: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            vat_pct,
        }
    }
}

/// A line item with its derived amounts.
///
/// `line_total_incl` is always `line_total_excl + vat_amount` as computed in
/// f64; nothing is rounded until the amounts are formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemComputed {
    pub raw: LineItemRaw,
    pub line_total_excl: f64,
    pub vat_amount: f64,
    pub line_total_incl: f64,
}

/// Aggregate amounts over all line items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal_excl: f64,
    pub total_vat: f64,
    pub grand_total: f64,
}
