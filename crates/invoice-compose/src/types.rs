use invoice_document::InvoiceError;
use letterhead_overlay::OverlayError;
use thiserror::Error;

/// Every way a composition run can fail.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("{0}")]
    Schema(String),
    #[error("Invoice PDF contains no pages")]
    EmptyContent,
    #[error("Invoice has no line items")]
    EmptyInput,
    #[error("Could not compose invoice: {0}")]
    Composition(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

impl From<InvoiceError> for ComposeError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::Schema { .. } | InvoiceError::InvalidNumber { .. } => {
                ComposeError::Schema(err.to_string())
            }
            InvoiceError::Csv(_) => ComposeError::Schema(err.to_string()),
            InvoiceError::EmptyInput => ComposeError::EmptyInput,
            InvoiceError::Pdf(msg) => ComposeError::Composition(msg),
            InvoiceError::Config(msg) => ComposeError::Config(msg),
            InvoiceError::Io(e) => ComposeError::Io(e),
            InvoiceError::TaskJoin(e) => ComposeError::TaskJoin(e),
        }
    }
}

impl From<OverlayError> for ComposeError {
    fn from(err: OverlayError) -> Self {
        match err {
            OverlayError::EmptyContent => ComposeError::EmptyContent,
            OverlayError::Io(e) => ComposeError::Io(e),
            OverlayError::TaskJoin(e) => ComposeError::TaskJoin(e),
            OverlayError::Pdf(_) | OverlayError::PageTree(_) => {
                ComposeError::Composition(err.to_string())
            }
        }
    }
}

/// Finished invoice ready to hand to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceOutput {
    pub bytes: Vec<u8>,
    /// Suggested download name
    pub filename: String,
    pub page_count: usize,
}

impl InvoiceOutput {
    /// Write the PDF bytes to `path`.
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        tokio::fs::write(path, &self.bytes).await?;
        Ok(())
    }
}
