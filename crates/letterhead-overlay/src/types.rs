use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invoice PDF contains no pages")]
    EmptyContent,
    #[error("Malformed page tree: {0}")]
    PageTree(String),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
