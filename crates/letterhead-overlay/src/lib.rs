pub mod compose;
mod constants;
pub mod render;
mod types;

pub use compose::{
    ComposedDocument, compose, compose_async, load_pdf, load_pdf_bytes, save_pdf,
    save_pdf_bytes, template_page_index,
};
pub use constants::{BACKGROUND_XOBJECT, CONTENT_XOBJECT};
pub use render::get_page_dimensions;
pub use types::*;

pub use lopdf::Document;
