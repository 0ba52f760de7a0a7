//! PDF object construction for composed pages
//!
//! - Creating Form XObjects from letterhead and invoice pages
//! - Building the composed output pages
//! - Deep copying PDF objects between documents
//! - Carrying page annotations over

mod annots;
mod page;
mod xobject;

pub use annots::copy_page_annotations;
pub use page::*;
pub use xobject::{copy_object_deep, create_page_xobject, get_page_dimensions, inherited_attribute};
