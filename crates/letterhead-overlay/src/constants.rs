//! Shared constants for page composition

/// Default page width in points (US Letter: 8.5" × 11"), used when a page
/// carries no MediaBox anywhere in its page tree
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

/// Resource name of the letterhead form on a composed page
pub const BACKGROUND_XOBJECT: &str = "Letterhead";

/// Resource name of the invoice form on a composed page
pub const CONTENT_XOBJECT: &str = "Invoice";

/// Letterhead page attributes copied onto the composed page
pub const GEOMETRY_ATTRIBUTES: [&[u8]; 3] = [b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains
pub const MAX_PAGE_TREE_DEPTH: usize = 64;
