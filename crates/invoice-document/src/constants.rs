//! Shared constants for invoice layout and rendering
//!
//! Layout works in millimetres; printpdf positions are converted to points
//! at draw time.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Text Metrics
// =============================================================================

/// Advance used for characters the typeface has no glyph for (em)
pub const FALLBACK_CHAR_WIDTH_EM: f32 = 0.6;

/// Line height as a multiple of the font size
pub const LINE_SPACING: f32 = 1.35;

/// Share of the line height above the baseline
pub const BASELINE_RATIO: f32 = 0.75;

// =============================================================================
// Tables
// =============================================================================

/// Vertical padding above and below each table row (mm)
pub const CELL_PADDING_Y_MM: f32 = 1.2;

/// Horizontal padding inside each table cell (mm)
pub const CELL_PADDING_X_MM: f32 = 1.5;

/// The flexible column never shrinks below this width (mm)
pub const MIN_FLEX_COLUMN_MM: f32 = 20.0;

/// Item table column widths (mm); the description column takes the rest
pub const QTY_COLUMN_MM: f32 = 16.0;
pub const UNIT_PRICE_COLUMN_MM: f32 = 30.0;
pub const VAT_COLUMN_MM: f32 = 16.0;
pub const LINE_TOTAL_COLUMN_MM: f32 = 32.0;

/// Width of the totals amount column (mm)
pub const TOTALS_AMOUNT_COLUMN_MM: f32 = 35.0;

// =============================================================================
// Rules and Spacing
// =============================================================================

/// Stroke width of horizontal rules (points)
pub const RULE_THICKNESS_PT: f32 = 0.6;

/// Vertical space taken by a horizontal rule (mm)
pub const RULE_HEIGHT_MM: f32 = 2.0;

/// Gap between the main sections of an invoice (mm)
pub const SECTION_GAP_MM: f32 = 6.0;

/// Gap between related lines inside a section (mm)
pub const SMALL_GAP_MM: f32 = 2.0;
