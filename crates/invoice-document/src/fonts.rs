//! Embedded typeface and glyph metrics
//!
//! Text is drawn with DejaVu Sans embedded as a composite font, so every
//! Unicode character the font covers (including `€`) ends up in the PDF with a
//! `ToUnicode` map. Layout measures text with the same advances the renderer
//! draws with.

use crate::constants::*;
use crate::layout::FontWeight;
use crate::types::{InvoiceError, Result};
use printpdf::ParsedFont;
use std::cell::RefCell;
use std::rc::Rc;

const REGULAR_TTF: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");
const BOLD_TTF: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

thread_local! {
    static TYPEFACE: RefCell<Option<Rc<Typeface>>> = const { RefCell::new(None) };
}

/// Regular and bold faces of the invoice typeface
pub(crate) struct Typeface {
    pub regular: ParsedFont,
    pub bold: ParsedFont,
}

impl Typeface {
    fn load() -> Result<Self> {
        Ok(Self {
            regular: parse_font(REGULAR_TTF)?,
            bold: parse_font(BOLD_TTF)?,
        })
    }

    /// The typeface parsed once per thread
    pub fn shared() -> Result<Rc<Self>> {
        TYPEFACE.with(|cell| {
            if let Some(typeface) = cell.borrow().as_ref() {
                return Ok(Rc::clone(typeface));
            }
            let typeface = Rc::new(Self::load()?);
            *cell.borrow_mut() = Some(Rc::clone(&typeface));
            Ok(typeface)
        })
    }

    pub fn font(&self, weight: FontWeight) -> &ParsedFont {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Advance width of `text` in em units
    pub fn text_width_em(&self, text: &str, weight: FontWeight) -> f32 {
        let font = self.font(weight);
        let units_per_em = f32::from(font.font_metrics.units_per_em.max(1));

        text.chars()
            .map(|ch| {
                let advance = match font.lookup_glyph_index(ch as u32) {
                    // Glyphs without an outline (space) have no decoded record
                    Some(gid) => match font.get_horizontal_advance(gid) {
                        0 if ch.is_whitespace() => font.space_width.unwrap_or(0) as f32,
                        advance => f32::from(advance),
                    },
                    None => 0.0,
                };
                if advance > 0.0 {
                    advance / units_per_em
                } else {
                    FALLBACK_CHAR_WIDTH_EM
                }
            })
            .sum()
    }
}

fn parse_font(bytes: &[u8]) -> Result<ParsedFont> {
    let mut warnings = Vec::new();
    ParsedFont::from_bytes(bytes, 0, &mut warnings)
        .ok_or_else(|| InvoiceError::Pdf("Failed to parse font".to_string()))
}

/// Rendered width of `text` (mm)
pub fn text_width_mm(text: &str, size_pt: f32, weight: FontWeight) -> f32 {
    let em = match Typeface::shared() {
        Ok(typeface) => typeface.text_width_em(text, weight),
        Err(_) => text.chars().count() as f32 * FALLBACK_CHAR_WIDTH_EM,
    };
    pt_to_mm(em * size_pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typeface_parses() {
        let typeface = Typeface::shared().unwrap();
        assert!(typeface.regular.lookup_glyph_index('€' as u32).is_some());
        assert!(typeface.bold.lookup_glyph_index('€' as u32).is_some());
    }

    #[test]
    fn test_glyph_widths_differ() {
        let typeface = Typeface::shared().unwrap();
        let dot = typeface.text_width_em(".", FontWeight::Regular);
        let zero = typeface.text_width_em("0", FontWeight::Regular);
        let wide = typeface.text_width_em("W", FontWeight::Regular);
        assert!(dot < zero);
        assert!(zero < wide);
    }

    #[test]
    fn test_space_has_width() {
        let typeface = Typeface::shared().unwrap();
        let space = typeface.text_width_em(" ", FontWeight::Regular);
        assert!(space > 0.2 && space < 0.5, "space width {space}");
    }

    #[test]
    fn test_bold_is_wider() {
        let typeface = Typeface::shared().unwrap();
        assert!(
            typeface.text_width_em("1.210,00", FontWeight::Bold)
                > typeface.text_width_em("1.210,00", FontWeight::Regular)
        );
    }

    #[test]
    fn test_digits_share_width() {
        // Tabular figures keep right-aligned amounts flush
        let typeface = Typeface::shared().unwrap();
        let a = typeface.text_width_em("€ 1.111,11", FontWeight::Regular);
        let b = typeface.text_width_em("€ 9.999,99", FontWeight::Regular);
        assert!((a - b).abs() < 1e-6);
    }
}
