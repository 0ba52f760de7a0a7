use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output paper size for generated invoices
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperType {
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperType {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperType::A4 => (210.0, 297.0),
            PaperType::A5 => (148.0, 210.0),
            PaperType::Letter => (215.9, 279.4),
            PaperType::Legal => (215.9, 355.6),
            PaperType::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaperType::A4 => "A4",
            PaperType::A5 => "A5",
            PaperType::Letter => "Letter",
            PaperType::Legal => "Legal",
            PaperType::Custom { .. } => "Custom",
        }
    }
}

/// Blank space around the printable area of every content page.
///
/// Letterheads usually reserve a band at the top and bottom, so the defaults
/// are deeper there than at the sides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageMargins {
    pub top_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
    pub right_mm: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top_mm: 45.0,
            bottom_mm: 30.0,
            left_mm: 20.0,
            right_mm: 20.0,
        }
    }
}

impl PageMargins {
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }
}

/// Whether an invoice without line items is acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemMode {
    /// At least one line item is required
    #[default]
    Strict,
    /// Header/summary-only invoices are allowed; totals are zero
    Lenient,
}

/// How non-numeric quantity, price and VAT cells are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberPolicy {
    /// Missing or unparseable values count as zero
    #[default]
    Lenient,
    /// Missing or unparseable values reject the whole table
    Strict,
}

/// Text printed around the invoice data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Labels {
    pub title: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub reference: String,
    pub vat_id: String,
    pub iban: String,
    pub bill_to: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub vat: String,
    pub line_total: String,
    pub subtotal: String,
    pub total_vat: String,
    pub grand_total: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "INVOICE".to_string(),
            invoice_number: "Invoice number".to_string(),
            invoice_date: "Invoice date".to_string(),
            due_date: "Due date".to_string(),
            reference: "Reference".to_string(),
            vat_id: "VAT ID".to_string(),
            iban: "IBAN".to_string(),
            bill_to: "Bill to".to_string(),
            description: "Description".to_string(),
            quantity: "Qty".to_string(),
            unit_price: "Unit price".to_string(),
            vat: "VAT".to_string(),
            line_total: "Total excl.".to_string(),
            subtotal: "Subtotal excl. VAT".to_string(),
            total_vat: "VAT".to_string(),
            grand_total: "Total".to_string(),
        }
    }
}

/// Invoice generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InvoiceOptions {
    // Page geometry
    pub paper: PaperType,
    pub margins: PageMargins,

    // Typography
    pub font_size_pt: f32,
    pub title_font_size_pt: f32,

    // Content
    pub currency_symbol: String,
    pub labels: Labels,

    // Input policies
    pub item_mode: ItemMode,
    pub number_policy: NumberPolicy,
}

impl Default for InvoiceOptions {
    fn default() -> Self {
        Self {
            paper: PaperType::A4,
            margins: PageMargins::default(),
            font_size_pt: 10.0,
            title_font_size_pt: 18.0,
            currency_symbol: "€".to_string(),
            labels: Labels::default(),
            item_mode: ItemMode::Strict,
            number_policy: NumberPolicy::Lenient,
        }
    }
}

/// Smallest printable area accepted, in millimetres.
const MIN_CONTENT_WIDTH_MM: f32 = 100.0;
const MIN_CONTENT_HEIGHT_MM: f32 = 80.0;

impl InvoiceOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| InvoiceError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| InvoiceError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Width and height of the printable area in millimetres
    pub fn content_area_mm(&self) -> (f32, f32) {
        let (width, height) = self.paper.dimensions_mm();
        (
            width - self.margins.left_mm - self.margins.right_mm,
            height - self.margins.top_mm - self.margins.bottom_mm,
        )
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let margins = &self.margins;
        if [
            margins.top_mm,
            margins.bottom_mm,
            margins.left_mm,
            margins.right_mm,
        ]
        .iter()
        .any(|m| *m < 0.0)
        {
            return Err(InvoiceError::Config(
                "Margins must not be negative".to_string(),
            ));
        }

        let (width, height) = self.content_area_mm();
        if width < MIN_CONTENT_WIDTH_MM || height < MIN_CONTENT_HEIGHT_MM {
            return Err(InvoiceError::Config(format!(
                "Printable area {:.1}x{:.1} mm on {} paper is too small (minimum {}x{} mm)",
                width,
                height,
                self.paper.name(),
                MIN_CONTENT_WIDTH_MM,
                MIN_CONTENT_HEIGHT_MM
            )));
        }

        if self.font_size_pt <= 0.0 || self.title_font_size_pt <= 0.0 {
            return Err(InvoiceError::Config(
                "Font sizes must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
