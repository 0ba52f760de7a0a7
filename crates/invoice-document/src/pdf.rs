use crate::constants::*;
use crate::fonts::{Typeface, text_width_mm};
use crate::layout::{
    Align, Block, ContentDocument, ContentPage, FontWeight, TableBlock, line_height_mm,
};
use crate::types::{InvoiceError, Result};
use printpdf::*;
use std::path::Path;

/// Render a content document and write it to `output_path`.
pub async fn generate_pdf(document: &ContentDocument, output_path: impl AsRef<Path>) -> Result<()> {
    let document = document.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || render_pdf_bytes(&document)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Render every content page to a PDF page and serialize the document.
pub fn render_pdf_bytes(document: &ContentDocument) -> Result<Vec<u8>> {
    if document.pages.is_empty() {
        return Err(InvoiceError::Pdf("Content document has no pages".to_string()));
    }

    let mut doc = PdfDocument::new(&document.title);
    let typeface = Typeface::shared()?;
    let fonts = PageFonts {
        regular: doc.add_font(&typeface.regular),
        bold: doc.add_font(&typeface.bold),
    };

    for page in &document.pages {
        let ops = render_page(document, page, &fonts);
        doc.pages.push(PdfPage::new(
            Mm(document.page_width_mm),
            Mm(document.page_height_mm),
            ops,
        ));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("printpdf reported {} warnings", warnings.len());
    }

    Ok(bytes)
}

/// Document font resources for both weights
struct PageFonts {
    regular: FontId,
    bold: FontId,
}

impl PageFonts {
    fn get(&self, weight: FontWeight) -> FontId {
        match weight {
            FontWeight::Regular => self.regular.clone(),
            FontWeight::Bold => self.bold.clone(),
        }
    }
}

/// Drawing state for one page: a cursor moving down from the top margin.
struct PageCursor<'a> {
    fonts: &'a PageFonts,
    left_mm: f32,
    width_mm: f32,
    top_mm: f32,
    ops: Vec<Op>,
}

fn render_page(document: &ContentDocument, page: &ContentPage, fonts: &PageFonts) -> Vec<Op> {
    let margins = &document.margins;
    let mut cursor = PageCursor {
        fonts,
        left_mm: margins.left_mm,
        width_mm: document.page_width_mm - margins.left_mm - margins.right_mm,
        top_mm: document.page_height_mm - margins.top_mm,
        ops: Vec::new(),
    };

    for block in &page.blocks {
        let height = block.height_mm(cursor.width_mm);
        match block {
            Block::Text(text) => {
                let line_height = line_height_mm(text.size_pt);
                let (left, width) = (cursor.left_mm, cursor.width_mm);
                for (i, line) in text.lines.iter().enumerate() {
                    let top = cursor.top_mm - i as f32 * line_height;
                    cursor.write_line(
                        line,
                        left,
                        width,
                        top,
                        text.size_pt,
                        text.weight,
                        text.align,
                    );
                }
            }
            Block::Table(table) => cursor.draw_table(table),
            Block::Spacer(_) => {}
            Block::Rule => {
                let y = cursor.top_mm - RULE_HEIGHT_MM / 2.0;
                cursor.draw_rule(y);
            }
        }
        cursor.top_mm -= height;
    }

    cursor.ops
}

impl PageCursor<'_> {
    #[allow(clippy::too_many_arguments)]
    fn write_line(
        &mut self,
        text: &str,
        x_mm: f32,
        width_mm: f32,
        line_top_mm: f32,
        size_pt: f32,
        weight: FontWeight,
        align: Align,
    ) {
        if text.is_empty() {
            return;
        }

        let x = match align {
            Align::Left => x_mm,
            Align::Right => x_mm + width_mm - text_width_mm(text, size_pt, weight),
        };
        let baseline = line_top_mm - line_height_mm(size_pt) * BASELINE_RATIO;

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: Mm(x).into_pt(),
                y: Mm(baseline).into_pt(),
            },
        });
        let font = self.fonts.get(weight);
        self.ops.push(Op::SetFontSize {
            font: font.clone(),
            size: Pt(size_pt),
        });
        self.ops.push(Op::WriteText {
            items: vec![TextItem::Text(text.to_string())],
            font,
        });
        self.ops.push(Op::EndTextSection);
    }

    fn draw_rule(&mut self, y_mm: f32) {
        let y = Mm(y_mm).into_pt();
        self.ops.push(Op::SetOutlineThickness {
            pt: Pt(RULE_THICKNESS_PT),
        });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: Point {
                            x: Mm(self.left_mm).into_pt(),
                            y,
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Mm(self.left_mm + self.width_mm).into_pt(),
                            y,
                        },
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        });
    }

    fn draw_table(&mut self, table: &TableBlock) {
        let widths = table.column_widths_mm(self.width_mm);
        let mut row_top = self.top_mm;

        if let Some(header) = &table.header {
            self.draw_row(table, header, &widths, row_top, FontWeight::Bold);
            row_top -= table.row_height_mm(header, &widths, FontWeight::Bold);
            self.draw_rule(row_top - RULE_HEIGHT_MM / 2.0);
            row_top -= RULE_HEIGHT_MM;
        }

        for row in &table.rows {
            self.draw_row(table, &row.cells, &widths, row_top, row.weight);
            row_top -= table.row_height_mm(&row.cells, &widths, row.weight);
        }
    }

    fn draw_row(
        &mut self,
        table: &TableBlock,
        cells: &[String],
        widths: &[f32],
        row_top_mm: f32,
        weight: FontWeight,
    ) {
        let line_height = line_height_mm(table.size_pt);
        let wrapped = table.wrap_row(cells, widths, weight);
        let mut cell_left = self.left_mm;

        for ((lines, width), column) in wrapped.iter().zip(widths).zip(&table.columns) {
            for (i, line) in lines.iter().enumerate() {
                let top = row_top_mm - CELL_PADDING_Y_MM - i as f32 * line_height;
                self.write_line(
                    line,
                    cell_left + CELL_PADDING_X_MM,
                    width - 2.0 * CELL_PADDING_X_MM,
                    top,
                    table.size_pt,
                    weight,
                    column.align,
                );
            }
            cell_left += width;
        }
    }
}
