//! Block model for content pages
//!
//! A content page is a top-to-bottom list of blocks. Every block has a fixed
//! height for a given content width, which is what pagination relies on.

use crate::constants::*;
use crate::fonts::text_width_mm;

/// Font weight of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Horizontal alignment inside a text block or table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// One or more lines of text in a single style
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub size_pt: f32,
    pub weight: FontWeight,
    pub align: Align,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, size_pt: f32) -> Self {
        Self {
            lines: vec![text.into()],
            size_pt,
            weight: FontWeight::Regular,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

/// Column width: fixed, or sharing whatever the fixed columns leave over
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    FixedMm(f32),
    Flex,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub width: ColumnWidth,
    pub align: Align,
}

impl Column {
    pub fn fixed(width_mm: f32, align: Align) -> Self {
        Self {
            width: ColumnWidth::FixedMm(width_mm),
            align,
        }
    }

    pub fn flex(align: Align) -> Self {
        Self {
            width: ColumnWidth::Flex,
            align,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub weight: FontWeight,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            weight: FontWeight::Regular,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

/// A grid table. When `header` is set it is drawn bold with a rule below it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub columns: Vec<Column>,
    pub header: Option<Vec<String>>,
    pub rows: Vec<TableRow>,
    pub size_pt: f32,
}

impl TableBlock {
    /// Same columns and header, different rows
    pub fn with_rows(&self, rows: Vec<TableRow>) -> Self {
        Self {
            columns: self.columns.clone(),
            header: self.header.clone(),
            rows,
            size_pt: self.size_pt,
        }
    }

    /// Resolve column widths for the available width.
    ///
    /// Flex columns split the space left by fixed columns evenly, but never
    /// drop below [`MIN_FLEX_COLUMN_MM`].
    pub fn column_widths_mm(&self, available_mm: f32) -> Vec<f32> {
        let fixed: f32 = self
            .columns
            .iter()
            .filter_map(|c| match c.width {
                ColumnWidth::FixedMm(w) => Some(w),
                ColumnWidth::Flex => None,
            })
            .sum();
        let flex_count = self
            .columns
            .iter()
            .filter(|c| c.width == ColumnWidth::Flex)
            .count();
        let flex_width = if flex_count == 0 {
            0.0
        } else {
            ((available_mm - fixed) / flex_count as f32).max(MIN_FLEX_COLUMN_MM)
        };

        self.columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::FixedMm(w) => w,
                ColumnWidth::Flex => flex_width,
            })
            .collect()
    }

    /// Wrapped lines of every cell of a row
    pub fn wrap_row(
        &self,
        cells: &[String],
        widths: &[f32],
        weight: FontWeight,
    ) -> Vec<Vec<String>> {
        widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let text = cells.get(i).map(String::as_str).unwrap_or("");
                wrap_text(text, width - 2.0 * CELL_PADDING_X_MM, self.size_pt, weight)
            })
            .collect()
    }

    /// Height of one row
    pub fn row_height_mm(&self, cells: &[String], widths: &[f32], weight: FontWeight) -> f32 {
        let lines = self
            .wrap_row(cells, widths, weight)
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(1)
            .max(1);
        lines as f32 * line_height_mm(self.size_pt) + 2.0 * CELL_PADDING_Y_MM
    }

    /// Height of the header row including its rule, or zero
    pub fn header_height_mm(&self, widths: &[f32]) -> f32 {
        match &self.header {
            Some(cells) => self.row_height_mm(cells, widths, FontWeight::Bold) + RULE_HEIGHT_MM,
            None => 0.0,
        }
    }

    pub fn height_mm(&self, available_mm: f32) -> f32 {
        let widths = self.column_widths_mm(available_mm);
        self.header_height_mm(&widths)
            + self
                .rows
                .iter()
                .map(|row| self.row_height_mm(&row.cells, &widths, row.weight))
                .sum::<f32>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(TextBlock),
    Table(TableBlock),
    /// Vertical gap in millimetres
    Spacer(f32),
    /// Horizontal rule across the content width
    Rule,
}

impl Block {
    /// Height of the block for a given content width
    pub fn height_mm(&self, available_mm: f32) -> f32 {
        match self {
            Block::Text(text) => text.lines.len() as f32 * line_height_mm(text.size_pt),
            Block::Table(table) => table.height_mm(available_mm),
            Block::Spacer(height) => *height,
            Block::Rule => RULE_HEIGHT_MM,
        }
    }
}

/// Height of one line of text (mm)
pub fn line_height_mm(size_pt: f32) -> f32 {
    pt_to_mm(size_pt * LINE_SPACING)
}

/// Greedy word wrap by measured glyph advances.
///
/// Words wider than a whole line are broken by character. Always returns at
/// least one (possibly empty) line.
pub fn wrap_text(text: &str, width_mm: f32, size_pt: f32, weight: FontWeight) -> Vec<String> {
    let fits = |candidate: &str| text_width_mm(candidate, size_pt, weight) <= width_mm;

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() {
                let joined = format!("{current} {word}");
                if fits(&joined) {
                    current = joined;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            for ch in word.chars() {
                current.push(ch);
                if current.chars().count() > 1 && !fits(&current) {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, ch.to_string()));
                }
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_text("Consulting", 80.0, 10.0, FontWeight::Regular), vec!["Consulting"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 80.0, 10.0, FontWeight::Regular), vec![String::new()]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let width = 20.0;
        let lines = wrap_text("alpha beta gamma delta", width, 10.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), "alpha beta gamma delta");
        for (line, next) in lines.iter().zip(lines.iter().skip(1)) {
            assert!(text_width_mm(line, 10.0, FontWeight::Regular) <= width);
            let first_word = next.split(' ').next().unwrap_or_default();
            let extended = format!("{line} {first_word}");
            assert!(text_width_mm(&extended, 10.0, FontWeight::Regular) > width);
        }
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        let width = 20.0;
        let word = "abcdefghijklmnopqrstuvwxyz";
        let lines = wrap_text(word, width, 10.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, FontWeight::Regular) <= width);
        }
    }

    #[test]
    fn test_narrow_glyphs_pack_tighter() {
        let dots = ".".repeat(40);
        let zeros = "0".repeat(40);
        let dot_lines = wrap_text(&dots, 20.0, 10.0, FontWeight::Regular);
        let zero_lines = wrap_text(&zeros, 20.0, 10.0, FontWeight::Regular);
        assert!(dot_lines.len() < zero_lines.len());
    }

    #[test]
    fn test_bold_header_may_wrap_where_regular_fits() {
        let text = "Unit price";
        let regular = text_width_mm(text, 10.0, FontWeight::Regular);
        let bold = text_width_mm(text, 10.0, FontWeight::Bold);
        let width = (regular + bold) / 2.0;
        assert_eq!(wrap_text(text, width, 10.0, FontWeight::Regular), vec![text]);
        assert_eq!(wrap_text(text, width, 10.0, FontWeight::Bold).len(), 2);
    }

    #[test]
    fn test_flex_column_takes_remaining_width() {
        let table = TableBlock {
            columns: vec![
                Column::flex(Align::Left),
                Column::fixed(30.0, Align::Right),
                Column::fixed(40.0, Align::Right),
            ],
            header: None,
            rows: Vec::new(),
            size_pt: 10.0,
        };
        assert_eq!(table.column_widths_mm(170.0), vec![100.0, 30.0, 40.0]);
        assert_eq!(table.column_widths_mm(60.0)[0], MIN_FLEX_COLUMN_MM);
    }
}
