//! Fixed-height pagination

use super::ContentPage;
use super::blocks::{Block, TableBlock, TableRow};

/// Stacks blocks onto pages of a fixed content height.
pub(crate) struct PageFlow {
    content_width_mm: f32,
    content_height_mm: f32,
    pages: Vec<ContentPage>,
    current: ContentPage,
    used_mm: f32,
}

impl PageFlow {
    pub(crate) fn new(content_width_mm: f32, content_height_mm: f32) -> Self {
        Self {
            content_width_mm,
            content_height_mm,
            pages: Vec::new(),
            current: ContentPage::default(),
            used_mm: 0.0,
        }
    }

    fn remaining_mm(&self) -> f32 {
        self.content_height_mm - self.used_mm
    }

    fn is_page_empty(&self) -> bool {
        self.current.blocks.is_empty()
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.used_mm = 0.0;
    }

    /// Place a block, starting a new page first if it does not fit.
    ///
    /// Spacers at the top of a page are dropped. A block taller than a whole
    /// page is placed on a page of its own and overflows the bottom margin.
    pub(crate) fn place(&mut self, block: Block) {
        let height = block.height_mm(self.content_width_mm);

        if let Block::Spacer(_) = block {
            if self.is_page_empty() {
                return;
            }
            if height > self.remaining_mm() {
                self.break_page();
                return;
            }
        }

        if height > self.remaining_mm() && !self.is_page_empty() {
            self.break_page();
        }
        if height > self.content_height_mm {
            log::warn!(
                "Block of {:.1} mm exceeds the {:.1} mm content height",
                height,
                self.content_height_mm
            );
        }

        self.used_mm += height;
        self.current.blocks.push(block);
    }

    /// Place a group of blocks on one page.
    pub(crate) fn place_together(&mut self, blocks: Vec<Block>) {
        let height: f32 = blocks
            .iter()
            .map(|b| b.height_mm(self.content_width_mm))
            .sum();

        if height > self.remaining_mm() && !self.is_page_empty() {
            self.break_page();
        }

        for block in blocks {
            self.used_mm += block.height_mm(self.content_width_mm);
            self.current.blocks.push(block);
        }
    }

    /// Place a table, continuing its rows onto following pages.
    ///
    /// Each page's part repeats the header row and carries at least one body
    /// row, so a header never ends up alone at the bottom of a page. A table
    /// without rows is placed as its header only.
    pub(crate) fn place_table(&mut self, table: TableBlock) {
        let widths = table.column_widths_mm(self.content_width_mm);
        let header_height = table.header_height_mm(&widths);

        if table.rows.is_empty() {
            self.place(Block::Table(table));
            return;
        }

        let mut chunk: Vec<TableRow> = Vec::new();
        let mut chunk_height = header_height;

        for row in &table.rows {
            let row_height = table.row_height_mm(&row.cells, &widths, row.weight);

            if chunk_height + row_height > self.remaining_mm() {
                if !chunk.is_empty() {
                    self.push_table_part(&table, std::mem::take(&mut chunk), chunk_height);
                    chunk_height = header_height;
                }
                if !self.is_page_empty() {
                    self.break_page();
                }
            }

            chunk_height += row_height;
            chunk.push(row.clone());
        }

        if !chunk.is_empty() {
            self.push_table_part(&table, chunk, chunk_height);
        }
    }

    fn push_table_part(&mut self, table: &TableBlock, rows: Vec<TableRow>, height: f32) {
        self.used_mm += height;
        self.current.blocks.push(Block::Table(table.with_rows(rows)));
    }

    /// Close the last page and return all pages. Always at least one page.
    pub(crate) fn finish(mut self) -> Vec<ContentPage> {
        if !self.is_page_empty() || self.pages.is_empty() {
            self.break_page();
        }
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::blocks::{Align, Column, TextBlock};

    fn table(rows: usize) -> TableBlock {
        TableBlock {
            columns: vec![Column::flex(Align::Left)],
            header: Some(vec!["Description".to_string()]),
            rows: (0..rows)
                .map(|i| TableRow::new(vec![format!("Item {}", i)]))
                .collect(),
            size_pt: 10.0,
        }
    }

    fn table_rows(page: &ContentPage) -> usize {
        page.blocks
            .iter()
            .map(|b| match b {
                Block::Table(t) => t.rows.len(),
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn test_spacer_dropped_at_page_top() {
        let mut flow = PageFlow::new(170.0, 100.0);
        flow.place(Block::Spacer(5.0));
        assert!(flow.finish()[0].blocks.is_empty());
    }

    #[test]
    fn test_finish_always_yields_a_page() {
        let flow = PageFlow::new(170.0, 100.0);
        assert_eq!(flow.finish().len(), 1);
    }

    #[test]
    fn test_table_continues_across_pages() {
        let mut flow = PageFlow::new(170.0, 100.0);
        flow.place_table(table(40));
        let pages = flow.finish();

        assert!(pages.len() > 1);
        assert_eq!(pages.iter().map(table_rows).sum::<usize>(), 40);
        for page in &pages {
            assert!(table_rows(page) > 0);
        }
    }

    #[test]
    fn test_header_not_left_alone_at_page_bottom() {
        let mut flow = PageFlow::new(170.0, 100.0);
        // Leave room for less than header + one row
        flow.place(Block::Spacer(0.0));
        flow.place(Block::Text(TextBlock::new("x", 10.0)));
        flow.place(Block::Spacer(100.0 - 4.77 - 8.0));
        flow.place_table(table(1));
        let pages = flow.finish();

        assert_eq!(pages.len(), 2);
        assert_eq!(table_rows(&pages[0]), 0);
        assert_eq!(table_rows(&pages[1]), 1);
    }

    #[test]
    fn test_group_moves_to_next_page_whole() {
        let mut flow = PageFlow::new(170.0, 50.0);
        flow.place(Block::Spacer(1.0));
        flow.place(Block::Text(TextBlock::new("x", 10.0)));
        flow.place(Block::Spacer(40.0));
        flow.place_together(vec![Block::Rule, Block::Rule, Block::Rule]);
        let pages = flow.finish();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].blocks, vec![Block::Rule, Block::Rule, Block::Rule]);
    }
}
