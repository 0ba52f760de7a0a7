//! Tabular input: the header and item record sets
//!
//! The input side hands over two rectangular tables with named columns. This
//! module checks their schema and turns rows into header fields and raw line
//! items. Column names match case-insensitively and extra columns are ignored.

use crate::header::InvoiceHeader;
use crate::options::NumberPolicy;
use crate::types::*;

pub const HEADER_COLUMNS: [&str; 2] = ["key", "value"];
pub const ITEM_COLUMNS: [&str; 4] = ["description", "qty", "unit_price", "vat_pct"];

/// A rectangular table of string cells with named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn new<C, S>(columns: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; builder style for tests and in-memory callers.
    pub fn with_row<R, S>(mut self, row: R) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Position of a column, matched trimmed and case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.trim().eq_ignore_ascii_case(name))
    }

    /// Resolve all `required` columns or report every missing one.
    fn require_columns<const N: usize>(
        &self,
        table: &'static str,
        required: [&str; N],
    ) -> Result<[usize; N]> {
        let mut indices = [0; N];
        let mut missing = Vec::new();

        for (slot, name) in indices.iter_mut().zip(required) {
            match self.column_index(name) {
                Some(idx) => *slot = idx,
                None => missing.push(name.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(InvoiceError::Schema { table, missing })
        }
    }
}

/// Cell text, or empty when the row is shorter than the header.
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Check both tables carry their required columns.
///
/// Runs before any row is converted so a schema problem is reported without
/// touching the data.
pub fn validate_schema(header: &RecordTable, items: &RecordTable) -> Result<()> {
    header.require_columns("header", HEADER_COLUMNS)?;
    items.require_columns("items", ITEM_COLUMNS)?;
    Ok(())
}

/// Convert the key/value table into header fields.
pub fn header_from_table(table: &RecordTable) -> Result<InvoiceHeader> {
    let [key_idx, value_idx] = table.require_columns("header", HEADER_COLUMNS)?;

    Ok(InvoiceHeader::from_pairs(
        table
            .rows
            .iter()
            .map(|row| (cell(row, key_idx), cell(row, value_idx))),
    ))
}

/// Convert the item table into raw line items.
///
/// Under [`NumberPolicy::Lenient`] an empty or non-numeric quantity, price or
/// VAT cell counts as zero; under [`NumberPolicy::Strict`] it is an error.
/// Rows with only blank cells are skipped.
pub fn items_from_table(table: &RecordTable, policy: NumberPolicy) -> Result<Vec<LineItemRaw>> {
    let [desc_idx, qty_idx, price_idx, vat_idx] = table.require_columns("items", ITEM_COLUMNS)?;

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.iter().all(|c| c.trim().is_empty()))
        .map(|(i, row)| -> Result<LineItemRaw> {
            // 1-based data row, as a spreadsheet user would count it
            let row_number = i + 1;
            Ok(LineItemRaw {
                description: cell(row, desc_idx).trim().to_string(),
                quantity: parse_number(cell(row, qty_idx), row_number, "qty", policy)?,
                unit_price: parse_number(cell(row, price_idx), row_number, "unit_price", policy)?,
                vat_pct: parse_number(cell(row, vat_idx), row_number, "vat_pct", policy)?,
            })
        })
        .collect()
}

fn parse_number(text: &str, row: usize, column: &'static str, policy: NumberPolicy) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => match policy {
            NumberPolicy::Lenient => {
                if !text.trim().is_empty() {
                    log::warn!(
                        "Row {}: '{}' in column '{}' is not a number, using 0",
                        row,
                        text,
                        column
                    );
                }
                Ok(0.0)
            }
            NumberPolicy::Strict => Err(InvoiceError::InvalidNumber {
                row,
                column,
                value: text.to_string(),
            }),
        },
    }
}
