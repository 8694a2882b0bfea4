//! Table extraction into rectangular text matrices.

use crate::model::{Element, Table};
use serde::{Deserialize, Serialize};

/// A table as a rectangular matrix of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    /// Number of rows
    pub row_count: usize,

    /// Number of columns (widest row of the source table)
    pub column_count: usize,

    /// Rows of cell text, every row `column_count` long
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Convert a table, padding short rows with empty cells.
    pub fn from_table(table: &Table) -> Self {
        let column_count = table.column_count();
        let rows = table
            .rows
            .iter()
            .map(|row| {
                let mut cells: Vec<String> = row.cells.iter().map(|c| c.plain_text()).collect();
                cells.resize(column_count, String::new());
                cells
            })
            .collect::<Vec<_>>();

        Self {
            row_count: rows.len(),
            column_count,
            rows,
        }
    }

    /// Get a cell by row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Extract every table element in document order.
pub fn extract(elements: &[Element]) -> Vec<TableData> {
    elements
        .iter()
        .filter_map(|e| match e {
            Element::Table(t) => Some(TableData::from_table(t)),
            Element::Paragraph(_) => None,
        })
        .collect()
}
