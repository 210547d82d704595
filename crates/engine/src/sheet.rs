use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cell::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// A single sparse cell grid. Indices are 0-based; `rows`/`cols` track the
/// declared extent (import sets them from the source range, `set` grows them).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    cells: HashMap<(usize, usize), CellValue>,
    pub rows: usize,
    pub cols: usize,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: HashMap::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Store a typed value. Writing `Empty` clears the cell.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        if value.is_empty() {
            self.cells.remove(&(row, col));
            return;
        }
        self.rows = self.rows.max(row + 1);
        self.cols = self.cols.max(col + 1);
        self.cells.insert((row, col), value);
    }

    /// Store a raw input string, classified via `CellValue::from_input`.
    pub fn set_value(&mut self, row: usize, col: usize, input: &str) {
        self.set(row, col, CellValue::from_input(input));
    }

    pub fn set_number(&mut self, row: usize, col: usize, n: f64) {
        self.set(row, col, CellValue::Number(n));
    }

    pub fn value(&self, row: usize, col: usize) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    pub fn display(&self, row: usize, col: usize) -> String {
        self.value(row, col).raw_display()
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.value(row, col).is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Highest row index holding a value, if any cell is occupied.
    pub fn max_used_row(&self) -> Option<usize> {
        self.cells.keys().map(|&(r, _)| r).max()
    }

    /// Highest column index holding a value, if any cell is occupied.
    pub fn max_used_col(&self) -> Option<usize> {
        self.cells.keys().map(|&(_, c)| c).max()
    }

    /// Occupied cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &CellValue)> + '_ {
        self.cells.iter().map(|(&(r, c), v)| (r, c, v))
    }
}
