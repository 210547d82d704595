// Excel workbook import (xlsx, xls, xlsb, ods) and export (xlsx only)
//
// Import: one-way conversion into the in-memory grid model. Values only;
// source formatting is not carried.
// Export: value snapshot of every sheet. Not a round-trip format.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use rust_xlsxwriter::Workbook as XlsxWorkbook;

use rankledger_engine::cell::CellValue;
use rankledger_engine::sheet::Sheet;
use rankledger_engine::workbook::Workbook;

/// Per-sheet import statistics
#[derive(Debug, Default, Clone)]
pub struct SheetStats {
    pub name: String,
    pub cells_imported: usize,
}

/// Result of a workbook import operation
#[derive(Debug, Default)]
pub struct ImportResult {
    pub sheet_stats: Vec<SheetStats>,
    pub sheets_imported: usize,
    pub cells_imported: usize,
    /// Actionable warnings (error cells kept as text, etc.)
    pub warnings: Vec<String>,
}

impl ImportResult {
    /// Returns a summary message suitable for display
    pub fn summary(&self) -> String {
        format!(
            "{} sheet{} · {} cells",
            self.sheets_imported,
            if self.sheets_imported == 1 { "" } else { "s" },
            self.cells_imported
        )
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Import a workbook file (xlsx, xls, xlsb, ods)
pub fn import(path: &Path) -> Result<(Workbook, ImportResult), String> {
    let mut source: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| format!("Failed to open Excel file: {}", e))?;

    let sheet_names: Vec<String> = source.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err("Excel file contains no sheets".to_string());
    }

    let mut workbook = Workbook::new();
    let mut result = ImportResult::default();

    for sheet_name in &sheet_names {
        let range = source
            .worksheet_range(sheet_name)
            .map_err(|e| format!("Failed to read sheet '{}': {}", sheet_name, e))?;

        let mut sheet = Sheet::new(sheet_name);
        let mut stats = SheetStats {
            name: sheet_name.clone(),
            ..Default::default()
        };

        // Range start offset (data may not begin at A1)
        let (data_start_row, data_start_col) = range.start().unwrap_or((0, 0));

        for (row_idx, row) in range.rows().enumerate() {
            let target_row = data_start_row as usize + row_idx;

            for (col_idx, cell) in row.iter().enumerate() {
                let target_col = data_start_col as usize + col_idx;

                match cell {
                    Data::Empty => {}
                    Data::String(s) => {
                        if !s.trim().is_empty() {
                            sheet.set_value(target_row, target_col, s);
                            stats.cells_imported += 1;
                        }
                    }
                    Data::Float(n) => {
                        sheet.set(target_row, target_col, CellValue::Number(*n));
                        stats.cells_imported += 1;
                    }
                    Data::Int(n) => {
                        sheet.set(target_row, target_col, CellValue::Number(*n as f64));
                        stats.cells_imported += 1;
                    }
                    Data::Bool(b) => {
                        sheet.set_value(target_row, target_col, if *b { "TRUE" } else { "FALSE" });
                        stats.cells_imported += 1;
                    }
                    Data::Error(e) => {
                        // Keep error cells as text so they stay visible in the output
                        sheet.set(target_row, target_col, CellValue::Text(format!("#{:?}", e)));
                        result.warnings.push(format!(
                            "sheet '{}': error cell at row {}, column {} kept as text",
                            sheet_name,
                            target_row + 1,
                            target_col + 1
                        ));
                        stats.cells_imported += 1;
                    }
                    Data::DateTime(dt) => {
                        // Serial value; the ledger layout holds no real dates
                        sheet.set(target_row, target_col, CellValue::Number(dt.as_f64()));
                        stats.cells_imported += 1;
                    }
                    Data::DateTimeIso(s) | Data::DurationIso(s) => {
                        sheet.set(target_row, target_col, CellValue::Text(s.clone()));
                        stats.cells_imported += 1;
                    }
                }
            }
        }

        result.cells_imported += stats.cells_imported;
        result.sheets_imported += 1;
        result.sheet_stats.push(stats);
        workbook.add_sheet(sheet);
    }

    Ok((workbook, result))
}

/// Export every sheet of the workbook to an xlsx file.
pub fn export(workbook: &Workbook, path: &Path) -> Result<(), String> {
    let mut xlsx = XlsxWorkbook::new();

    for sheet in workbook.sheets() {
        let worksheet = xlsx
            .add_worksheet()
            .set_name(&sheet.name)
            .map_err(|e| format!("Failed to create sheet '{}': {}", sheet.name, e))?;

        for (row, col, value) in sheet.cells() {
            match value {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    worksheet
                        .write_number(row as u32, col as u16, *n)
                        .map_err(|e| format!("Failed to write cell ({}, {}): {}", row, col, e))?;
                }
                CellValue::Text(s) => {
                    worksheet
                        .write_string(row as u32, col as u16, s)
                        .map_err(|e| format!("Failed to write cell ({}, {}): {}", row, col, e))?;
                }
            }
        }
    }

    xlsx.save(path)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    Ok(())
}
