use rankledger_engine::cell::CellValue;
use rankledger_engine::sheet::Sheet;

use crate::config::LookupLayout;
use crate::error::ReconError;
use crate::model::{PointsSchedule, BRACKET_STARTS};

/// Resolve the ten-bracket points schedule for one tournament level.
///
/// The level column is the header cell matching `layout.level_header`, with a
/// positional fallback for lookup tables exported without header labels.
/// Level matching is an exact, case-sensitive string comparison.
pub fn resolve_schedule(
    lookup: &Sheet,
    level: &str,
    layout: &LookupLayout,
) -> Result<PointsSchedule, ReconError> {
    let level_col = find_level_col(lookup, layout);

    let last_row = lookup.max_used_row().unwrap_or(layout.header_row);
    let mut level_row = None;
    for row in (layout.header_row + 1)..=last_row {
        if lookup.display(row, level_col) == level {
            level_row = Some(row);
            break;
        }
    }
    let row = level_row.ok_or_else(|| ReconError::LevelNotFound {
        level: level.to_string(),
        column: column_label(lookup, layout, level_col),
    })?;

    let mut values = [0i64; 10];
    for (i, slot) in values.iter_mut().enumerate() {
        *slot = read_points_cell(lookup, row, layout.points_start_col + i, level, BRACKET_STARTS[i])?;
    }

    Ok(PointsSchedule::new(level, values))
}

/// Distinct levels present in the lookup table, in row order. For
/// diagnostics when a requested level is missing.
pub fn list_levels(lookup: &Sheet, layout: &LookupLayout) -> Vec<String> {
    let level_col = find_level_col(lookup, layout);
    let last_row = lookup.max_used_row().unwrap_or(layout.header_row);
    let mut levels = Vec::new();
    for row in (layout.header_row + 1)..=last_row {
        let value = lookup.display(row, level_col);
        if !value.is_empty() && !levels.contains(&value) {
            levels.push(value);
        }
    }
    levels
}

fn find_level_col(lookup: &Sheet, layout: &LookupLayout) -> usize {
    let last_col = lookup.max_used_col().unwrap_or(0);
    (0..=last_col)
        .find(|&col| lookup.display(layout.header_row, col) == layout.level_header)
        .unwrap_or(layout.level_col_fallback)
}

fn column_label(lookup: &Sheet, layout: &LookupLayout, level_col: usize) -> String {
    let header = lookup.display(layout.header_row, level_col);
    if header.is_empty() {
        format!("#{}", level_col + 1)
    } else {
        header
    }
}

/// Empty cells are worth 0. Anything non-numeric, fractional, or negative in
/// a points column is a data error worth stopping the run for.
fn read_points_cell(
    lookup: &Sheet,
    row: usize,
    col: usize,
    level: &str,
    bracket: u32,
) -> Result<i64, ReconError> {
    let invalid = |value: String| ReconError::InvalidPointsValue {
        level: level.to_string(),
        bracket,
        value,
    };

    match lookup.value(row, col) {
        CellValue::Empty => Ok(0),
        CellValue::Number(n) => {
            if n.fract() != 0.0 || *n < 0.0 {
                Err(invalid(n.to_string()))
            } else {
                Ok(*n as i64)
            }
        }
        CellValue::Text(s) => match s.trim().parse::<i64>() {
            Ok(v) if v >= 0 => Ok(v),
            _ => Err(invalid(s.clone())),
        },
    }
}
