use rankledger_engine::cell::CellValue;
use rankledger_engine::sheet::Sheet;

use crate::config::LedgerLayout;
use crate::error::ReconError;
use crate::model::{MergeMeta, MergeReport, Placement, PlayerOutcome, PointsSchedule};

/// Merge one tournament's placements into a category ledger sheet.
///
/// Appends exactly one column (`max used column + 1`), zero-fills it for
/// every existing player row, then writes each entrant's points: every
/// case-insensitive name match is updated, unmatched players are appended as
/// new rows with zero backfill across the historical columns.
///
/// All ranks are resolved against the schedule before the first cell is
/// written, so a failed run leaves the sheet untouched.
pub fn merge(
    sheet: &mut Sheet,
    placements: &[Placement],
    schedule: &PointsSchedule,
    layout: &LedgerLayout,
) -> Result<MergeReport, ReconError> {
    let mut entrants: Vec<(String, u32, i64)> = Vec::new();
    for placement in placements {
        for player in &placement.players {
            let points = schedule.get(placement.rank).ok_or_else(|| {
                ReconError::UnknownBracket {
                    rank: placement.rank,
                    player: player.clone(),
                }
            })?;
            entrants.push((player.clone(), placement.rank, points));
        }
    }

    let new_column = sheet.max_used_col().map_or(0, |c| c + 1);

    // Player rows are contiguous; the first empty index cell ends them.
    // Every existing row gets a zero now so the column is fully populated
    // whether or not the player competed.
    let mut first_empty_row = layout.first_player_row;
    while !sheet.is_empty(first_empty_row, layout.index_col) {
        sheet.set_number(first_empty_row, new_column, 0.0);
        first_empty_row += 1;
    }
    let existing_rows = first_empty_row - layout.first_player_row;

    let mut updated = Vec::new();
    let mut added = Vec::new();

    for (name, rank, points) in entrants {
        let needle = name.trim().to_lowercase();
        let rows: Vec<usize> = (layout.first_player_row..first_empty_row)
            .filter(|&row| {
                let cell = sheet.display(row, layout.name_col);
                !cell.is_empty() && cell.trim().to_lowercase() == needle
            })
            .collect();

        if rows.is_empty() {
            let row = first_empty_row;
            let sequence = row - layout.first_player_row + 1;
            sheet.set_number(row, layout.index_col, sequence as f64);
            sheet.set(row, layout.name_col, CellValue::Text(name.clone()));
            sheet.set_number(row, new_column, points as f64);
            for col in layout.backfill_start_col..new_column {
                sheet.set_number(row, col, 0.0);
            }
            first_empty_row += 1;
            added.push(PlayerOutcome { name, rank, points, rows: vec![row] });
        } else {
            for &row in &rows {
                sheet.set_number(row, new_column, points as f64);
            }
            updated.push(PlayerOutcome { name, rank, points, rows });
        }
    }

    Ok(MergeReport {
        meta: MergeMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        new_column,
        existing_rows,
        updated,
        added,
    })
}
