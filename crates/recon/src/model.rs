use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

/// One parsed results line: a rank and the player(s) who achieved it.
/// Tie-continuation lines become their own `Placement` sharing the rank of
/// the preceding explicit-rank line; they are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub rank: u32,
    pub players: Vec<String>,
}

// ---------------------------------------------------------------------------
// Points schedule
// ---------------------------------------------------------------------------

/// The fixed rank thresholds a points row maps onto, in column order.
/// 1st..5th individually, then loser brackets of 8, 16, 32, 64 and 128.
pub const BRACKET_STARTS: [u32; 10] = [1, 2, 3, 4, 5, 9, 17, 33, 65, 129];

/// Per-bracket point values resolved for exactly one tournament level.
/// Strict lookup: a rank between two bracket starts has no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsSchedule {
    pub level: String,
    points: BTreeMap<u32, i64>,
}

impl PointsSchedule {
    /// Build from ten values in `BRACKET_STARTS` column order.
    pub fn new(level: &str, values: [i64; 10]) -> Self {
        Self {
            level: level.to_string(),
            points: BRACKET_STARTS.iter().copied().zip(values).collect(),
        }
    }

    pub fn get(&self, rank: u32) -> Option<i64> {
        self.points.get(&rank).copied()
    }

    /// Bracket start → points, ascending by bracket.
    pub fn entries(&self) -> impl Iterator<Item = (u32, i64)> + '_ {
        self.points.iter().map(|(&b, &p)| (b, p))
    }
}

// ---------------------------------------------------------------------------
// Merge report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MergeMeta {
    pub engine_version: String,
    pub run_at: String,
}

/// What happened to one entrant occurrence. `rows` holds every ledger row
/// written for the player (duplicate-named rows are all updated).
#[derive(Debug, Clone, Serialize)]
pub struct PlayerOutcome {
    pub name: String,
    pub rank: u32,
    pub points: i64,
    pub rows: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub meta: MergeMeta,
    /// 0-based index of the appended tournament column.
    pub new_column: usize,
    /// Player rows present before the run.
    pub existing_rows: usize,
    pub updated: Vec<PlayerOutcome>,
    pub added: Vec<PlayerOutcome>,
}

impl MergeReport {
    pub fn summary(&self) -> String {
        format!(
            "column {} written: {} updated, {} added ({} rows before run)",
            self.new_column + 1,
            self.updated.len(),
            self.added.len(),
            self.existing_rows
        )
    }
}
