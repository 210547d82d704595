use serde::Deserialize;

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Ledger sheet layout
// ---------------------------------------------------------------------------

/// Fixed cell positions of a category sheet, 0-based. The defaults encode the
/// production workbook: header row, four reserved metadata rows, player rows
/// from row 6 (1-based), index in column A, name in column B, historical
/// zero-backfill from column I.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerLayout {
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_first_player_row")]
    pub first_player_row: usize,
    #[serde(default = "default_index_col")]
    pub index_col: usize,
    #[serde(default = "default_name_col")]
    pub name_col: usize,
    #[serde(default = "default_backfill_start_col")]
    pub backfill_start_col: usize,
}

fn default_header_row() -> usize {
    0
}
fn default_first_player_row() -> usize {
    5
}
fn default_index_col() -> usize {
    0
}
fn default_name_col() -> usize {
    1
}
fn default_backfill_start_col() -> usize {
    8
}

impl Default for LedgerLayout {
    fn default() -> Self {
        Self {
            header_row: default_header_row(),
            first_player_row: default_first_player_row(),
            index_col: default_index_col(),
            name_col: default_name_col(),
            backfill_start_col: default_backfill_start_col(),
        }
    }
}

// ---------------------------------------------------------------------------
// Points lookup layout
// ---------------------------------------------------------------------------

/// Where the points lookup sheet keeps its level column and the ten points
/// columns. `level_col_fallback` exists for lookup tables exported without a
/// header label and must be preserved for compatibility.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupLayout {
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_level_header")]
    pub level_header: String,
    #[serde(default = "default_level_col_fallback")]
    pub level_col_fallback: usize,
    #[serde(default = "default_points_start_col")]
    pub points_start_col: usize,
}

fn default_level_header() -> String {
    "Level".to_string()
}
fn default_level_col_fallback() -> usize {
    2
}
fn default_points_start_col() -> usize {
    3
}

impl Default for LookupLayout {
    fn default() -> Self {
        Self {
            header_row: default_header_row(),
            level_header: default_level_header(),
            level_col_fallback: default_level_col_fallback(),
            points_start_col: default_points_start_col(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReconcileConfig {
    #[serde(default)]
    pub lookup: LookupLayout,
    #[serde(default)]
    pub ledger: LedgerLayout,
}

impl ReconcileConfig {
    pub fn from_toml(text: &str) -> Result<Self, ReconError> {
        let config: Self =
            toml::from_str(text).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ReconError> {
        if self.ledger.index_col == self.ledger.name_col {
            return Err(ReconError::ConfigValidation(
                "ledger index and name columns must differ".into(),
            ));
        }
        if self.ledger.backfill_start_col <= self.ledger.name_col {
            return Err(ReconError::ConfigValidation(format!(
                "backfill start column {} would overwrite the name column",
                self.ledger.backfill_start_col
            )));
        }
        if self.ledger.first_player_row <= self.ledger.header_row {
            return Err(ReconError::ConfigValidation(
                "first player row must sit below the header row".into(),
            ));
        }
        Ok(())
    }
}
