//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, bad layout)   |
//! | 3-9     | apply            | Reconciliation-specific codes            |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use rankledger_recon::ReconError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
#[allow(dead_code)]
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, invalid layout config.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Apply (3-9)
// =============================================================================

/// Results file could not be parsed into placements.
pub const EXIT_RESULTS_PARSE: u8 = 3;

/// Requested level absent from the points lookup sheet.
pub const EXIT_LEVEL_NOT_FOUND: u8 = 4;

/// Non-numeric points cell in the matched level row.
pub const EXIT_BAD_POINTS: u8 = 5;

/// A placement rank with no exact bracket match.
pub const EXIT_UNKNOWN_BRACKET: u8 = 6;

/// Workbook could not be read or written.
pub const EXIT_WORKBOOK_IO: u8 = 7;

/// Lookup or category sheet missing from the workbook.
pub const EXIT_MISSING_SHEET: u8 = 8;

/// Exit code for a reconciliation engine error.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_USAGE,
        ReconError::EmptyResults
        | ReconError::UnanchoredResults { .. }
        | ReconError::RankOutOfRange { .. } => EXIT_RESULTS_PARSE,
        ReconError::LevelNotFound { .. } => EXIT_LEVEL_NOT_FOUND,
        ReconError::InvalidPointsValue { .. } => EXIT_BAD_POINTS,
        ReconError::UnknownBracket { .. } => EXIT_UNKNOWN_BRACKET,
    }
}
