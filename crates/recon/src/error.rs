use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error in a layout config.
    ConfigParse(String),
    /// Layout validation error (overlapping columns, bad backfill start).
    ConfigValidation(String),
    /// Results file had no usable lines.
    EmptyResults,
    /// First results line carries no explicit rank to inherit from.
    UnanchoredResults { line: String },
    /// A rank prefix too large to be a placement.
    RankOutOfRange { line: String },
    /// Requested level absent from the lookup table.
    LevelNotFound { level: String, column: String },
    /// Non-numeric (or negative, or fractional) cell in a level's points columns.
    InvalidPointsValue { level: String, bracket: u32, value: String },
    /// A placement rank with no exact bracket match in the schedule.
    UnknownBracket { rank: u32, player: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "layout config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "layout config validation error: {msg}"),
            Self::EmptyResults => write!(f, "results file contains no placement lines"),
            Self::UnanchoredResults { line } => {
                write!(f, "first results line '{line}' has no rank prefix")
            }
            Self::RankOutOfRange { line } => {
                write!(f, "rank prefix out of range in line '{line}'")
            }
            Self::LevelNotFound { level, column } => {
                write!(f, "tournament level '{level}' not found in column '{column}'")
            }
            Self::InvalidPointsValue { level, bracket, value } => {
                write!(
                    f,
                    "level '{level}', bracket {bracket}: invalid points value '{value}'"
                )
            }
            Self::UnknownBracket { rank, player } => {
                write!(f, "player '{player}': rank {rank} matches no bracket start")
            }
        }
    }
}

impl std::error::Error for ReconError {}
