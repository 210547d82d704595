// RankLedger CLI - headless tournament reconciliation

mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use rankledger_engine::cell::CellValue;
use rankledger_recon::{
    list_levels, merge, parse_results, resolve_schedule, MergeReport, ReconError,
    ReconcileConfig, BRACKET_STARTS,
};

use exit_codes::{
    recon_exit_code, EXIT_MISSING_SHEET, EXIT_SUCCESS, EXIT_USAGE, EXIT_WORKBOOK_IO,
};

#[derive(Parser)]
#[command(name = "rankledger")]
#[command(about = "Tournament ranking ledger updates (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge one tournament's results into the ranking workbook
    #[command(after_help = "\
Examples:
  rankledger apply --results spring.txt --workbook rankings.xlsx \\
      --tournament 'Spring Open' --level Regional --category Men
  rankledger apply --results r.txt --workbook rankings.xlsx \\
      --tournament 'City Cup' --level Local --category Women -o updated.xlsx --json")]
    Apply {
        /// Path to the .txt file with results
        #[arg(long)]
        results: PathBuf,

        /// Path to the existing ranking workbook
        #[arg(long)]
        workbook: PathBuf,

        /// Tournament name, written as the new column's header
        #[arg(long)]
        tournament: String,

        /// Tournament level as defined in the points lookup sheet
        #[arg(long)]
        level: String,

        /// Category sheet name
        #[arg(long)]
        category: String,

        /// Points lookup sheet name
        #[arg(long, default_value = "Points Lookup")]
        lookup_sheet: String,

        /// Output workbook path
        #[arg(long, short = 'o', default_value = "output.xlsx")]
        output: PathBuf,

        /// Layout overrides (TOML) for non-standard workbooks
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Print the merge report as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Only print errors
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Parse a results file and print the placements without touching a workbook
    #[command(after_help = "\
Examples:
  rankledger placements spring.txt
  rankledger placements spring.txt --json | jq '.[].players'")]
    Placements {
        /// Path to the .txt file with results
        results: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            eprintln!("Usage: rankledger <command> [options]");
            eprintln!("       rankledger --help for more information");
            Ok(())
        }
        Some(Commands::Apply {
            results,
            workbook,
            tournament,
            level,
            category,
            lookup_sheet,
            output,
            layout,
            json,
            quiet,
        }) => cmd_apply(
            results, workbook, tournament, level, category, lookup_sheet, output, layout, json,
            quiet,
        ),
        Some(Commands::Placements { results, json }) => cmd_placements(results, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn workbook_io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_WORKBOOK_IO, message: msg.into(), hint: None }
    }

    /// Create error from a reconciliation error with proper exit code.
    pub fn recon(err: ReconError) -> Self {
        let hint = match &err {
            ReconError::UnanchoredResults { .. } => {
                Some("the first results line must look like '1.<player>'".to_string())
            }
            ReconError::UnknownBracket { .. } => Some(format!(
                "bracket starts are {}",
                BRACKET_STARTS.map(|b| b.to_string()).join(", ")
            )),
            _ => None,
        };
        Self { code: recon_exit_code(&err), message: err.to_string(), hint }
    }

    pub fn missing_sheet(name: &str, available: &[&str]) -> Self {
        Self {
            code: EXIT_MISSING_SHEET,
            message: format!("sheet '{}' not found in workbook", name),
            hint: Some(format!("available sheets: {}", available.join(", "))),
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn load_layout(path: Option<&Path>) -> Result<ReconcileConfig, CliError> {
    match path {
        None => Ok(ReconcileConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                CliError::usage(format!("cannot read layout file '{}': {}", path.display(), e))
            })?;
            ReconcileConfig::from_toml(&text).map_err(CliError::recon)
        }
    }
}

// ============================================================================
// apply
// ============================================================================

#[derive(Serialize)]
struct ApplyOutput<'a> {
    tournament: &'a str,
    level: &'a str,
    category: &'a str,
    output: String,
    report: &'a MergeReport,
}

#[allow(clippy::too_many_arguments)]
fn cmd_apply(
    results: PathBuf,
    workbook_path: PathBuf,
    tournament: String,
    level: String,
    category: String,
    lookup_sheet: String,
    output: PathBuf,
    layout: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = load_layout(layout.as_deref())?;

    let lines =
        rankledger_io::results::read_lines(&results).map_err(CliError::usage)?;
    let placements = parse_results(&lines).map_err(CliError::recon)?;

    let (mut workbook, import_result) =
        rankledger_io::xlsx::import(&workbook_path).map_err(CliError::workbook_io)?;
    if !quiet {
        for warning in &import_result.warnings {
            eprintln!("warning: {}", warning);
        }
    }

    let lookup = workbook
        .sheet(&lookup_sheet)
        .ok_or_else(|| CliError::missing_sheet(&lookup_sheet, &workbook.sheet_names()))?;
    let schedule = resolve_schedule(lookup, &level, &config.lookup).map_err(|err| {
        let levels = list_levels(lookup, &config.lookup);
        let cli_err = CliError::recon(err);
        if cli_err.code == exit_codes::EXIT_LEVEL_NOT_FOUND && !levels.is_empty() {
            cli_err.with_hint(format!("available levels: {}", levels.join(", ")))
        } else {
            cli_err
        }
    })?;

    let sheet_names: Vec<String> =
        workbook.sheet_names().iter().map(|s| s.to_string()).collect();
    let report = {
        let sheet = workbook.sheet_mut(&category).ok_or_else(|| {
            let names: Vec<&str> = sheet_names.iter().map(|s| s.as_str()).collect();
            CliError::missing_sheet(&category, &names)
        })?;
        let report =
            merge(sheet, &placements, &schedule, &config.ledger).map_err(CliError::recon)?;
        // Label the appended column so the header row stays complete.
        sheet.set(
            config.ledger.header_row,
            report.new_column,
            CellValue::Text(tournament.clone()),
        );
        report
    };

    rankledger_io::xlsx::export(&workbook, &output).map_err(CliError::workbook_io)?;

    if json {
        let payload = ApplyOutput {
            tournament: &tournament,
            level: &level,
            category: &category,
            output: output.display().to_string(),
            report: &report,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload)
                .map_err(|e| CliError::workbook_io(e.to_string()))?
        );
    } else if !quiet {
        println!("{}: {}", category, report.summary());
        for player in &report.added {
            println!("new player: {} ({} pts)", player.name, player.points);
        }
        println!("written: {}", output.display());
    }

    Ok(())
}

// ============================================================================
// placements
// ============================================================================

fn cmd_placements(results: PathBuf, json: bool) -> Result<(), CliError> {
    let lines = rankledger_io::results::read_lines(&results).map_err(CliError::usage)?;
    let placements = parse_results(&lines).map_err(CliError::recon)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&placements)
                .map_err(|e| CliError::usage(e.to_string()))?
        );
    } else {
        for placement in &placements {
            println!("{}. {}", placement.rank, placement.players.join(" | "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankledger_recon::Placement;

    #[test]
    fn recon_errors_map_to_registered_codes() {
        let err = CliError::recon(ReconError::LevelNotFound {
            level: "World".into(),
            column: "Level".into(),
        });
        assert_eq!(err.code, exit_codes::EXIT_LEVEL_NOT_FOUND);

        let err = CliError::recon(ReconError::UnknownBracket { rank: 6, player: "Bob".into() });
        assert_eq!(err.code, exit_codes::EXIT_UNKNOWN_BRACKET);
        assert!(err.hint.unwrap().contains("129"));
    }

    #[test]
    fn missing_sheet_hint_lists_candidates() {
        let err = CliError::missing_sheet("Mixed", &["Points Lookup", "Men"]);
        assert_eq!(err.code, EXIT_MISSING_SHEET);
        assert_eq!(err.hint.unwrap(), "available sheets: Points Lookup, Men");
    }

    #[test]
    fn layout_defaults_when_no_file_given() {
        let config = load_layout(None).unwrap();
        assert_eq!(config.ledger.first_player_row, 5);
    }

    #[test]
    fn placement_lines_render_with_pipes() {
        let placement = Placement { rank: 1, players: vec!["Alice".into(), "Bob".into()] };
        assert_eq!(
            format!("{}. {}", placement.rank, placement.players.join(" | ")),
            "1. Alice | Bob"
        );
    }
}
