//! `rankledger-recon` — Tournament results reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded grids, returns the merged ledger
//! plus a structured report. No CLI or IO dependencies.

pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod placement;
pub mod points;

pub use config::{LedgerLayout, LookupLayout, ReconcileConfig};
pub use error::ReconError;
pub use merge::merge;
pub use model::{MergeReport, Placement, PointsSchedule, BRACKET_STARTS};
pub use placement::parse_results;
pub use points::{list_levels, resolve_schedule};
