use crate::matcher::match_rows;
use crate::model::{MatchMeta, MatchReport, RowRecord};
use crate::summary::compute_summary;

/// Run the matcher over both row sequences and wrap the groups in a stamped
/// report.
///
/// Infallible: malformed or missing fields degrade to empty strings inside
/// the matcher, never errors. All fallibility lives upstream in acquisition.
pub fn run(inventory: &[RowRecord], requests: &[RowRecord]) -> MatchReport {
    let groups = match_rows(inventory, requests);
    let summary = compute_summary(&groups);

    MatchReport {
        meta: MatchMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        groups,
    }
}
