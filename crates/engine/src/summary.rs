use crate::model::{MatchGroup, MatchSummary};

/// Compute summary statistics from match groups.
pub fn compute_summary(groups: &[MatchGroup]) -> MatchSummary {
    let groups_with_matches = groups.iter().filter(|g| !g.matches.is_empty()).count();

    MatchSummary {
        total_groups: groups.len(),
        groups_with_matches,
        groups_without_matches: groups.len() - groups_with_matches,
        matched_rows: groups.iter().map(|g| g.matches.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowRecord;

    fn group(match_count: usize) -> MatchGroup {
        MatchGroup {
            request: RowRecord::new(),
            matches: vec![RowRecord::new(); match_count],
        }
    }

    #[test]
    fn summary_counts() {
        let groups = vec![group(2), group(0), group(1), group(0)];
        let summary = compute_summary(&groups);
        assert_eq!(summary.total_groups, 4);
        assert_eq!(summary.groups_with_matches, 2);
        assert_eq!(summary.groups_without_matches, 2);
        assert_eq!(summary.matched_rows, 3);
    }

    #[test]
    fn summary_of_empty_report() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total_groups, 0);
        assert_eq!(summary.matched_rows, 0);
    }
}
