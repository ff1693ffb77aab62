use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One parsed line of a tabular input: an ordered column → value mapping.
///
/// The column set is discovered from the data and differs between the two
/// inputs, so rows are a generic mapping rather than a fixed struct. Readers
/// materialize every header for every row, blank cells as "". Column order is
/// preserved: renderers derive a group's header row from the keys of its
/// first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<(String, String)>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a column. When a column name repeats, `get` returns the value
    /// appended last: a repeated header overwrites the earlier one, as in a
    /// sheet-to-object conversion.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Case-sensitive lookup of a column's value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in input order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// (column, value) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

/// Serialized as a map in column order, so JSON output keeps the sheet's
/// column layout.
impl Serialize for RowRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One request row paired with every inventory row satisfying it, in
/// inventory input order. A request with no qualifying inventory rows still
/// gets a group with an empty match list.
#[derive(Debug, Clone, Serialize)]
pub struct MatchGroup {
    pub request: RowRecord,
    pub matches: Vec<RowRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub total_groups: usize,
    pub groups_with_matches: usize,
    pub groups_without_matches: usize,
    pub matched_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub meta: MatchMeta,
    pub summary: MatchSummary,
    pub groups: Vec<MatchGroup>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_case_sensitive() {
        let row: RowRecord = [("COD MOT", "XYZ1")].into_iter().collect();
        assert_eq!(row.get("COD MOT"), Some("XYZ1"));
        assert_eq!(row.get("Cod Mot"), None);
    }

    #[test]
    fn get_returns_last_duplicate() {
        let mut row = RowRecord::new();
        row.push("Ricambio", "overwritten");
        row.push("Ricambio", "kept");
        assert_eq!(row.get("Ricambio"), Some("kept"));
    }

    #[test]
    fn serializes_in_column_order() {
        let row: RowRecord = [("B", "2"), ("A", "1"), ("C", "3")].into_iter().collect();
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"B":"2","A":"1","C":"3"}"#);
    }
}
