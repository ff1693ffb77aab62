//! Column contract for the two inputs.
//!
//! Column names are contract, not configuration: the input files must carry
//! these exact headers, in one of the listed case variants. Each logical
//! field is an ordered table of candidate keys resolved by [`lookup`].

use crate::model::RowRecord;

/// Candidate header names for one logical field, in lookup order.
pub type ColumnAliases = &'static [&'static str];

// Request list
pub const REQUEST_ENGINE_CODE: ColumnAliases = &["COD MOT", "Cod Mot"];
pub const REQUEST_PART_DESCRIPTION: ColumnAliases = &["RICAMBIO", "Ricambio"];
pub const REQUEST_BRAND: ColumnAliases = &["CAT.", "Cat."];
pub const REQUEST_YEAR: ColumnAliases = &["ANNO"];

// Inventory catalog
pub const INVENTORY_ENGINE_CODE: ColumnAliases = &["Veicolo/Tipo Motore (EcoEuro)"];
pub const INVENTORY_PART_DESCRIPTION: ColumnAliases = &["Ricambio"];

/// Value of the first alias that is present with a non-empty value, or ""
/// when no alias yields one.
///
/// Readers materialize blank cells as "", so a present-but-blank first alias
/// falls through to the next candidate.
pub fn lookup<'a>(row: &'a RowRecord, aliases: ColumnAliases) -> &'a str {
    aliases
        .iter()
        .filter_map(|name| row.get(name))
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_alias_wins() {
        let row: RowRecord = [("COD MOT", "AAA"), ("Cod Mot", "BBB")].into_iter().collect();
        assert_eq!(lookup(&row, REQUEST_ENGINE_CODE), "AAA");
    }

    #[test]
    fn blank_first_alias_falls_through() {
        let row: RowRecord = [("COD MOT", ""), ("Cod Mot", "BBB")].into_iter().collect();
        assert_eq!(lookup(&row, REQUEST_ENGINE_CODE), "BBB");
    }

    #[test]
    fn missing_field_is_empty() {
        let row: RowRecord = [("ANNO", "2010")].into_iter().collect();
        assert_eq!(lookup(&row, REQUEST_ENGINE_CODE), "");
        assert_eq!(lookup(&row, REQUEST_YEAR), "2010");
    }
}
