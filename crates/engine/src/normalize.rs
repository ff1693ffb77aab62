//! Canonical text preparation for comparisons.

/// Lower-case a cell value and strip leading/trailing whitespace.
///
/// The sole sanctioned preparation before any comparison. Applied to every
/// compared field independently, never to pre-concatenated strings. Total:
/// blank or missing fields arrive as "" and stay "". Idempotent.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Motore Completo  "), "motore completo");
        assert_eq!(normalize("XYZ1"), "xyz1");
    }

    #[test]
    fn total_over_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn idempotent() {
        for input in ["  Fiat Panda ", "ANNO\t", "già normalizzato", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
