//! Text rendering of the match report.

use matchfacile_engine::columns::{self, lookup};
use matchfacile_engine::{MatchGroup, MatchReport};
use unicode_width::UnicodeWidthStr;

/// Cap on a single table column, so one long description cell does not blow
/// up the whole table.
const MAX_COL_WIDTH: usize = 32;

pub fn text_report(report: &MatchReport) -> String {
    if report.groups.is_empty() {
        return "no results found.\n".to_string();
    }

    let mut out = String::new();
    for (i, group) in report.groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_group(&mut out, group);
    }
    out
}

fn render_group(out: &mut String, group: &MatchGroup) {
    let code = lookup(&group.request, columns::REQUEST_ENGINE_CODE);
    let part = lookup(&group.request, columns::REQUEST_PART_DESCRIPTION);
    let brand = lookup(&group.request, columns::REQUEST_BRAND);
    let year = lookup(&group.request, columns::REQUEST_YEAR);

    out.push_str(&format!("engine request {code}\n"));
    out.push_str(&format!("  requested part:    {part}\n"));
    out.push_str(&format!("  brand/model/year:  {brand} / {part} / {year}\n"));
    out.push_str(&format!("  inventory matches: {}\n", group.matches.len()));

    let Some(first) = group.matches.first() else {
        return;
    };

    // Header row from the first match's columns, table rows in match order.
    let headers: Vec<&str> = first.columns().collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for matched in &group.matches {
        for (i, header) in headers.iter().enumerate() {
            let width = display_width(matched.get(header).unwrap_or(""));
            if width > widths[i] {
                widths[i] = width;
            }
        }
    }
    for width in &mut widths {
        *width = (*width).min(MAX_COL_WIDTH);
    }

    out.push_str("  ");
    for (i, header) in headers.iter().enumerate() {
        out.push_str(&pad_right(header, widths[i]));
        out.push_str("  ");
    }
    out.push('\n');

    for matched in &group.matches {
        out.push_str("  ");
        for (i, header) in headers.iter().enumerate() {
            out.push_str(&pad_right(matched.get(header).unwrap_or(""), widths[i]));
            out.push_str("  ");
        }
        out.push('\n');
    }
}

/// Display width of a string, accounting for CJK double-width, emoji, etc.
fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `width` display columns, adding ".." if
/// truncated. Uses Unicode display width so alignment stays correct.
fn truncate_display(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width < 3 {
        return String::new();
    }

    let budget = width - 2;
    let mut used = 0;
    let mut end_byte = 0;
    for (i, ch) in s.char_indices() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > budget {
            end_byte = i;
            break;
        }
        used += cw;
        end_byte = i + ch.len_utf8();
    }

    format!("{}..", &s[..end_byte])
}

/// Pad or truncate a string to exactly `width` display columns.
fn pad_right(s: &str, width: usize) -> String {
    let sw = display_width(s);
    if sw > width {
        truncate_display(s, width)
    } else {
        format!("{}{}", s, " ".repeat(width - sw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchfacile_engine::{run, RowRecord};

    fn report_with_match() -> MatchReport {
        let inventory: Vec<RowRecord> = vec![[
            ("Veicolo/Tipo Motore (EcoEuro)", "XYZ1"),
            ("Ricambio", "Motore Completo Fiat Panda 2010"),
        ]
        .into_iter()
        .collect()];
        let requests: Vec<RowRecord> = vec![[
            ("COD MOT", "XYZ1"),
            ("RICAMBIO", "Motore Completo"),
            ("CAT.", "Fiat"),
            ("ANNO", "2010"),
        ]
        .into_iter()
        .collect()];
        run(&inventory, &requests)
    }

    #[test]
    fn renders_group_with_match_table() {
        let text = text_report(&report_with_match());
        assert!(text.contains("engine request XYZ1"));
        assert!(text.contains("inventory matches: 1"));
        assert!(text.contains("Veicolo/Tipo Motore (EcoEuro)"));
        assert!(text.contains("Motore Completo Fiat Panda 2010"));
    }

    #[test]
    fn renders_empty_report_message() {
        let report = run(&[], &[]);
        assert_eq!(text_report(&report), "no results found.\n");
    }

    #[test]
    fn group_without_matches_has_no_table() {
        let requests: Vec<RowRecord> = vec![[
            ("COD MOT", "QQQ9"),
            ("RICAMBIO", "Motore Completo"),
            ("CAT.", "Opel"),
            ("ANNO", ""),
        ]
        .into_iter()
        .collect()];
        let report = run(&[], &requests);
        let text = text_report(&report);
        assert!(text.contains("inventory matches: 0"));
        assert!(!text.contains("Veicolo"));
    }

    #[test]
    fn pad_right_truncates_long_cells() {
        assert_eq!(pad_right("abcdef", 4), "ab..");
        assert_eq!(pad_right("ab", 4), "ab  ");
    }
}
