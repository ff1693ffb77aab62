// Match report export (xlsx)
//
// Mirrors the on-screen report: one block per group with the request's key
// fields, then a header row derived from the first match's columns and one
// row per matched inventory item.

use std::path::Path;

use matchfacile_engine::columns::{self, lookup};
use matchfacile_engine::MatchReport;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportError;

pub fn write_xlsx(report: &MatchReport, path: &Path) -> Result<(), ExportError> {
    let xlsx_err = |e: rust_xlsxwriter::XlsxError| ExportError::Xlsx {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Report").map_err(xlsx_err)?;

    let bold = Format::new().set_bold();

    if report.groups.is_empty() {
        sheet.write_string(0, 0, "no results found").map_err(xlsx_err)?;
        workbook.save(path).map_err(xlsx_err)?;
        return Ok(());
    }

    let mut row: u32 = 0;
    for group in &report.groups {
        let code = lookup(&group.request, columns::REQUEST_ENGINE_CODE);
        let part = lookup(&group.request, columns::REQUEST_PART_DESCRIPTION);
        let brand = lookup(&group.request, columns::REQUEST_BRAND);
        let year = lookup(&group.request, columns::REQUEST_YEAR);

        sheet
            .write_string_with_format(row, 0, format!("engine request {code}"), &bold)
            .map_err(xlsx_err)?;
        sheet.write_string(row + 1, 0, "requested part").map_err(xlsx_err)?;
        sheet.write_string(row + 1, 1, part).map_err(xlsx_err)?;
        sheet.write_string(row + 2, 0, "brand/model/year").map_err(xlsx_err)?;
        sheet
            .write_string(row + 2, 1, format!("{brand} / {part} / {year}"))
            .map_err(xlsx_err)?;
        sheet.write_string(row + 3, 0, "inventory matches").map_err(xlsx_err)?;
        sheet
            .write_number(row + 3, 1, group.matches.len() as f64)
            .map_err(xlsx_err)?;
        row += 4;

        if let Some(first) = group.matches.first() {
            let headers: Vec<&str> = first.columns().collect();
            for (col, header) in headers.iter().enumerate() {
                sheet
                    .write_string_with_format(row, col as u16, *header, &bold)
                    .map_err(xlsx_err)?;
            }
            row += 1;

            for matched in &group.matches {
                for (col, header) in headers.iter().enumerate() {
                    sheet
                        .write_string(row, col as u16, matched.get(header).unwrap_or(""))
                        .map_err(xlsx_err)?;
                }
                row += 1;
            }
        }

        // Blank separator row between groups.
        row += 1;
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchfacile_engine::{run, RowRecord};

    fn sample_report() -> MatchReport {
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
    fn writes_report_readable_by_calamine() {
        use calamine::{open_workbook_auto, Data, Reader};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        write_xlsx(&sample_report(), &path).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range("Report").unwrap();
        let title = range.get_value((0, 0)).unwrap();
        assert_eq!(title, &Data::String("engine request XYZ1".into()));

        // Header row from the first match's columns.
        let header = range.get_value((4, 0)).unwrap();
        assert_eq!(
            header,
            &Data::String("Veicolo/Tipo Motore (EcoEuro)".into())
        );
    }

    #[test]
    fn empty_report_writes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vuoto.xlsx");
        let report = run(&[], &[]);
        write_xlsx(&report, &path).unwrap();
        assert!(path.exists());
    }
}
