// Excel row acquisition (xlsx, xls, xlsb, ods)
//
// Import only: the first sheet is read as a header row plus data rows. Every
// header is materialized for every row, blank cells as "", so downstream
// alias lookup sees blank and populated columns alike.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use matchfacile_engine::RowRecord;

use crate::error::ReadError;

/// Read only the header row of a workbook's first sheet.
pub fn read_headers(path: &Path) -> Result<Vec<String>, ReadError> {
    let (headers, _) = sheet_contents(path)?;
    Ok(headers)
}

/// Read the first sheet of a workbook into row records.
pub fn read_rows(path: &Path) -> Result<Vec<RowRecord>, ReadError> {
    let (headers, data_rows) = sheet_contents(path)?;

    let mut rows = Vec::new();
    for sheet_row in data_rows {
        // Wholly blank rows carry no record.
        if sheet_row.iter().all(|value| value.is_empty()) {
            continue;
        }

        let mut record = RowRecord::new();
        for (col, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = sheet_row.get(col).cloned().unwrap_or_default();
            record.push(header.clone(), value);
        }
        rows.push(record);
    }

    Ok(rows)
}

fn sheet_contents(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), ReadError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path).map_err(|e| ReadError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReadError::NoSheets {
            path: path.display().to_string(),
        })?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| ReadError::Sheet {
            path: path.display().to_string(),
            sheet: first_sheet.clone(),
            message: e.to_string(),
        })?;

    let mut sheet_rows = range.rows();

    let headers: Vec<String> = match sheet_rows.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => {
            return Err(ReadError::NoHeaders {
                path: path.display().to_string(),
            })
        }
    };
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ReadError::NoHeaders {
            path: path.display().to_string(),
        });
    }

    let data_rows: Vec<Vec<String>> = sheet_rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok((headers, data_rows))
}

/// String rendering of a cell. Integral floats drop the decimal point so a
/// year cell compares as "2010", not "2010.0".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => float_text(*n),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        // Raw serial value; the matcher only ever compares text.
        Data::DateTime(dt) => float_text(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

fn float_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn fixture(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("inventario.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Veicolo/Tipo Motore (EcoEuro)").unwrap();
        sheet.write_string(0, 1, "Ricambio").unwrap();
        sheet.write_string(0, 2, "ANNO").unwrap();
        sheet.write_string(1, 0, "XYZ1").unwrap();
        sheet.write_string(1, 1, "Motore Completo Fiat Panda").unwrap();
        sheet.write_number(1, 2, 2010.0).unwrap();
        // Row 2 left wholly blank.
        sheet.write_string(3, 0, "ABC9").unwrap();
        // Blank description cell on a partially filled row.
        sheet.write_number(3, 2, 2011.5).unwrap();
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn reads_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let rows = read_rows(&fixture(dir.path())).unwrap();

        assert_eq!(rows.len(), 2, "the wholly blank row is skipped");
        assert_eq!(rows[0].get("Veicolo/Tipo Motore (EcoEuro)"), Some("XYZ1"));
        assert_eq!(rows[0].get("Ricambio"), Some("Motore Completo Fiat Panda"));
        assert_eq!(rows[0].get("ANNO"), Some("2010"), "integral year without decimals");
        assert_eq!(rows[1].get("Ricambio"), Some(""), "blank cell materializes as empty");
        assert_eq!(rows[1].get("ANNO"), Some("2011.5"));
    }

    #[test]
    fn read_headers_returns_header_row_only() {
        let dir = tempfile::tempdir().unwrap();
        let headers = read_headers(&fixture(dir.path())).unwrap();
        assert_eq!(
            headers,
            vec!["Veicolo/Tipo Motore (EcoEuro)", "Ricambio", "ANNO"]
        );
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows(&dir.path().join("assente.xlsx")).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }

    #[test]
    fn float_text_renders_integers_bare() {
        assert_eq!(float_text(2010.0), "2010");
        assert_eq!(float_text(1.25), "1.25");
        assert_eq!(float_text(-3.0), "-3");
    }
}
