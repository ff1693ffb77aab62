// CSV/TSV row acquisition

use std::io::Read;
use std::path::Path;

use matchfacile_engine::RowRecord;

use crate::error::ReadError;

/// Read a delimited text file into row records. The first record is the
/// header row; the delimiter is sniffed from the content.
pub fn read_rows(path: &Path) -> Result<Vec<RowRecord>, ReadError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    rows_from_string(path, &content, delimiter)
}

/// Read only the header record of a delimited text file.
pub fn read_headers(path: &Path) -> Result<Vec<String>, ReadError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ReadError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ReadError::NoHeaders {
            path: path.display().to_string(),
        });
    }

    Ok(headers)
}

/// Pick the field delimiter that splits the leading lines most consistently.
///
/// Each candidate must split the header line into at least two fields;
/// among those, the winner is the one where the most sample lines agree
/// with the header's field count, weighted by that count so wider rows
/// beat narrower ones.
fn sniff_delimiter(content: &str) -> u8 {
    const CANDIDATES: [u8; 4] = [b'\t', b';', b',', b'|'];
    const SAMPLE_LINES: usize = 10;

    let sample: Vec<&str> = content.lines().take(SAMPLE_LINES).collect();

    CANDIDATES
        .into_iter()
        .filter_map(|delim| {
            let header_fields = field_count(sample.first()?, delim);
            if header_fields < 2 {
                return None;
            }
            let agreeing = sample
                .iter()
                .filter(|line| field_count(line, delim) == header_fields)
                .count();
            Some((delim, agreeing * header_fields))
        })
        .max_by_key(|&(_, weight)| weight)
        .map(|(delim, _)| delim)
        .unwrap_or(b',')
}

/// Number of fields the csv parser sees on a single line.
fn field_count(line: &str, delim: u8) -> usize {
    csv::ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(|record| record.ok())
        .map(|record| record.len())
        .unwrap_or(1)
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, common
/// for Excel-exported CSVs).
fn read_file_as_utf8(path: &Path) -> Result<String, ReadError> {
    let open_err = |e: std::io::Error| ReadError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut file = std::fs::File::open(path).map_err(open_err)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(open_err)?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn rows_from_string(path: &Path, content: &str, delimiter: u8) -> Result<Vec<RowRecord>, ReadError> {
    let csv_err = |message: String| ReadError::Csv {
        path: path.display().to_string(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_err(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(ReadError::NoHeaders {
            path: path.display().to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_err(e.to_string()))?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let mut row = RowRecord::new();
        for (col, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            row.push(header.clone(), record.get(col).unwrap_or(""));
        }
        rows.push(row);
    }

    Ok(rows)
}
