//! CSV export and import.

use crate::error::ReportError;
use crate::table::ReportTable;

/// Serialize a table to CSV, header row first. Quoting follows RFC 4180 so
/// commas and quotes inside cells survive a round trip.
pub fn write_csv(table: &ReportTable) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Malformed(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse CSV text into header + rows.
///
/// Used for catalog imports; ragged rows are rejected rather than padded.
pub fn parse_csv(input: &str) -> Result<(Vec<String>, Vec<Vec<String>>), ReportError> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != headers.len() {
            return Err(ReportError::Malformed(format!(
                "row has {} fields, expected {}",
                record.len(),
                headers.len()
            )));
        }
        rows.push(record.iter().map(String::from).collect());
    }
    Ok((headers, rows))
}
