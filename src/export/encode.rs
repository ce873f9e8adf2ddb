//! CSV encoding of flat row sequences.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode `rows` as CSV: a header line of field names, then one line per row.
///
/// Values containing a delimiter, quote or line break are quoted with
/// embedded quotes doubled. An empty slice encodes to an empty string.
pub fn to_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Decoded CSV text: the header names and the typed rows
#[derive(Debug)]
pub struct DecodedCsv<T> {
    pub headers: Vec<String>,
    pub rows: Vec<T>,
}

/// Parse CSV text produced by [`to_csv`]
pub fn from_csv<T: DeserializeOwned>(text: &str) -> anyhow::Result<DecodedCsv<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for (line, row) in reader.deserialize::<T>().enumerate() {
        let row: T = row.map_err(|e| anyhow::anyhow!("Invalid CSV row {}: {}", line + 1, e))?;
        rows.push(row);
    }

    Ok(DecodedCsv { headers, rows })
}
