//! Header row normalization.

use csv::StringRecord;

/// Normalizes a header value: strips a UTF-8 byte-order mark and trims
/// surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Converts the first record of a source into column names.
pub(crate) fn header_columns(record: &StringRecord) -> Vec<String> {
    record.iter().map(normalize_header).collect()
}
