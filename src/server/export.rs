//! CSV rendering of the move history.

use crate::core::HistoryRecord;
use chrono::SecondsFormat;

/// Header row of the export.
pub const CSV_HEADER: [&str; 2] = ["Timestamp", "Moves"];

/// Render `records` as CSV: a header row, then one `timestamp,description`
/// row per record with RFC 3339 UTC timestamps.
///
/// # Example
///
/// ```rust
/// use stackbot::core::HistoryRecord;
/// use stackbot::server::history_csv;
/// use chrono::{TimeZone, Utc};
///
/// let record = HistoryRecord {
///     timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
///     description: "Moved up".to_string(),
/// };
/// assert_eq!(
///     history_csv(&[record]),
///     "Timestamp,Moves\n2024-05-01T12:30:00Z,Moved up\n"
/// );
/// ```
pub fn history_csv(records: &[HistoryRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER);
    for record in records {
        let timestamp = record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
        push_row(&mut out, &[timestamp.as_str(), record.description.as_str()]);
    }
    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

// RFC 4180: quote fields containing separators, quotes or line breaks, and
// double any embedded quotes.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
