//! Date display for entries

use crate::profile::Entry;

/// Label used when an entry has a start date but no end date
pub const OPEN_RANGE_END: &str = "Present";

/// Produce the human-readable date for an entry
///
/// A non-empty `date` wins. Otherwise the range is synthesized as
/// `"{date_from} - {date_until}"`, with `date_until` falling back to
/// [`OPEN_RANGE_END`].
pub fn format_date(entry: &Entry) -> String {
    if let Some(date) = entry.date.as_deref().filter(|d| !d.is_empty()) {
        return date.to_string();
    }

    let from = entry.date_from.as_deref().unwrap_or("");
    let until = entry.date_until.as_deref().unwrap_or(OPEN_RANGE_END);
    format!("{} - {}", from, until)
}
