//! Date helpers shared by the layout scanners.
//!
//! None of these validate the calendar: whatever digits are present are
//! re-sliced into `yyyy-mm-dd` order as-is.

use super::text::substring;

/// Non-space characters taken from the end of a line as its date token.
pub const DATE_TOKEN_LEN: usize = 8;

/// Indonesian month names and their two-digit numbers.
pub const INDONESIAN_MONTHS: [(&str, &str); 12] = [
    ("Januari", "01"),
    ("Februari", "02"),
    ("Maret", "03"),
    ("April", "04"),
    ("Mei", "05"),
    ("Juni", "06"),
    ("Juli", "07"),
    ("Agustus", "08"),
    ("September", "09"),
    ("Oktober", "10"),
    ("November", "11"),
    ("Desember", "12"),
];

/// Convert a contiguous `ddmmyyyy` string to `yyyy-mm-dd`.
///
/// Short input produces short components (`""` becomes `"--"`).
pub fn ddmmyyyy_to_iso(ddmmyyyy: &str) -> String {
    format!(
        "{}-{}-{}",
        substring(ddmmyyyy, 4, 8),
        substring(ddmmyyyy, 2, 4),
        substring(ddmmyyyy, 0, 2)
    )
}

/// Split a reference line whose trailing date is glued to the document name.
///
/// Scans backward from the end, skipping spaces, until eight characters
/// are collected; the scan never looks at index 0. The name is everything
/// before the index where the scan stopped, trailing spaces included.
pub fn split_doc_date(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();
    let mut index = chars.len() as isize - 1;
    let mut date = Vec::with_capacity(DATE_TOKEN_LEN);

    while index > 0 {
        let c = chars[index as usize];
        if c != ' ' {
            date.push(c);
        }
        if date.len() >= DATE_TOKEN_LEN {
            break;
        }
        index -= 1;
    }

    let digits: String = date.into_iter().rev().collect();
    (substring(line, 0, index), ddmmyyyy_to_iso(&digits))
}

/// Two-digit month number for an Indonesian month name.
pub fn month_number(name: &str) -> Option<&'static str> {
    INDONESIAN_MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// Convert `"dd <Month> yyyy"` (e.g. `"05 Maret 2024"`) to `yyyy-mm-dd`.
///
/// Missing parts and unknown month names contribute empty components.
/// An unknown month is left empty on purpose, never rendered as a placeholder word.
pub fn textual_date_to_iso(text: &str) -> String {
    let mut parts = text.split(' ');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().and_then(month_number).unwrap_or_default();
    let year = parts.next().unwrap_or_default();
    format!("{year}-{month}-{day}")
}
