//! Common regex patterns for certificate field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Bare NPWP candidate (whitespace already stripped)
    pub static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").unwrap();

    // NPWP with an optional branch suffix, e.g. 012345678901234/000
    pub static ref NPWP_WITH_BRANCH: Regex = Regex::new(r"^[0-9]+(/[0-9]+)?$").unwrap();

    // Period / sequence tokens such as 03-2024
    pub static ref DIGITS_AND_DASHES: Regex = Regex::new(r"[0-9-]+").unwrap();
}
