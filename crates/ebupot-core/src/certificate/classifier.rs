//! Layout detection from signature substrings.

use tracing::debug;

use crate::models::record::FormatTag;

/// Header shared by layouts A and E.
pub const SIGNATURE_HEADER_BLOCK: &str = "FORMULIR BPBS\nH.1\nH.2\nH.3";
/// Header of layout B.
pub const SIGNATURE_BUKTI: &str = "FORMULIR BPBS\nBukti Pemotongan";
/// Header shared by layouts C and D.
pub const SIGNATURE_NOMOR: &str = "FORMULIR BPBS\nH.1\nNOMOR";
/// Title of layout F.
pub const SIGNATURE_UNIFIED: &str = "UNIFIKASI BERFORMAT STANDAR";
/// NITKU block separating E from A and D from C.
pub const SIGNATURE_NITKU: &str = "A.3  NITKU";

/// Identify the printed layout of `text`.
///
/// Rules are checked in a fixed order and the first match wins, so a text
/// carrying several signatures gets the earliest one.
pub fn classify(text: &str) -> FormatTag {
    let has_nitku = || text.contains(SIGNATURE_NITKU);

    let tag = if text.contains(SIGNATURE_HEADER_BLOCK) {
        if has_nitku() { FormatTag::E } else { FormatTag::A }
    } else if text.contains(SIGNATURE_BUKTI) {
        FormatTag::B
    } else if text.contains(SIGNATURE_NOMOR) {
        if has_nitku() { FormatTag::D } else { FormatTag::C }
    } else if text.contains(SIGNATURE_UNIFIED) {
        FormatTag::F
    } else if text.trim().is_empty() {
        FormatTag::Empty
    } else {
        FormatTag::Unknown
    };

    debug!("Classified {} characters as format {}", text.len(), tag);
    tag
}
