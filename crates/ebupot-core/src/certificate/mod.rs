//! Certificate classification and field extraction.

pub mod automaton;
pub mod classifier;
pub mod formats;
mod parser;
pub mod rules;

pub use automaton::{Flow, LineAutomaton, run};
pub use classifier::classify;
pub use parser::{EbupotParser, ExtractionResult};

use crate::models::record::{ExtractedRecord, FormatTag};

use formats::{FormatA, FormatB, FormatC, FormatD, FormatE, FormatF};

/// Run the scanner for `tag` over `text`.
///
/// Unknown and empty tags yield an empty record; partial matches yield
/// whatever fields were reached before the text ran out.
pub fn extract(text: &str, tag: FormatTag) -> ExtractedRecord {
    match tag {
        FormatTag::A => run::<FormatA>(text),
        FormatTag::B => run::<FormatB>(text),
        FormatTag::C => run::<FormatC>(text),
        FormatTag::D => run::<FormatD>(text),
        FormatTag::E => run::<FormatE>(text),
        FormatTag::F => run::<FormatF>(text),
        FormatTag::Unknown | FormatTag::Empty => ExtractedRecord::empty(),
    }
}

/// [`extract`] with the tag given as its exact letter code.
///
/// Only `"A"` to `"F"` select a scanner; any other code yields the empty record.
pub fn extract_with_code(text: &str, code: &str) -> ExtractedRecord {
    let tag = match code {
        "A" => FormatTag::A,
        "B" => FormatTag::B,
        "C" => FormatTag::C,
        "D" => FormatTag::D,
        "E" => FormatTag::E,
        "F" => FormatTag::F,
        _ => return ExtractedRecord::empty(),
    };
    extract(text, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FORMAT_A: &str = "\
FORMULIR BPBS
H.1
H.2
H.3
B.7 Dokumen Referensi
010.000-23.00000001
Nama Dokumen
Faktur Pajak 01022023
B.8
-
-
B.9
C.1
:NPWP
012345678901234
Nama Wajib PajakC.2:
mmyyyy
28022023
C.4
Bukti Pemotongan ini.
BP23-2023-0001
0001-2023
01/03/2023";

    #[test]
    fn test_classify_then_extract() {
        let tag = classify(FORMAT_A);
        assert_eq!(tag, FormatTag::A);

        let record = extract(FORMAT_A, tag);
        assert_eq!(record.h1, "BP23-2023-0001");
        assert_eq!(record.b1, "0001-2023");
        assert_eq!(record.b2, "01/03/2023");
        assert_eq!(record.b7, vec!["010.000-23.00000001", "Faktur Pajak ", "2023-02-01"]);
        assert!(record.b8.is_empty());
        assert_eq!(record.c1, "012345678901234");
        assert_eq!(record.c3, Some("2023-02-28".to_string()));
    }

    #[test]
    fn test_unknown_and_empty_give_empty_record() {
        for tag in [FormatTag::Unknown, FormatTag::Empty] {
            let record = extract(FORMAT_A, tag);
            assert_eq!(record, ExtractedRecord::empty());
            assert!(record.b7.is_empty() && record.b8.is_empty());
            assert!(record.c3.is_none() && record.c4.is_none());
        }
    }

    #[test]
    fn test_every_tag_is_total() {
        for tag in FormatTag::ALL {
            let _ = extract("", tag);
            let _ = extract("Dokumen Referensi\nBukti Pemotongan ini.\n\n\n", tag);
        }
    }

    #[test]
    fn test_extract_with_code() {
        let record = extract_with_code(FORMAT_A, "A");
        assert_eq!(record.c1, "012345678901234");

        assert_eq!(extract_with_code(FORMAT_A, "Z"), ExtractedRecord::empty());
        assert_eq!(extract_with_code(FORMAT_A, "U"), ExtractedRecord::empty());
    }

    #[test]
    fn test_extract_with_code_requires_exact_code() {
        let text = "Dokumen Referensi\nREF\nFaktur 01022023\nB.8";
        assert_eq!(extract_with_code(text, "A").b7, vec!["REF", "Faktur ", "2023-02-01"]);

        for code in ["Q", "a", " A", "AB", ""] {
            assert_eq!(extract_with_code(text, code), ExtractedRecord::empty());
        }
    }
}
