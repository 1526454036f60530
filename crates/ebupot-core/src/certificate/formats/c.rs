//! Layout C: tabular BPBS form with an H.1/NOMOR header and no NITKU.

use super::tabular::{TabularScanner, TabularVariant};
use crate::certificate::rules::patterns::DIGITS_ONLY;
use crate::certificate::rules::text::char_count;
use crate::models::record::ExtractedRecord;

const NPWP_LEN: usize = 15;

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutC;

impl TabularVariant for LayoutC {
    const HEADER_GAP: u8 = 4;
    const TRAILING_GAP: u8 = 0;

    fn is_npwp(candidate: &str) -> bool {
        DIGITS_ONLY.is_match(candidate) && char_count(candidate) == NPWP_LEN
    }

    fn initial_record() -> ExtractedRecord {
        ExtractedRecord::with_c3()
    }

    fn store_date(record: &mut ExtractedRecord, iso: String) {
        record.c3 = Some(iso);
    }
}

/// Scanner for layout C.
pub type FormatC = TabularScanner<LayoutC>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::automaton::run;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
FORMULIR BPBS
H.1
NOMOR
H.2
Pernyataan: Bukti Pemotongan ini.
BP 23 0001
H.2
H.3
A.1
A.2
2401-ABCD123456789
B.5
Kontrak Jasa 15012024
01 234 567 8 901 234
PT CONTOH
31 01 2024
ignored";

    #[test]
    fn test_certificate_with_secondary_reference() {
        let record = run::<FormatC>(SAMPLE);

        assert_eq!(
            record,
            ExtractedRecord {
                h1: "BP230001".to_string(),
                b1: "2401-ABCD".to_string(),
                b2: "123456789".to_string(),
                b8: vec!["Kontrak Jasa ".to_string(), "2024-01-15".to_string()],
                c1: "012345678901234".to_string(),
                c3: Some("2024-01-31".to_string()),
                ..ExtractedRecord::default()
            }
        );
    }

    #[test]
    fn test_certificate_with_primary_reference() {
        let text = "\
Bukti Pemotongan ini.
BP 23 0009
x
x
x
x
2401-ABCD123456789
B.5
FP-0001
Faktur Pajak 15012024
0123 4567 8901 234
PT CONTOH
31012024";
        let record = run::<FormatC>(text);

        assert_eq!(record.b7, vec!["FP-0001", "Faktur Pajak ", "2024-01-15"]);
        assert!(record.b8.is_empty());
        assert_eq!(record.c1, "012345678901234");
        assert_eq!(record.c3, Some("2024-01-31".to_string()));
    }

    #[test]
    fn test_npwp_detection() {
        assert!(LayoutC::is_npwp("012345678901234"));
        assert!(!LayoutC::is_npwp("01234567890123"));
        assert!(!LayoutC::is_npwp("012345678901234/000"));
    }
}
