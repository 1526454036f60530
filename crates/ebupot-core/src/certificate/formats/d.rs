//! Layout D: tabular BPBS form with a NITKU block.
//!
//! The NPWP may carry a branch suffix (`/000`) and the certificate date
//! is stored as C.4.

use super::tabular::{TabularScanner, TabularVariant};
use crate::certificate::rules::patterns::NPWP_WITH_BRANCH;
use crate::certificate::rules::text::char_count;
use crate::models::record::ExtractedRecord;

const MIN_NPWP_LEN: usize = 15;

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutD;

impl TabularVariant for LayoutD {
    const HEADER_GAP: u8 = 5;
    const TRAILING_GAP: u8 = 1;

    fn is_npwp(candidate: &str) -> bool {
        NPWP_WITH_BRANCH.is_match(candidate) && char_count(candidate) >= MIN_NPWP_LEN
    }

    fn initial_record() -> ExtractedRecord {
        ExtractedRecord::with_c4()
    }

    fn store_date(record: &mut ExtractedRecord, iso: String) {
        record.c4 = Some(iso);
    }
}

/// Scanner for layout D.
pub type FormatD = TabularScanner<LayoutD>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::automaton::run;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
FORMULIR BPBS
H.1
NOMOR
A.3  NITKU
Bukti Pemotongan ini.
BP 23 0002
x1
x2
x3
x4
x5
2402-WXYZ987654321
B.5
FP-0002
Faktur Pajak 20 02 2024
012345678901234/000
PT CONTOH
NITKU 000
29 02 2024";

    #[test]
    fn test_certificate_with_primary_reference() {
        let record = run::<FormatD>(SAMPLE);

        assert_eq!(
            record,
            ExtractedRecord {
                h1: "BP230002".to_string(),
                b1: "2402-WXYZ".to_string(),
                b2: "987654321".to_string(),
                b7: vec![
                    "FP-0002".to_string(),
                    "Faktur Pajak ".to_string(),
                    "2024-02-20".to_string(),
                ],
                c1: "012345678901234/000".to_string(),
                c4: Some("2024-02-29".to_string()),
                ..ExtractedRecord::default()
            }
        );
    }

    #[test]
    fn test_branch_npwp_on_second_line_means_secondary_reference() {
        let text = "\
Bukti Pemotongan ini.
BP 23 0003
x
x
x
x
x
2402-WXYZ987654321
B.5
Perjanjian 01 03 2024
012345678901234/001
PT CONTOH
NITKU
01032024";
        let record = run::<FormatD>(text);

        assert!(record.b7.is_empty());
        assert_eq!(record.b8, vec!["Perjanjian ", "2024-03-01"]);
        assert_eq!(record.c1, "012345678901234/001");
        assert_eq!(record.c3, None);
        assert_eq!(record.c4, Some("2024-03-01".to_string()));
    }

    #[test]
    fn test_npwp_detection() {
        assert!(LayoutD::is_npwp("012345678901234"));
        assert!(LayoutD::is_npwp("012345678901234/000"));
        assert!(!LayoutD::is_npwp("0123456789/000"));
        assert!(!LayoutD::is_npwp("FakturPajak20022024"));
    }
}
