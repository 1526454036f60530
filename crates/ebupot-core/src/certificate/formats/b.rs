//! Layout B: "Bukti Pemotongan Pajak Penghasilan" with scrambled digits.
//!
//! The issuing system of this layout emits the NPWP, the reference date
//! and the signing date with their characters shuffled; the fixed tables
//! in [`permutation`](crate::certificate::rules::permutation) restore them.

use crate::certificate::automaton::{Flow, LineAutomaton};
use crate::certificate::rules::permutation::{
    FORMAT_B_NPWP, FORMAT_B_REFERENCE_DATE, FORMAT_B_SIGNING_DATE,
};
use crate::certificate::rules::text::{
    char_from_end, last_chars, position, substring, without_last_chars,
};
use crate::models::record::ExtractedRecord;

const NUMBER_HEADER: &str = "B.1B.2B.3B.4B.5B.6";
const REFERENCE_HEADER: &str = "ddmmyyyy";
const NO_REFERENCE: &str = "B.8";
const ISSUER_SECTION: &str = "C. IDENTITAS PEMOTONG";
const SIGNING_LABEL: &str = "C.2Nama Wajib Pajak:";

/// Scrambled date characters at the end of the combined reference line.
const SCRAMBLED_DATE_LEN: usize = 8;

/// Offset from the end of the amounts line where a decimal comma widens
/// the B.1 value from six to seven characters.
const DECIMAL_COMMA_OFFSET: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Anchor,
    Skip,
    Header,
    AwaitNumbers,
    Numbers,
    AwaitReference,
    ReferenceName,
    ReferenceDate,
    Ignore,
    AwaitIssuer,
    Npwp,
    AwaitSigningDate,
    SigningDate,
}

/// Scanner for layout B.
#[derive(Debug)]
pub struct FormatB {
    state: State,
    record: ExtractedRecord,
}

impl Default for FormatB {
    fn default() -> Self {
        Self {
            state: State::default(),
            record: ExtractedRecord::with_c3(),
        }
    }
}

fn certificate_number(line: &str) -> String {
    if char_from_end(line, DECIMAL_COMMA_OFFSET) == Some(',') {
        last_chars(line, 7)
    } else {
        last_chars(line, 6)
    }
}

fn certificate_sequence(line: &str) -> String {
    let dash = position(line, "-");
    substring(line, dash - 2, dash + 7)
}

impl LineAutomaton for FormatB {
    const ANCHOR: &'static str = "PPh Tidak Final";

    fn step(&mut self, line: &str) -> Flow {
        let record = &mut self.record;
        self.state = match self.state {
            State::Anchor => State::Skip,
            State::Skip => State::Header,
            State::Header => {
                record.h1 = line.to_string();
                State::AwaitNumbers
            }
            State::AwaitNumbers if line == NUMBER_HEADER => State::Numbers,
            State::Numbers => {
                record.b1 = certificate_number(line);
                record.b2 = certificate_sequence(line);
                State::AwaitReference
            }
            State::AwaitReference if line == REFERENCE_HEADER => State::ReferenceName,
            State::ReferenceName if line == NO_REFERENCE => {
                record.b7.extend([String::new(), String::new(), String::new()]);
                State::Ignore
            }
            State::ReferenceName => {
                record.b7.push(line.to_string());
                State::ReferenceDate
            }
            State::ReferenceDate => {
                let scrambled = last_chars(line, SCRAMBLED_DATE_LEN);
                record.b7.push(without_last_chars(line, SCRAMBLED_DATE_LEN));
                record.b7.push(FORMAT_B_REFERENCE_DATE.apply(&scrambled));
                State::Ignore
            }
            State::Ignore => State::AwaitIssuer,
            State::AwaitIssuer if line.starts_with(ISSUER_SECTION) => State::Npwp,
            State::Npwp => {
                record.c1 = FORMAT_B_NPWP.apply(line);
                State::AwaitSigningDate
            }
            State::AwaitSigningDate if line == SIGNING_LABEL => State::SigningDate,
            State::SigningDate => {
                record.c3 = Some(FORMAT_B_SIGNING_DATE.apply(line));
                return Flow::Halt;
            }
            waiting => waiting,
        };
        Flow::Continue
    }

    fn finish(self) -> ExtractedRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::automaton::run;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
FORMULIR BPBS
Bukti Pemotongan Pajak Penghasilan
PPh Tidak Final
PASAL 23
BP23-000123
B.1B.2B.3B.4B.5B.6
BP 24-5678901 2.500.000,00 500.000
B.7 Dokumen Dasar
ddmmyyyy
Faktur Pajak
010.000-23.0000000102002312
B.8
C. IDENTITAS PEMOTONG/PEMUNGUT PPh
280445903311672
C.2Nama Wajib Pajak:
02253130
ignored";

    #[test]
    fn test_full_certificate() {
        let record = run::<FormatB>(SAMPLE);

        assert_eq!(
            record,
            ExtractedRecord {
                h1: "BP23-000123".to_string(),
                b1: "500.000".to_string(),
                b2: "24-567890".to_string(),
                b7: vec![
                    "Faktur Pajak".to_string(),
                    "010.000-23.00000001".to_string(),
                    "2023-02-01".to_string(),
                ],
                c1: "012345678901234".to_string(),
                c3: Some("2023-03-15".to_string()),
                ..ExtractedRecord::default()
            }
        );
    }

    #[test]
    fn test_missing_reference_pushes_placeholder() {
        let text = "\
PPh Tidak Final
PASAL 23
BP23-000124
B.1B.2B.3B.4B.5B.6
BP 24-5678901 2.500.000,00 500.000
ddmmyyyy
B.8
Nama Dokumen
C. IDENTITAS PEMOTONG/PEMUNGUT PPh
280445903311672";
        let record = run::<FormatB>(text);

        assert_eq!(record.b7, vec!["", "", ""]);
        assert_eq!(record.c1, "012345678901234");
        assert_eq!(record.c3, Some(String::new()));
    }

    #[test]
    fn test_certificate_number_width() {
        assert_eq!(certificate_number("BP 24-5678901 2.500.000,00 500.000"), "500.000");
        assert_eq!(certificate_number("BP 24-5678901 2.500.000 50.000"), "50.000");
        assert_eq!(certificate_number("123"), "123");
    }

    #[test]
    fn test_sequence_without_dash_reads_line_start() {
        assert_eq!(certificate_sequence("BP 24-5678901"), "24-567890");
        assert_eq!(certificate_sequence("ABCDEFGHIJ"), "ABCDEF");
    }

    #[test]
    fn test_short_npwp_line_is_truncated() {
        let text = "PPh Tidak Final\n\n\nB.1B.2B.3B.4B.5B.6\n\nddmmyyyy\nB.8\n\nC. IDENTITAS PEMOTONG\n2804";
        let record = run::<FormatB>(text);

        assert_eq!(record.c1, "4802");
    }
}
