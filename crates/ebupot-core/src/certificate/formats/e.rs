//! Layout E: BPBS form with an H.1/H.2/H.3 header and a NITKU block.
//!
//! Reads the B.7 reference like layout A but with the date glued to the
//! end of a single line, and stores the certificate date as C.4.

use crate::certificate::automaton::{ClosingBlock, Flow, LineAutomaton};
use crate::certificate::rules::dates::{DATE_TOKEN_LEN, ddmmyyyy_to_iso};
use crate::certificate::rules::text::{last_chars, strip_whitespace, without_last_chars};
use crate::models::record::ExtractedRecord;

const REFERENCE_HEADER: &str = "ddmmyyyy";
const SECONDARY_START: &str = "Tanggal";
const SECONDARY_END: &str = "B.9";
const NPWP_SECTION: &str = "C.1";
const NPWP_LABEL: &str = "NPWP";
const DATE_HEADER: &str = "mmyyyy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Anchor,
    FirstReference,
    AwaitReferenceHeader,
    Reference,
    AwaitSecondary,
    SecondaryBlock,
    AwaitNpwpSection,
    AwaitNpwpLabel,
    Npwp,
    AwaitDateHeader,
    Date,
    Closing(ClosingBlock),
}

/// Scanner for layout E.
#[derive(Debug)]
pub struct FormatE {
    state: State,
    buffer: String,
    record: ExtractedRecord,
}

impl Default for FormatE {
    fn default() -> Self {
        Self {
            state: State::default(),
            buffer: String::new(),
            record: ExtractedRecord::with_c4(),
        }
    }
}

/// Name and ISO date of a line ending in a `ddmmyyyy` token.
fn name_and_date(line: &str) -> [String; 2] {
    [
        without_last_chars(line, DATE_TOKEN_LEN),
        ddmmyyyy_to_iso(&last_chars(line, DATE_TOKEN_LEN)),
    ]
}

impl LineAutomaton for FormatE {
    const ANCHOR: &'static str = "Dokumen Referensi";

    fn step(&mut self, line: &str) -> Flow {
        self.state = match self.state {
            State::Anchor => State::FirstReference,
            State::FirstReference => {
                self.record.b7.push(line.to_string());
                State::AwaitReferenceHeader
            }
            State::AwaitReferenceHeader if line == REFERENCE_HEADER => State::Reference,
            State::Reference => {
                if line.is_empty() {
                    self.record.b7.pop();
                } else {
                    self.record.b7.extend(name_and_date(line));
                }
                State::AwaitSecondary
            }
            State::AwaitSecondary if line == SECONDARY_START => State::SecondaryBlock,
            State::SecondaryBlock if line == SECONDARY_END => {
                if !self.buffer.is_empty() {
                    self.record.b8.extend(name_and_date(&self.buffer));
                    self.buffer.clear();
                }
                State::AwaitNpwpSection
            }
            State::SecondaryBlock => {
                self.buffer.push_str(line);
                State::SecondaryBlock
            }
            State::AwaitNpwpSection if line == NPWP_SECTION => State::AwaitNpwpLabel,
            State::AwaitNpwpLabel if line == NPWP_LABEL => State::Npwp,
            State::Npwp => {
                self.record.c1 = strip_whitespace(line);
                State::AwaitDateHeader
            }
            State::AwaitDateHeader if line == DATE_HEADER => State::Date,
            State::Date => {
                self.record.c4 = Some(ddmmyyyy_to_iso(line));
                State::Closing(ClosingBlock::default())
            }
            State::Closing(mut block) => {
                let flow = block.step(line, &mut self.record);
                self.state = State::Closing(block);
                return flow;
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
H.1
H.2
H.3
A.3  NITKU
B.7 Dokumen Referensi
FP-0003
Nama Dokumen
ddmmyyyy
Faktur Pajak05032024
B.8
Tanggal
Kontrak 01022024
B.9
C.1
NPWP
0123 4567 8901 234
mmyyyy
10032024
Pernyataan Bukti Pemotongan ini.
BP26-0003
X
0003-2024
10/03/2024
ignored";

    #[test]
    fn test_full_certificate() {
        let record = run::<FormatE>(SAMPLE);

        assert_eq!(
            record,
            ExtractedRecord {
                h1: "BP26-0003".to_string(),
                b1: "0003-2024".to_string(),
                b2: "10/03/2024".to_string(),
                b7: vec![
                    "FP-0003".to_string(),
                    "Faktur Pajak".to_string(),
                    "2024-03-05".to_string(),
                ],
                b8: vec!["Kontrak ".to_string(), "2024-02-01".to_string()],
                c1: "012345678901234".to_string(),
                c4: Some("2024-03-10".to_string()),
                ..ExtractedRecord::default()
            }
        );
    }

    #[test]
    fn test_empty_reference_line_drops_reference() {
        let text = "Dokumen Referensi\n-\nddmmyyyy\n\nTanggal\nB.9\nC.1\nNPWP\n0123";
        let record = run::<FormatE>(text);

        assert!(record.b7.is_empty());
        assert!(record.b8.is_empty());
        assert_eq!(record.c1, "0123");
        assert_eq!(record.c3, None);
        assert_eq!(record.c4, Some(String::new()));
    }

    #[test]
    fn test_short_reference_line() {
        let text = "Dokumen Referensi\nREF\nddmmyyyy\n0503";
        let record = run::<FormatE>(text);

        assert_eq!(record.b7, vec!["REF", "", "-03-05"]);
    }
}
