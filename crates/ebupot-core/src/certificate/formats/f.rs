//! Layout F: unified standard-format certificate (BPU).
//!
//! Fields are printed as `label:value` lines and dates are written out
//! with Indonesian month names. The B.9 document number shows up after
//! the document type and date, so its B.7 slot is reserved first and
//! filled in later.

use crate::certificate::automaton::{Flow, LineAutomaton};
use crate::certificate::rules::dates::textual_date_to_iso;
use crate::certificate::rules::patterns::DIGITS_AND_DASHES;
use crate::certificate::rules::text::{position, substring, substring_from};
use crate::models::record::ExtractedRecord;

const PERIOD_HEADER: &str = "B.4B.5B.6B.7";
const DOCUMENT_TYPE: &str = "Jenis Dokumen:";
const DOCUMENT_DATE: &str = "Tanggal";
const DOCUMENT_NUMBER: &str = "B.9 Nomor Dokumen";
const NPWP_LABEL: &str = "C.1NPWP / NIK";
const SIGNING_DATE: &str = "C.4TANGGAL";

// Value offsets within the labelled lines.
const DOCUMENT_TYPE_VALUE: isize = 14;
const DOCUMENT_DATE_VALUE: isize = 10;
const DOCUMENT_NUMBER_VALUE: isize = 18;
const NPWP_VALUE: isize = 14;
const SIGNING_DATE_VALUE: isize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Anchor,
    Skip,
    Numbers,
    AwaitPeriod,
    Period,
    AwaitDocument,
    AwaitDocumentNumber,
    AwaitNpwp,
    AwaitSigningDate,
}

/// Scanner for layout F.
#[derive(Debug)]
pub struct FormatF {
    state: State,
    record: ExtractedRecord,
}

impl Default for FormatF {
    fn default() -> Self {
        Self {
            state: State::default(),
            record: ExtractedRecord {
                c4: Some(String::new()),
                dpp: Some(String::new()),
                pph: Some(String::new()),
                ..ExtractedRecord::default()
            },
        }
    }
}

/// Reserve the document number slot, then add type and date.
fn read_document(record: &mut ExtractedRecord, line: &str) {
    let date_label = position(line, DOCUMENT_DATE);
    record.b7.extend([
        String::new(),
        substring(line, DOCUMENT_TYPE_VALUE, date_label),
        textual_date_to_iso(&substring_from(line, date_label + DOCUMENT_DATE_VALUE)),
    ]);
}

impl LineAutomaton for FormatF {
    const ANCHOR: &'static str = "PEMUNGUTAN PPh\nPEMUNGUTAN\n";

    fn step(&mut self, line: &str) -> Flow {
        let record = &mut self.record;
        self.state = match self.state {
            State::Anchor => State::Skip,
            State::Skip => State::Numbers,
            State::Numbers => {
                let dash = position(line, "-");
                record.h1 = substring(line, 0, dash - 2);
                record.b1 = substring(line, dash - 2, dash + 5);
                State::AwaitPeriod
            }
            State::AwaitPeriod if line == PERIOD_HEADER => State::Period,
            State::Period => {
                record.b2 = DIGITS_AND_DASHES
                    .find(line)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                State::AwaitDocument
            }
            State::AwaitDocument if line.starts_with(DOCUMENT_TYPE) => {
                read_document(record, line);
                State::AwaitDocumentNumber
            }
            State::AwaitDocumentNumber if line.starts_with(DOCUMENT_NUMBER) => {
                if let Some(number) = record.b7.first_mut() {
                    *number = substring_from(line, DOCUMENT_NUMBER_VALUE);
                }
                State::AwaitNpwp
            }
            State::AwaitNpwp if line.starts_with(NPWP_LABEL) => {
                record.c1 = substring_from(line, NPWP_VALUE);
                State::AwaitSigningDate
            }
            State::AwaitSigningDate if line.starts_with(SIGNING_DATE) => {
                record.c4 = Some(textual_date_to_iso(&substring_from(
                    line,
                    SIGNING_DATE_VALUE,
                )));
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
