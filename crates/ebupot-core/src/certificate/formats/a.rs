//! Layout A: BPBS form with an H.1/H.2/H.3 header and no NITKU block.
//!
//! Reference blocks are printed as label noise interleaved with the
//! document name and a date split across lines; both are glued back
//! together and cut apart again at the trailing eight digits.

use crate::certificate::automaton::{ClosingBlock, Flow, LineAutomaton};
use crate::certificate::rules::dates::{ddmmyyyy_to_iso, split_doc_date};
use crate::certificate::rules::text::substring_from;
use crate::models::record::ExtractedRecord;

/// Label lines interleaved with the B.7 block.
const PRIMARY_NOISE: &[&str] = &["Nama Dokumen", "Tanggal", "dd", "mm", "yyyy"];

/// Label lines interleaved with the B.8 block.
const SECONDARY_NOISE: &[&str] = &["Tanggal", "dd", "mm", "yyyy"];

/// Length of the `"Tanggal "` label that can leak into a document name.
const DATE_LABEL_LEN: isize = 8;

const PRIMARY_END: &str = "B.8";
const SECONDARY_END: &str = "B.9";
const NPWP_SECTION: &str = "C.1";
const NPWP_LABEL: &str = ":NPWP";
const NPWP_END: &str = "Nama Wajib PajakC.2:";
const DATE_HEADER: &str = "mmyyyy";
const DATE_END: &str = "C.4";

/// Lines skipped between the B.8 marker and the B.8 block.
const SECONDARY_GAP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Anchor,
    FirstReference,
    PrimaryBlock,
    Gap(u8),
    SecondaryBlock,
    AwaitNpwpSection,
    AwaitNpwpLabel,
    Npwp,
    AwaitDateHeader,
    Date,
    Closing(ClosingBlock),
}

/// Scanner for layout A.
#[derive(Debug)]
pub struct FormatA {
    state: State,
    buffer: String,
    record: ExtractedRecord,
}

impl Default for FormatA {
    fn default() -> Self {
        Self {
            state: State::default(),
            buffer: String::new(),
            record: ExtractedRecord::with_c3(),
        }
    }
}

impl FormatA {
    /// Split and clear the block buffer; `None` when nothing was collected.
    fn take_reference(&mut self) -> Option<(String, String)> {
        if self.buffer.is_empty() {
            return None;
        }
        let (name, date) = split_doc_date(&self.buffer);
        self.buffer.clear();
        Some((strip_date_label(name), date))
    }
}

fn strip_date_label(name: String) -> String {
    if name.starts_with("Tanggal") {
        substring_from(&name, DATE_LABEL_LEN)
    } else {
        name
    }
}

impl LineAutomaton for FormatA {
    const ANCHOR: &'static str = "Dokumen Referensi";

    fn step(&mut self, line: &str) -> Flow {
        match self.state {
            State::Anchor => self.state = State::FirstReference,
            State::FirstReference => {
                self.record.b7.push(line.to_string());
                self.state = State::PrimaryBlock;
            }
            State::PrimaryBlock => {
                if PRIMARY_NOISE.contains(&line) {
                    return Flow::Continue;
                }
                if line == PRIMARY_END {
                    self.state = State::Gap(SECONDARY_GAP);
                    match self.take_reference() {
                        Some((name, date)) => self.record.b7.extend([name, date]),
                        // No block: drop the reference line pushed earlier.
                        None => {
                            self.record.b7.pop();
                        }
                    }
                    return Flow::Continue;
                }
                self.buffer.push_str(line);
            }
            State::Gap(remaining) => {
                self.state = if remaining > 1 {
                    State::Gap(remaining - 1)
                } else {
                    State::SecondaryBlock
                };
            }
            State::SecondaryBlock => {
                if SECONDARY_NOISE.contains(&line) {
                    return Flow::Continue;
                }
                if line == SECONDARY_END {
                    self.state = State::AwaitNpwpSection;
                    if let Some((name, date)) = self.take_reference() {
                        self.record.b8.extend([name, date]);
                    }
                    return Flow::Continue;
                }
                self.buffer.push_str(line);
            }
            State::AwaitNpwpSection => {
                if line == NPWP_SECTION {
                    self.state = State::AwaitNpwpLabel;
                }
            }
            State::AwaitNpwpLabel => {
                if line == NPWP_LABEL {
                    self.state = State::Npwp;
                }
            }
            State::Npwp => {
                if line == NPWP_END {
                    self.record.c1 = std::mem::take(&mut self.buffer);
                    self.state = State::AwaitDateHeader;
                } else {
                    self.buffer.push_str(line);
                }
            }
            State::AwaitDateHeader => {
                if line == DATE_HEADER {
                    self.state = State::Date;
                }
            }
            State::Date => {
                if line == DATE_END {
                    self.record.c3 = Some(ddmmyyyy_to_iso(&self.buffer));
                    self.buffer.clear();
                    self.state = State::Closing(ClosingBlock::default());
                } else {
                    self.buffer.push_str(line);
                }
            }
            State::Closing(mut block) => {
                let flow = block.step(line, &mut self.record);
                self.state = State::Closing(block);
                return flow;
            }
        }
        Flow::Continue
    }

    fn finish(self) -> ExtractedRecord {
        self.record
    }
}
