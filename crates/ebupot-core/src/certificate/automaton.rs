//! Forward-only line scanning shared by all certificate layouts.
//!
//! Every layout is a small state machine fed one line at a time, starting
//! at the line that contains its anchor. States only move forward and
//! each line is seen exactly once.

use tracing::{debug, trace};

use crate::models::record::ExtractedRecord;

use super::rules::text::char_count;

/// Result of feeding one line to a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep feeding lines.
    Continue,
    /// Terminal state reached; remaining lines are ignored.
    Halt,
}

/// A layout-specific line scanner.
pub trait LineAutomaton: Default {
    /// Substring marking where scanning starts; earlier text is dropped.
    const ANCHOR: &'static str;

    /// Consume one line.
    fn step(&mut self, line: &str) -> Flow;

    /// Hand over whatever was collected.
    fn finish(self) -> ExtractedRecord;
}

/// Run scanner `A` over `text`.
///
/// Without the anchor the whole text is scanned. Running out of lines
/// before the terminal state leaves the record partially filled.
pub fn run<A: LineAutomaton>(text: &str) -> ExtractedRecord {
    let region = match text.find(A::ANCHOR) {
        Some(offset) => &text[offset..],
        None => {
            debug!(anchor = A::ANCHOR, "Anchor not found, scanning whole text");
            text
        }
    };

    let mut automaton = A::default();
    let mut halted = false;
    for (index, line) in region.split('\n').enumerate() {
        if automaton.step(line) == Flow::Halt {
            trace!(line = index, "Reached terminal state");
            halted = true;
            break;
        }
    }

    if !halted {
        debug!(anchor = A::ANCHOR, "Lines exhausted before terminal state");
    }

    automaton.finish()
}

/// Closing block shared by layouts A and E.
///
/// Waits for the statement line ending in "Bukti Pemotongan ini.", takes
/// the next line as H.1, the first following line longer than four
/// characters as B.1 and the line after that as B.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ClosingBlock {
    #[default]
    AwaitStatement,
    Header,
    Number,
    Sequence,
}

pub(crate) const CLOSING_STATEMENT: &str = "Bukti Pemotongan ini.";

const MIN_NUMBER_LEN: usize = 4;

impl ClosingBlock {
    pub(crate) fn step(&mut self, line: &str, record: &mut ExtractedRecord) -> Flow {
        match self {
            ClosingBlock::AwaitStatement => {
                if line.contains(CLOSING_STATEMENT) {
                    *self = ClosingBlock::Header;
                }
            }
            ClosingBlock::Header => {
                record.h1 = line.to_string();
                *self = ClosingBlock::Number;
            }
            ClosingBlock::Number => {
                if char_count(line) > MIN_NUMBER_LEN {
                    record.b1 = line.to_string();
                    *self = ClosingBlock::Sequence;
                }
            }
            ClosingBlock::Sequence => {
                record.b2 = line.to_string();
                return Flow::Halt;
            }
        }
        Flow::Continue
    }
}
