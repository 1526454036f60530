//! Tabular layouts C and D.
//!
//! Both start after the statement line, read fields at fixed line offsets
//! and decide between a B.7 and a B.8 reference depending on whether the
//! second buffered line already is the NPWP. They differ only in gap
//! sizes, in how an NPWP is recognized and in the date field they fill.

use std::marker::PhantomData;

use crate::certificate::automaton::{CLOSING_STATEMENT, Flow, LineAutomaton};
use crate::certificate::rules::dates::{ddmmyyyy_to_iso, split_doc_date};
use crate::certificate::rules::text::{position, strip_whitespace, substring};
use crate::models::record::ExtractedRecord;

/// Per-layout constants of the tabular scanner.
pub trait TabularVariant {
    /// Lines between the header line and the numbers line.
    const HEADER_GAP: u8;
    /// Lines between the reference emit and the date line.
    const TRAILING_GAP: u8;

    /// Whether a whitespace-stripped line is the taxpayer NPWP.
    fn is_npwp(candidate: &str) -> bool;

    /// Fresh record with the layout's optional fields initialized.
    fn initial_record() -> ExtractedRecord;

    /// Store the ISO date from the last line.
    fn store_date(record: &mut ExtractedRecord, iso: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Anchor,
    Header,
    HeaderGap(u8),
    Numbers,
    SkipLabel,
    FirstReference,
    NpwpOrReference,
    Npwp,
    Emit,
    TrailingGap(u8),
    Date,
}

/// Scanner shared by layouts C and D.
#[derive(Debug)]
pub struct TabularScanner<V> {
    state: State,
    references: Vec<String>,
    record: ExtractedRecord,
    variant: PhantomData<V>,
}

impl<V: TabularVariant> Default for TabularScanner<V> {
    fn default() -> Self {
        Self {
            state: State::default(),
            references: Vec::with_capacity(2),
            record: V::initial_record(),
            variant: PhantomData,
        }
    }
}

impl<V: TabularVariant> TabularScanner<V> {
    fn after_header() -> State {
        match V::HEADER_GAP {
            0 => State::Numbers,
            gap => State::HeaderGap(gap),
        }
    }

    fn after_emit() -> State {
        match V::TRAILING_GAP {
            0 => State::Date,
            gap => State::TrailingGap(gap),
        }
    }

    /// One buffered line goes to B.8; two mean the first is a B.7 number.
    fn emit_references(&mut self) {
        match self.references.as_slice() {
            [line] => {
                let (name, date) = split_doc_date(line);
                self.record.b8.extend([name, date]);
            }
            [number, line, ..] => {
                let (name, date) = split_doc_date(line);
                self.record.b7.extend([number.clone(), name, date]);
            }
            [] => {}
        }
    }
}

impl<V: TabularVariant> LineAutomaton for TabularScanner<V> {
    const ANCHOR: &'static str = CLOSING_STATEMENT;

    fn step(&mut self, line: &str) -> Flow {
        self.state = match self.state {
            State::Anchor => State::Header,
            State::Header => {
                self.record.h1 = strip_whitespace(line);
                Self::after_header()
            }
            State::HeaderGap(remaining) if remaining > 1 => State::HeaderGap(remaining - 1),
            State::HeaderGap(_) => State::Numbers,
            State::Numbers => {
                let dash = position(line, "-");
                self.record.b1 = substring(line, 0, dash + 5);
                self.record.b2 = substring(line, dash + 5, dash + 14);
                State::SkipLabel
            }
            State::SkipLabel => State::FirstReference,
            State::FirstReference => {
                self.references.push(line.to_string());
                State::NpwpOrReference
            }
            State::NpwpOrReference => {
                let candidate = strip_whitespace(line);
                if V::is_npwp(&candidate) {
                    self.record.c1 = candidate;
                    State::Emit
                } else {
                    self.references.push(line.to_string());
                    State::Npwp
                }
            }
            State::Npwp => {
                self.record.c1 = strip_whitespace(line);
                State::Emit
            }
            State::Emit => {
                self.emit_references();
                Self::after_emit()
            }
            State::TrailingGap(remaining) if remaining > 1 => State::TrailingGap(remaining - 1),
            State::TrailingGap(_) => State::Date,
            State::Date => {
                V::store_date(&mut self.record, ddmmyyyy_to_iso(&strip_whitespace(line)));
                return Flow::Halt;
            }
        };
        Flow::Continue
    }

    fn finish(self) -> ExtractedRecord {
        self.record
    }
}
