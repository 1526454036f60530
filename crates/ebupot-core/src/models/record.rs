//! Extracted certificate record and format tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EbupotError;

/// Printed layout of a withholding certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatTag {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    /// Non-empty text matching none of the known layouts.
    #[serde(rename = "U")]
    Unknown,
    /// Blank or whitespace-only text.
    #[serde(rename = "Z")]
    Empty,
}

impl FormatTag {
    /// All tags, known layouts first.
    pub const ALL: [FormatTag; 8] = [
        FormatTag::A,
        FormatTag::B,
        FormatTag::C,
        FormatTag::D,
        FormatTag::E,
        FormatTag::F,
        FormatTag::Unknown,
        FormatTag::Empty,
    ];

    /// Single-letter code of the tag.
    pub fn code(&self) -> char {
        match self {
            FormatTag::A => 'A',
            FormatTag::B => 'B',
            FormatTag::C => 'C',
            FormatTag::D => 'D',
            FormatTag::E => 'E',
            FormatTag::F => 'F',
            FormatTag::Unknown => 'U',
            FormatTag::Empty => 'Z',
        }
    }

    /// Whether the tag names one of the six extractable layouts.
    pub fn is_known(&self) -> bool {
        !matches!(self, FormatTag::Unknown | FormatTag::Empty)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for FormatTag {
    type Err = EbupotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(FormatTag::A),
            "B" => Ok(FormatTag::B),
            "C" => Ok(FormatTag::C),
            "D" => Ok(FormatTag::D),
            "E" => Ok(FormatTag::E),
            "F" => Ok(FormatTag::F),
            "U" => Ok(FormatTag::Unknown),
            "Z" => Ok(FormatTag::Empty),
            _ => Err(EbupotError::UnknownFormat(s.to_string())),
        }
    }
}

/// Fields recovered from a single certificate.
///
/// Field names follow the labels printed on the form (H.1, B.1, ... C.4).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Document identifying line.
    pub h1: String,

    /// Certificate number fragment.
    pub b1: String,

    /// Certificate date/sequence fragment.
    pub b2: String,

    /// Referenced documents (B.7), flattened.
    #[serde(default)]
    pub b7: Vec<String>,

    /// Second class of referenced documents (B.8), flattened.
    #[serde(default)]
    pub b8: Vec<String>,

    /// Taxpayer identification number (NPWP).
    pub c1: String,

    /// ISO date from the C.3 slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c3: Option<String>,

    /// ISO date from the C.4 slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c4: Option<String>,

    /// Tax base amount (DPP).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpp: Option<String>,

    /// Withheld tax amount (PPh).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pph: Option<String>,
}

/// A referenced document grouped out of the flat `b7`/`b8` sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentReference<'a> {
    /// Leading reference line or document number (b7 only).
    pub number: Option<&'a str>,
    pub name: &'a str,
    pub date: &'a str,
}

impl ExtractedRecord {
    /// Record returned for unknown or empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh record for layouts exposing a C.3 date.
    pub(crate) fn with_c3() -> Self {
        Self {
            c3: Some(String::new()),
            ..Self::default()
        }
    }

    /// Fresh record for layouts exposing a C.4 date.
    pub(crate) fn with_c4() -> Self {
        Self {
            c4: Some(String::new()),
            ..Self::default()
        }
    }

    /// Names of the required string fields left empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("h1", &self.h1),
            ("b1", &self.b1),
            ("b2", &self.b2),
            ("c1", &self.c1),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether `c1` holds exactly 15 ASCII digits.
    pub fn has_resolved_npwp(&self) -> bool {
        self.c1.len() == 15 && self.c1.bytes().all(|b| b.is_ascii_digit())
    }

    /// B.7 entries grouped as (number, name, date) triples.
    pub fn references(&self) -> impl Iterator<Item = DocumentReference<'_>> {
        self.b7.chunks_exact(3).map(|chunk| DocumentReference {
            number: Some(chunk[0].as_str()),
            name: &chunk[1],
            date: &chunk[2],
        })
    }

    /// B.8 entries grouped as (name, date) pairs.
    pub fn secondary_references(&self) -> impl Iterator<Item = DocumentReference<'_>> {
        self.b8.chunks_exact(2).map(|chunk| DocumentReference {
            number: None,
            name: &chunk[0],
            date: &chunk[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_tag_codes() {
        let codes: String = FormatTag::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, "ABCDEFUZ");
        assert_eq!(FormatTag::Unknown.to_string(), "U");
    }

    #[test]
    fn test_format_tag_parsing() {
        assert_eq!("a".parse::<FormatTag>().unwrap(), FormatTag::A);
        assert_eq!(" Z ".parse::<FormatTag>().unwrap(), FormatTag::Empty);
        assert!(matches!(
            "G".parse::<FormatTag>(),
            Err(EbupotError::UnknownFormat(_))
        ));
        assert!("".parse::<FormatTag>().is_err());
    }

    #[test]
    fn test_known_tags() {
        assert!(FormatTag::F.is_known());
        assert!(!FormatTag::Unknown.is_known());
        assert!(!FormatTag::Empty.is_known());
    }

    #[test]
    fn test_empty_record_serialization() {
        let json = serde_json::to_value(ExtractedRecord::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "h1": "", "b1": "", "b2": "", "b7": [], "b8": [], "c1": ""
            })
        );
    }

    #[test]
    fn test_tag_serializes_as_code() {
        assert_eq!(serde_json::to_string(&FormatTag::Empty).unwrap(), "\"Z\"");
        let tag: FormatTag = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(tag, FormatTag::D);
    }

    #[test]
    fn test_missing_fields() {
        let record = ExtractedRecord {
            h1: "BUPOT".to_string(),
            c1: "012345678901234".to_string(),
            ..ExtractedRecord::default()
        };
        assert_eq!(record.missing_fields(), vec!["b1", "b2"]);
        assert!(record.has_resolved_npwp());
    }

    #[test]
    fn test_npwp_with_branch_suffix_is_not_resolved() {
        let record = ExtractedRecord {
            c1: "012345678901234/000".to_string(),
            ..ExtractedRecord::default()
        };
        assert!(!record.has_resolved_npwp());
    }

    #[test]
    fn test_reference_grouping() {
        let record = ExtractedRecord {
            b7: vec![
                "FP-01".to_string(),
                "Faktur Pajak".to_string(),
                "2024-03-05".to_string(),
            ],
            b8: vec!["Kontrak".to_string(), "2024-01-02".to_string()],
            ..ExtractedRecord::default()
        };

        let refs: Vec<_> = record.references().collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].number, Some("FP-01"));
        assert_eq!(refs[0].date, "2024-03-05");

        let secondary: Vec<_> = record.secondary_references().collect();
        assert_eq!(secondary[0].name, "Kontrak");
        assert_eq!(secondary[0].number, None);
    }
}
