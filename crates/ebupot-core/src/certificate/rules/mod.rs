//! Shared helpers for the layout scanners: tolerant slicing, date
//! conversion, digit permutations and regex patterns.

pub mod dates;
pub mod patterns;
pub mod permutation;
pub mod text;

pub use dates::{ddmmyyyy_to_iso, month_number, split_doc_date, textual_date_to_iso};
pub use permutation::{
    FORMAT_B_NPWP, FORMAT_B_REFERENCE_DATE, FORMAT_B_SIGNING_DATE, Permutation, Slot,
};
