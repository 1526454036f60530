//! Fixed positional permutations that undo scrambled digit order.
//!
//! Some issuing systems emit the NPWP and date digits of a certificate in
//! a stable but shuffled order. Each table lists, for every output
//! position, which input character to take; `Dash` inserts a literal `-`.

/// One output position of a permutation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Take the input character at this index.
    At(usize),
    /// Emit a literal dash.
    Dash,
}

use Slot::{At, Dash};

/// A named descrambling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation {
    slots: &'static [Slot],
}

impl Permutation {
    pub const fn new(slots: &'static [Slot]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// Number of input characters the table reads.
    pub fn input_len(&self) -> usize {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                At(index) => Some(index + 1),
                Dash => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Reorder `scrambled`; positions past its end contribute nothing.
    pub fn apply(&self, scrambled: &str) -> String {
        let chars: Vec<char> = scrambled.chars().collect();
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                At(index) => chars.get(*index).copied(),
                Dash => Some('-'),
            })
            .collect()
    }
}

/// NPWP digit order on format B certificates.
pub const FORMAT_B_NPWP: Permutation = Permutation::new(&[
    At(7),
    At(11),
    At(14),
    At(9),
    At(3),
    At(5),
    At(12),
    At(13),
    At(1),
    At(6),
    At(2),
    At(10),
    At(0),
    At(8),
    At(4),
]);

/// Date glued to the B.7 document name on format B certificates.
pub const FORMAT_B_REFERENCE_DATE: Permutation = Permutation::new(&[
    At(1),
    At(2),
    At(7),
    At(5),
    Dash,
    At(3),
    At(4),
    Dash,
    At(0),
    At(6),
]);

/// Signing date (C.3) on format B certificates.
pub const FORMAT_B_SIGNING_DATE: Permutation = Permutation::new(&[
    At(1),
    At(7),
    At(2),
    At(4),
    Dash,
    At(0),
    At(6),
    Dash,
    At(5),
    At(3),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npwp_table_positions() {
        assert_eq!(FORMAT_B_NPWP.apply("abcdefghijklmno"), "hlojdfmnbgckaie");
    }

    #[test]
    fn test_npwp_descramble() {
        assert_eq!(FORMAT_B_NPWP.apply("280445903311672"), "012345678901234");
    }

    #[test]
    fn test_npwp_table_is_a_permutation() {
        let mut seen: Vec<usize> = FORMAT_B_NPWP
            .slots()
            .iter()
            .filter_map(|slot| match slot {
                Slot::At(index) => Some(*index),
                Slot::Dash => None,
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..15).collect::<Vec<_>>());
        assert_eq!(FORMAT_B_NPWP.input_len(), 15);
    }

    #[test]
    fn test_reference_date() {
        assert_eq!(FORMAT_B_REFERENCE_DATE.apply("02002312"), "2023-02-01");
        assert_eq!(FORMAT_B_REFERENCE_DATE.input_len(), 8);
    }

    #[test]
    fn test_signing_date() {
        assert_eq!(FORMAT_B_SIGNING_DATE.apply("02253130"), "2023-03-15");
    }

    #[test]
    fn test_short_input_drops_missing_positions() {
        assert_eq!(FORMAT_B_SIGNING_DATE.apply("0225"), "22-0-5");
        assert_eq!(FORMAT_B_NPWP.apply(""), "");
    }
}
