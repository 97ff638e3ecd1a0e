//! Game rules: what makes five cards a set, and finding sets in a hand.
//!
//! Everything here is a pure function over card slices. Nothing fails:
//! malformed input yields `false`, `None` or an empty result.

pub mod symmetry;

pub use symmetry::{completing_card, count_sets, find_sets, is_valid_set, level_sums, SymmetryGroup};
