//! Cell and token types for the blow-up transform.

use serde::{Deserialize, Serialize};

/// A symbol with a total-order numeric rank.
///
/// Gap computation looks only at ranks; the symbol itself reappears untouched
/// in the output wherever no hole energy reaches it. The supported rank
/// domain is `0..=u32::MAX`; [`gaps::annotate`](crate::gaps::annotate) refuses
/// anything outside it.
pub trait Ranked {
    /// Ordinal rank of this symbol.
    fn rank(&self) -> i64;
}

impl Ranked for char {
    fn rank(&self) -> i64 {
        i64::from(u32::from(*self))
    }
}

impl Ranked for u8 {
    fn rank(&self) -> i64 {
        i64::from(*self)
    }
}

/// One position in the annotated cell sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<S> {
    /// A symbol carried over from the input.
    Literal(S),
    /// Inserted between two literals whose rank gap is positive; carries the
    /// gap as its magnitude (always > 0).
    Hole(u32),
    /// Second center cell, inserted only directly after an even-magnitude
    /// hole so the decay profile can center symmetrically on two positions.
    Placeholder,
}

/// One unit of rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token<S> {
    /// The original symbol, untouched by any hole.
    Literal(S),
    /// Accumulated energy at this position; always positive when emitted.
    Energy(u64),
}
