//! Blow-up transform: rewrite a symbol sequence by the gaps between
//! consecutive symbol ranks.
//!
//! Wherever two adjacent symbols are not tightly consecutive in rank, a hole
//! cell is inserted carrying the gap as its magnitude. Every hole radiates a
//! linearly decaying energy over nearby cells, summed across overlapping
//! holes; cells with nonzero accumulated energy render as a decimal number
//! instead of their symbol.
//!
//! Pipeline: [`gaps::annotate`] → [`energy::diffuse`] → [`render::merge`],
//! composed by [`transform`]. Data flows strictly forward and all buffers are
//! created fresh per invocation.

pub mod cells;
pub mod energy;
pub mod gaps;
pub mod render;

pub use cells::{Cell, Ranked, Token};

/// Errors from the blow-up transform.
///
/// Sink failures during output are not represented here: the transform proper
/// is a pure computation, and the write adapter in [`render`] surfaces
/// [`std::io::Error`] directly.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// A symbol's rank falls outside the supported `0..=u32::MAX` domain.
    #[error("symbol at index {index} has out-of-domain rank {rank}")]
    InvalidRank { index: usize, rank: i64 },
    /// The worst-case cell count for this input does not fit in memory.
    #[error("input of {len} symbols exceeds the addressable cell capacity")]
    Capacity { len: usize },
}

/// Run the full transform: annotate gaps, diffuse hole energy, merge into
/// output tokens. One token per cell of the annotated sequence.
pub fn transform<S: Ranked + Clone>(input: &[S]) -> Result<Vec<Token<S>>, TransformError> {
    let cells = gaps::annotate(input)?;
    let energy = energy::diffuse(&cells);
    Ok(render::merge(&cells, &energy))
}

/// Convenience for character sequences: string in, rendered text out.
pub fn blow_up(input: &str) -> Result<String, TransformError> {
    let symbols: Vec<char> = input.chars().collect();
    let tokens = transform(&symbols)?;
    Ok(render::render_string(&tokens))
}
