//! Gap annotation: interleave hole cells between spread-out symbol pairs.

use crate::TransformError;
use crate::cells::{Cell, Ranked};

/// Worst-case cell count for an input of `n` symbols, or `None` on overflow.
///
/// Each of the n−1 adjacent pairs contributes its trailing literal plus at
/// most a hole and a placeholder, on top of the leading literal: 3n−2 total.
pub fn cell_capacity(n: usize) -> Option<usize> {
    if n < 2 {
        return Some(n);
    }
    n.checked_mul(3).map(|c| c - 2)
}

/// Scan adjacent symbol pairs and build the cell sequence.
///
/// For each pair, gap = rank(next) − rank(prev) − 1. A positive gap inserts a
/// `Hole(gap)` between the two literals, followed by a `Placeholder` when the
/// gap is even. Zero and negative gaps insert nothing: only ascending,
/// spread-out pairs create holes. That asymmetry is the contract, not an
/// accident.
pub fn annotate<S: Ranked + Clone>(input: &[S]) -> Result<Vec<Cell<S>>, TransformError> {
    for (index, symbol) in input.iter().enumerate() {
        let rank = symbol.rank();
        if rank < 0 || rank > i64::from(u32::MAX) {
            return Err(TransformError::InvalidRank { index, rank });
        }
    }

    let capacity =
        cell_capacity(input.len()).ok_or(TransformError::Capacity { len: input.len() })?;
    let mut cells = Vec::with_capacity(capacity);

    let Some(first) = input.first() else {
        return Ok(cells);
    };
    cells.push(Cell::Literal(first.clone()));

    for pair in input.windows(2) {
        let gap = pair[1].rank() - pair[0].rank() - 1;
        if gap > 0 {
            // Ranks are validated to fit u32, so the gap does too.
            cells.push(Cell::Hole(gap as u32));
            if gap % 2 == 0 {
                cells.push(Cell::Placeholder);
            }
        }
        cells.push(Cell::Literal(pair[1].clone()));
    }

    Ok(cells)
}
