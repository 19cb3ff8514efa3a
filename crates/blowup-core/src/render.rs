//! Merge cells with their accumulated energy into output tokens, and render
//! tokens to text or an output sink.

use crate::cells::{Cell, Token};
use std::io;

/// Merge a cell sequence with its energy array, one token per cell.
///
/// Nonzero energy wins over whatever the cell holds. Zero energy can only
/// occur on a literal: a hole always deposits its own peak on itself, and a
/// placeholder receives at least 2 from the hole it belongs to. `merge` is
/// written total anyway, so a broken energy array would surface as a visible
/// `Energy(0)` token rather than a panic.
pub fn merge<S: Clone>(cells: &[Cell<S>], energy: &[u64]) -> Vec<Token<S>> {
    debug_assert_eq!(cells.len(), energy.len(), "cell/energy index alignment");
    cells
        .iter()
        .zip(energy)
        .map(|(cell, &e)| match (cell, e) {
            (Cell::Literal(symbol), 0) => Token::Literal(symbol.clone()),
            _ => Token::Energy(e),
        })
        .collect()
}

/// Render character tokens to a string: literals as themselves, energies in
/// decimal, no separators.
pub fn render_string(tokens: &[Token<char>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(c) => out.push(*c),
            Token::Energy(e) => out.push_str(&e.to_string()),
        }
    }
    out
}

/// Stream character tokens to an output sink.
///
/// A sink failure aborts immediately; tokens already written stay written.
/// Whether partial output is acceptable is the caller's call — the transform
/// itself is pure, so re-invoking it is always safe.
pub fn write_tokens<W: io::Write>(out: &mut W, tokens: &[Token<char>]) -> io::Result<()> {
    for token in tokens {
        match token {
            Token::Literal(c) => write!(out, "{c}")?,
            Token::Energy(e) => write!(out, "{e}")?,
        }
    }
    Ok(())
}
