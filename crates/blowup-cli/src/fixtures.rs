//! Bundled acceptance fixtures for the demo subcommand.
//!
//! Cases are plain tab-separated `input<TAB>expected` lines, so no quoting or
//! escape decoding is involved. `#` comments and blank lines are skipped.

use anyhow::{Context, Result};

/// One acceptance case: input word and its expected rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub input: String,
    pub expected: String,
}

/// The fixture set compiled into the binary.
pub const BUNDLED: &str = include_str!("../fixtures/cases.txt");

/// Parse tab-separated fixture lines.
pub fn parse(data: &str) -> Result<Vec<Fixture>> {
    let mut fixtures = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (input, expected) = line
            .split_once('\t')
            .with_context(|| format!("fixture line {}: missing tab separator", lineno + 1))?;
        fixtures.push(Fixture {
            input: input.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(fixtures)
}
