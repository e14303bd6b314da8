//! Instruction tape files.
//!
//! A tape is a plain text program for the calculator:
//! - one binary instruction per line
//! - lines starting with `#` are comments
//! - blank lines are ignored
//!
//! Only the alphabet is policed here ('0'/'1'); instruction length is
//! the dispatcher's job, so a short line loads fine and is reported as
//! "Invalid Instruction Length" when executed.

use std::path::Path;
use thiserror::Error;

/// A loaded instruction tape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    /// The instructions, in execution order.
    pub instructions: Vec<String>,
}

impl Tape {
    /// Create an empty tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse tape source text.
    pub fn parse(source: &str) -> Result<Self, TapeError> {
        let mut tape = Self::new();

        for (lineno, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some(found) = trimmed.chars().find(|&c| c != '0' && c != '1') {
                return Err(TapeError::InvalidCharacter {
                    line: lineno + 1,
                    found,
                });
            }
            tape.instructions.push(trimmed.to_string());
        }

        Ok(tape)
    }

    /// Get the number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Load a tape from a file.
pub fn load_tape<P: AsRef<Path>>(path: P) -> Result<Tape, TapeError> {
    let source = std::fs::read_to_string(path)?;
    Tape::parse(&source)
}

/// Errors that can occur while loading a tape.
#[derive(Debug, Error)]
pub enum TapeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid character {found:?} (expected '0' or '1')")]
    InvalidCharacter { line: usize, found: char },
}
