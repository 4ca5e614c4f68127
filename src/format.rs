use std::fmt;
use std::io::{BufRead, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::warn;

use crate::error::ConvertError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Nested H1/H2 JSON
    Hierarchical,
    /// Flat notebook (.ipynb), one markdown cell per heading
    Flat,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Hierarchical => f.write_str("hierarchical"),
            OutputMode::Flat => f.write_str("flat"),
        }
    }
}

impl OutputMode {
    /// `.json` → hierarchical, `.ipynb` → flat, anything else is unknown.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(OutputMode::Hierarchical),
            "ipynb" => Some(OutputMode::Flat),
            _ => None,
        }
    }
}

/// Settle the output mode: explicit flag, then the output extension, then ask.
pub fn resolve_mode<R: BufRead, W: Write>(
    flag: Option<OutputMode>,
    output: &Path,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<OutputMode, ConvertError> {
    let inferred = OutputMode::from_extension(output);
    match (flag, inferred) {
        (Some(mode), Some(ext)) if mode != ext => {
            warn!(
                "--format {mode} overrides the {ext} format implied by '{}'",
                output.display()
            );
            Ok(mode)
        }
        (Some(mode), _) | (None, Some(mode)) => Ok(mode),
        (None, None) => prompt_mode(input, prompt_out),
    }
}

/// Ask until a valid choice arrives. Bad answers re-prompt; end of input aborts.
pub fn prompt_mode<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<OutputMode, ConvertError> {
    let io_fail = ConvertError::Prompt;
    writeln!(out, "\nSelect output format:").map_err(io_fail)?;
    writeln!(out, "  1. Hierarchical JSON  (.json)  - nested H1/H2 structure").map_err(io_fail)?;
    writeln!(out, "  2. Flat notebook      (.ipynb) - one markdown cell per heading")
        .map_err(io_fail)?;

    let mut line = String::new();
    loop {
        write!(out, "\nEnter 1 or 2: ").map_err(io_fail)?;
        out.flush().map_err(io_fail)?;

        line.clear();
        if input.read_line(&mut line).map_err(io_fail)? == 0 {
            return Err(ConvertError::SelectionAborted);
        }
        match line.trim() {
            "1" => return Ok(OutputMode::Hierarchical),
            "2" => return Ok(OutputMode::Flat),
            other => {
                writeln!(out, "Invalid choice {other:?}. Please enter 1 or 2.").map_err(io_fail)?;
            }
        }
    }
}
