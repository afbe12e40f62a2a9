//! Text format for height histories.
//!
//! # File Format
//!
//! ```text
//! # tsunami height history
//! # grid_size: 5
//! # columns: step h_1 ... h_N
//! 0 1.8315638888734179e-2 3.6787944117144233e-1 1e0 3.6787944117144233e-1 1.8315638888734179e-2
//! 1 ...
//! ```
//!
//! One row per stored time step, starting at step 0. Values are written in
//! shortest round-trip exponent form, so reading a file back reproduces the
//! history bit for bit. Blank lines and `#` comments are skipped on read.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::solver::HeightField;

/// Error type for history file parsing.
#[derive(Debug, Error)]
pub enum HistoryFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// No data rows
    #[error("History file contains no data")]
    EmptyFile,

    /// Row with a different node count than the first row
    #[error("Line {line} has {actual} heights, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Step index out of sequence
    #[error("Line {line} holds step {actual}, expected step {expected}")]
    NonSequentialStep {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

/// Write a height history, one row per step.
pub fn write_history<W: Write>(writer: &mut W, heights: &HeightField) -> std::io::Result<()> {
    writeln!(writer, "# tsunami height history")?;
    writeln!(writer, "# grid_size: {}", heights.grid_size())?;
    writeln!(writer, "# columns: step h_1 ... h_N")?;

    for (n, column) in heights.columns().enumerate() {
        write!(writer, "{}", n)?;
        for h in column {
            write!(writer, " {:e}", h)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write a height history to `path`, replacing any existing file.
pub fn write_history_file(path: &Path, heights: &HeightField) -> Result<(), HistoryFileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_history(&mut writer, heights)?;
    writer.flush()?;
    Ok(())
}

/// Read a height history written by [`write_history`].
///
/// # Errors
/// - `EmptyFile` if there are no data rows
/// - `RaggedRow` if rows differ in node count
/// - `NonSequentialStep` if step indices are not 0, 1, 2, ...
pub fn read_history<R: BufRead>(reader: R) -> Result<HeightField, HistoryFileError> {
    let mut data = Vec::new();
    let mut grid_size: Option<usize> = None;
    let mut next_step = 0;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();

        let step: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| HistoryFileError::ParseError {
                line: line_num + 1,
                message: "Invalid step index".into(),
            })?;
        if step != next_step {
            return Err(HistoryFileError::NonSequentialStep {
                line: line_num + 1,
                expected: next_step,
                actual: step,
            });
        }

        let start = data.len();
        for value in parts {
            let h: f64 = value.parse().map_err(|_| HistoryFileError::ParseError {
                line: line_num + 1,
                message: format!("Invalid height value '{}'", value),
            })?;
            data.push(h);
        }

        let count = data.len() - start;
        match grid_size {
            None if count == 0 => {
                return Err(HistoryFileError::ParseError {
                    line: line_num + 1,
                    message: "Row has no height values".into(),
                });
            }
            None => grid_size = Some(count),
            Some(expected) if expected != count => {
                return Err(HistoryFileError::RaggedRow {
                    line: line_num + 1,
                    expected,
                    actual: count,
                });
            }
            Some(_) => {}
        }

        next_step += 1;
    }

    let grid_size = grid_size.ok_or(HistoryFileError::EmptyFile)?;
    HeightField::from_column_major(grid_size, data).ok_or(HistoryFileError::EmptyFile)
}

/// Read a height history from `path`.
pub fn read_history_file(path: &Path) -> Result<HeightField, HistoryFileError> {
    read_history(BufReader::new(File::open(path)?))
}
