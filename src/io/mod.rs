//! I/O utilities for height histories.
//!
//! Histories are stored as whitespace-separated text, one row per time step:
//!
//! ```text
//! # tsunami height history
//! # grid_size: 4
//! # columns: step h_1 ... h_N
//! 0 1e0 3.6787944117144233e-1 1.8315638888734179e-2 3.6787944117144233e-1
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tsunami_rs::io::{read_history_file, write_history_file};
//!
//! write_history_file(Path::new("tsunami_out.txt"), &heights)?;
//! let back = read_history_file(Path::new("tsunami_out.txt"))?;
//! ```

mod history;

pub use history::{
    HistoryFileError, read_history, read_history_file, write_history, write_history_file,
};
