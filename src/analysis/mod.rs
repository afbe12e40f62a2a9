//! Diagnostics for height profiles.
//!
//! On a periodic grid the centered scheme only moves height around, so the
//! integrated height Σ h dx stays constant up to rounding. Tracking it per
//! step is the cheapest sanity check on a run.

mod diagnostics;

pub use diagnostics::{ColumnDiagnostics, total_mass};
