//! Solution storage.
//!
//! The only state that outlives a run is the height history; velocity is
//! working storage owned by the time loop.

mod height_field;

pub use height_field::HeightField;
