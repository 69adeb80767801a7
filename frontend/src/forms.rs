//! Form field models, validation and the simulated submit round-trip.

pub mod schedule;
pub mod submit;
pub mod validation;

pub use submit::{notice_timer, simulate_submit, SubmitState};
