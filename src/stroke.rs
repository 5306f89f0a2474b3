//! Stroke capture and derived arc-length data.

pub mod arclen;
pub mod capture;
