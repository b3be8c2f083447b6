//! Shared numeric utilities

pub mod numeric;

pub use numeric::{saturate, top_bit};
