//! `playbill-core` — shared statement primitives.
//!
//! This crate contains **pure** building blocks (no IO, no formatting).

pub mod error;
pub mod id;

pub use error::{StatementError, StatementResult};
pub use id::{PlayId, PlayType};
