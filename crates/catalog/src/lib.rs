//! Catalog and invoice data model.
//!
//! Plain reference data handed to the statement calculator. How it was loaded
//! (JSON file, literal construction in tests) is of no concern to the core.

pub mod invoice;
pub mod play;

pub use invoice::{Invoice, Performance};
pub use play::{Play, PlayCatalog};
