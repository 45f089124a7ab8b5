//! Infrastructure layer
//!
//! File-system plumbing for reading generator inputs and writing generated
//! fixtures. Nothing here takes part in value generation.

pub mod fixture_files;

pub use fixture_files::*;
