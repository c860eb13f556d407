//! Repository implementations for database access
//!
//! - Uses JOINs for eager loading (no N+1)
//! - Uses transactions for multi-step operations

pub mod complex_structs;

pub use complex_structs::ComplexStructRepo;
