//! structq-core: read indexed struct records from PostgreSQL
//!
//! One query is supported: every `MyComplexStruct` with its `one` and `two`
//! relations loaded in the same round-trip.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod runner;
pub mod store;

pub use config::{DatabaseConfig, Overrides, StructqConfig};
pub use error::{Result, StructqError};
pub use models::{MyComplexStruct, MyComplexStructWithRelations, MyOtherStruct, MyStruct};
pub use render::OutputFormat;
pub use runner::{run, settle, RunReport};
pub use store::{PgStore, Store};
