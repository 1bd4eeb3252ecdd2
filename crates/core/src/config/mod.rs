//! Configuration loading and schema definitions
//!
//! Shared configuration types for the scaffolder.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
