//! Core utilities for the droidforge scaffolder
//!
//! This crate provides shared functionality used by the scaffolding crates:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with per-field defaults
//! - **Process execution**: captured-output command execution for Gradle
//! - **Validation**: project and package name checks
//!
//! # Example
//!
//! ```rust
//! use droidforge_core::validation::validate_package_name;
//!
//! let result = validate_package_name("com.acme.myapp");
//! assert!(result.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod process;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
