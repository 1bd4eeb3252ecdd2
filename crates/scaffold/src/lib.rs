//! Android project scaffolding
//!
//! This crate implements the generation pipeline:
//! - Placeholder tokens and literal substitution
//! - The fixed module directory layout
//! - Template tree copy with per-file substitution
//! - Ancillary file emission (.gitignore, README.md)
//! - Post-generation verification (essential files, Gradle dry-run)
//!
//! # Example
//!
//! ```rust,no_run
//! use droidforge_scaffold::generator::{generate, GenerateRequest};
//! use droidforge_core::config::{TemplateConfig, VerifyConfig};
//!
//! let request = GenerateRequest {
//!     project_name: "MyApp".into(),
//!     package_name: "com.acme.myapp".into(),
//!     base_dir: "/tmp/out".into(),
//!     template_dir: "templates/android".into(),
//!     template_config: TemplateConfig::default(),
//!     verify_config: VerifyConfig::default(),
//! };
//! let report = generate(&request).expect("generation failed");
//! println!("created {}", report.target.display());
//! ```

#![warn(missing_docs)]

pub mod ancillary;
pub mod generator;
pub mod gradle;
pub mod layout;
pub mod template;
pub mod tokens;
pub mod verify;
