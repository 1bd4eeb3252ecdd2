//! Post-generation verification
//!
//! Two tiers, matching the tool's error taxonomy: a missing essential
//! file is fatal; a failing (or unavailable) Gradle dry-run is a soft
//! warning and the run still counts as success.
//!
//! Essential-file entries may carry placeholder markers, so the check
//! covers package-path-dependent files like the app's MainActivity.

use crate::gradle;
use crate::tokens::{substitute, TokenMap};
use droidforge_core::config::VerifyConfig;
use droidforge_core::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of the verification step
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    /// Essential files that were checked and present
    pub checked: usize,
    /// Whether a Gradle dry-run was attempted
    pub gradle_checked: bool,
    /// Soft warnings; never fatal
    pub warnings: Vec<String>,
}

/// Relative essential paths missing under `root`, after token
/// substitution of each entry
pub fn missing_essential_files(
    root: &Path,
    essential: &[String],
    tokens: &TokenMap,
) -> Vec<PathBuf> {
    essential
        .iter()
        .map(|entry| PathBuf::from(substitute(entry, tokens)))
        .filter(|rel| !root.join(rel).is_file())
        .collect()
}

/// Verify a generated project
///
/// Returns `Err` only for a missing essential file. Gradle problems are
/// reported as warnings in the returned report.
pub fn verify(root: &Path, config: &VerifyConfig, tokens: &TokenMap) -> Result<VerifyReport> {
    let missing = missing_essential_files(root, &config.essential_files, tokens);
    if let Some(first) = missing.first() {
        return Err(Error::essential_file_missing(root.join(first)));
    }

    let mut report = VerifyReport {
        checked: config.essential_files.len(),
        ..Default::default()
    };

    if config.gradle_check {
        match gradle::gradle_command(root) {
            Some(command) => {
                report.gradle_checked = true;
                match gradle::dry_run_tasks(root, &command) {
                    Ok(result) if result.success => {}
                    Ok(result) => {
                        report.warnings.push(format!(
                            "Gradle dry-run exited with {}; structure created, verify manually",
                            result.exit_code
                        ));
                    }
                    Err(e) => {
                        report
                            .warnings
                            .push(format!("Gradle dry-run could not run: {}", e));
                    }
                }
            }
            None => {
                report.warnings.push(
                    "No Gradle wrapper or system gradle found; skipped dry-run".to_string(),
                );
            }
        }
    }

    Ok(report)
}
