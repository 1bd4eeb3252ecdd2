//! The generation pipeline
//!
//! A strictly linear sequence: validate inputs, resolve and reserve the
//! target, plan the directory set, copy and substitute the template
//! tree, emit ancillary files, verify the result. No retries, no
//! branching back, no rollback on failure.
//!
//! The pre-existence check on the target directory is the one safety
//! invariant: an existing target aborts before any filesystem mutation.

use crate::{ancillary, layout, template, verify};
use crate::tokens::TokenMap;
use droidforge_core::config::{TemplateConfig, VerifyConfig};
use droidforge_core::error::{Error, ErrorCode, Result, ResultExt};
use droidforge_core::validation::{validate_package_name, validate_project_name};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Everything the generator needs, resolved up front
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Project name; becomes the target directory and Gradle root name
    pub project_name: String,
    /// Android package name, e.g. `com.acme.myapp`
    pub package_name: String,
    /// Base directory the project is created under
    pub base_dir: PathBuf,
    /// Template tree to copy from
    pub template_dir: PathBuf,
    /// Template settings (text extension allow-list)
    pub template_config: TemplateConfig,
    /// Verification settings
    pub verify_config: VerifyConfig,
}

/// What a completed run produced
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    /// The created project root
    pub target: PathBuf,
    /// Directories created from the layout plan
    pub directories_created: usize,
    /// Files copied from the template tree
    pub files_copied: usize,
    /// Files that went through token substitution
    pub files_substituted: usize,
    /// Soft warnings collected along the way
    pub warnings: Vec<String>,
    /// Wall-clock duration in milliseconds
    pub elapsed_ms: u128,
}

/// Run the full pipeline
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport> {
    let started = Instant::now();

    // validate_args
    validate_project_name(&request.project_name)
        .to_result()
        .map_err(|e| {
            Error::new(ErrorCode::InvalidProjectName, e.message)
                .with_suggestion("Use alphanumeric characters, '-' or '_'")
        })?;
    if !validate_package_name(&request.package_name).is_valid() {
        return Err(Error::invalid_package_name(&request.package_name));
    }

    let tokens = TokenMap::new(&request.project_name, &request.package_name);

    if !request.template_dir.is_dir() {
        return Err(Error::template_not_found(&request.template_dir));
    }

    let target = request.base_dir.join(&request.project_name);
    if target.exists() {
        return Err(Error::target_exists(&target));
    }

    // Plan everything before writing anything
    let dir_plan = layout::plan_directories(tokens.package_path());
    let copy_plan = template::plan_copy(
        &request.template_dir,
        &target,
        &tokens,
        &request.template_config.text_extensions,
    )?;

    // create_dirs
    std::fs::create_dir_all(&target)
        .map_err(Error::from)
        .context(format!("Creating target directory {}", target.display()))?;
    let directories_created = layout::create_directories(&target, &dir_plan)?;

    // copy_and_substitute
    let stats = template::execute_copy(&copy_plan, &tokens)?;

    // emit_ancillary_files
    ancillary::emit_all(&target, &tokens)?;

    // validate_output
    let verify_report = verify::verify(&target, &request.verify_config, &tokens)?;

    Ok(GenerateReport {
        target,
        directories_created,
        files_copied: stats.files_copied,
        files_substituted: stats.files_substituted,
        warnings: verify_report.warnings,
        elapsed_ms: started.elapsed().as_millis(),
    })
}
