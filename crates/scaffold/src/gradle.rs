//! Gradle invocation for post-generation checks
//!
//! The generated skeleton carries wrapper scripts but no wrapper jar, so
//! the dry-run prefers the project wrapper and falls back to a system
//! `gradle` when the wrapper cannot run.

use droidforge_core::error::Result;
use droidforge_core::process::{command_exists, run_command_in_dir, CommandResult};
use std::path::Path;

/// The Gradle entry point to use for `project_dir`, if any
pub fn gradle_command(project_dir: &Path) -> Option<String> {
    let wrapper = if cfg!(windows) { "gradlew.bat" } else { "gradlew" };
    if project_dir.join(wrapper).is_file() {
        let prefix = if cfg!(windows) { "" } else { "./" };
        return Some(format!("{}{}", prefix, wrapper));
    }
    if command_exists("gradle") {
        return Some("gradle".to_string());
    }
    None
}

/// Run a Gradle task in the project directory
pub fn run_task(project_dir: &Path, command: &str, args: &[&str]) -> Result<CommandResult> {
    run_command_in_dir(command, args, project_dir)
}

/// List tasks in dry-run mode; the non-mutating smoke test of the
/// generated build
pub fn dry_run_tasks(project_dir: &Path, command: &str) -> Result<CommandResult> {
    run_task(project_dir, command, &["tasks", "--dry-run", "--quiet"])
}
