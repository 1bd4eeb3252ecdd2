//! Module directory layout
//!
//! The scaffolder creates a fixed, nested set of directories mirroring
//! the prescribed module split: app, convention plugins, core modules,
//! UI modules, and one example feature cut into view/viewmodel/domain/
//! data. Planning is pure; creation touches the filesystem.

use droidforge_core::error::Result;
use std::path::{Path, PathBuf};

/// Core (non-UI) library modules
const CORE_MODULES: [&str; 5] = ["common", "data", "database", "datastore", "network"];

/// UI-facing library modules
const UI_MODULES: [&str; 3] = ["designsystem", "ui", "navigation"];

/// Layers of the example feature module
const FEATURE_LAYERS: [&str; 4] = ["view", "viewmodel", "domain", "data"];

/// Plan the fixed directory set, relative to the target root
///
/// `package_path` is the slash-separated package (`com/acme/myapp`);
/// every source set gets its package directory pre-created.
pub fn plan_directories(package_path: &str) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    // App module
    dirs.push(PathBuf::from(format!("app/src/main/java/{}", package_path)));
    dirs.push(PathBuf::from("app/src/main/res/values"));
    dirs.push(PathBuf::from(format!("app/src/test/java/{}", package_path)));

    // Convention plugins
    dirs.push(PathBuf::from("build-logic/convention/src/main/kotlin"));

    // Version catalog
    dirs.push(PathBuf::from("gradle"));

    for module in CORE_MODULES {
        dirs.push(PathBuf::from(format!(
            "core/{m}/src/main/java/{p}/core/{m}",
            m = module,
            p = package_path
        )));
    }

    for module in UI_MODULES {
        dirs.push(PathBuf::from(format!(
            "core/{m}/src/main/java/{p}/core/{m}",
            m = module,
            p = package_path
        )));
    }

    for layer in FEATURE_LAYERS {
        dirs.push(PathBuf::from(format!(
            "feature/home/{l}/src/main/java/{p}/feature/home/{l}",
            l = layer,
            p = package_path
        )));
    }

    dirs
}

/// Create every planned directory under `root`
///
/// Filesystem errors propagate as fatal; no rollback of directories
/// already created.
pub fn create_directories(root: &Path, plan: &[PathBuf]) -> Result<usize> {
    for dir in plan {
        std::fs::create_dir_all(root.join(dir))?;
    }
    Ok(plan.len())
}
