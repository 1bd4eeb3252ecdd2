//! Template tree copy and substitution
//!
//! The template tree is read-only; every file is copied to the matching
//! relative path under the target root. Files whose extension is on the
//! text allow-list get token substitution applied to their content; all
//! other files are copied byte-for-byte. Relative destination paths are
//! substituted too, so a `{{PACKAGE_PATH}}` directory segment in the
//! template lands under the real package path.
//!
//! There is no cross-file atomicity: a failure mid-copy leaves a
//! partially populated target.

use crate::tokens::{substitute, TokenMap};
use droidforge_core::error::{Error, Result, ResultExt};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How a template file is transferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CopyMode {
    /// Read as UTF-8, substitute tokens, write result
    Substitute,
    /// Byte-for-byte copy
    Raw,
}

/// One planned file transfer, with explicit source and destination
#[derive(Debug, Clone, Serialize)]
pub struct CopyAction {
    /// Absolute path of the template file
    pub source: PathBuf,
    /// Absolute path the file is written to
    pub dest: PathBuf,
    /// Transfer mode
    pub mode: CopyMode,
}

/// Counts from an executed copy plan
#[derive(Debug, Clone, Default, Serialize)]
pub struct CopyStats {
    /// Files written in total
    pub files_copied: usize,
    /// Files that went through token substitution
    pub files_substituted: usize,
}

/// Whether a file receives substitution, by extension allow-list
///
/// Dotfiles like `.gitignore` have no `Path::extension`; their name
/// minus the leading dot is checked against the list instead.
pub fn is_text_file(path: &Path, text_extensions: &[String]) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        return text_extensions.iter().any(|e| e == ext);
    }
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if let Some(stripped) = name.strip_prefix('.') {
            return text_extensions.iter().any(|e| e == stripped);
        }
    }
    false
}

/// Walk the template tree and plan every file transfer
///
/// Pure with respect to the target: nothing is written. Fails if the
/// template root does not exist.
pub fn plan_copy(
    template_root: &Path,
    target_root: &Path,
    tokens: &TokenMap,
    text_extensions: &[String],
) -> Result<Vec<CopyAction>> {
    if !template_root.is_dir() {
        return Err(Error::template_not_found(template_root));
    }

    let mut actions = Vec::new();

    for entry in WalkDir::new(template_root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::template(format!("Failed to walk template tree: {}", e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path().to_path_buf();
        let relative = source
            .strip_prefix(template_root)
            .map_err(|_| Error::template(format!("Path escapes template root: {}", source.display())))?;

        // Tokens may appear in directory and file names as well
        let relative_str = substitute(&relative.to_string_lossy(), tokens);
        let dest = target_root.join(relative_str);

        let mode = if is_text_file(&source, text_extensions) {
            CopyMode::Substitute
        } else {
            CopyMode::Raw
        };

        actions.push(CopyAction { source, dest, mode });
    }

    Ok(actions)
}

/// Execute a copy plan
pub fn execute_copy(actions: &[CopyAction], tokens: &TokenMap) -> Result<CopyStats> {
    let mut stats = CopyStats::default();

    for action in actions {
        if let Some(parent) = action.dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match action.mode {
            CopyMode::Substitute => {
                let content = std::fs::read_to_string(&action.source)
                    .map_err(Error::from)
                    .context(format!("Reading template file {}", action.source.display()))?;
                std::fs::write(&action.dest, substitute(&content, tokens))
                    .map_err(Error::from)
                    .context(format!("Writing {}", action.dest.display()))?;
                stats.files_substituted += 1;
            }
            CopyMode::Raw => {
                std::fs::copy(&action.source, &action.dest)
                    .map_err(Error::from)
                    .context(format!("Copying {}", action.source.display()))?;
            }
        }
        stats.files_copied += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn text_exts() -> Vec<String> {
        droidforge_core::config::TemplateConfig::default().text_extensions
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_is_text_file() {
        let exts = text_exts();
        assert!(is_text_file(Path::new("build.gradle.kts"), &exts));
        assert!(is_text_file(Path::new("Main.kt"), &exts));
        assert!(is_text_file(Path::new(".gitignore"), &exts));
        assert!(!is_text_file(Path::new("icon.png"), &exts));
        assert!(!is_text_file(Path::new("gradlew"), &exts));
    }

    #[test]
    fn test_plan_copy_missing_template_root() {
        let tokens = TokenMap::new("MyApp", "com.acme.myapp");
        let err = plan_copy(
            Path::new("/nonexistent/templates"),
            Path::new("/tmp/out"),
            &tokens,
            &text_exts(),
        )
        .unwrap_err();
        assert_eq!(err.code, droidforge_core::ErrorCode::TemplateNotFound);
    }

    #[test]
    fn test_plan_copy_is_path_isomorphic() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        write(&template.path().join("settings.gradle.kts"), "x");
        write(&template.path().join("app/build.gradle.kts"), "y");

        let tokens = TokenMap::new("MyApp", "com.acme.myapp");
        let actions =
            plan_copy(template.path(), target.path(), &tokens, &text_exts()).unwrap();

        let dests: Vec<_> = actions
            .iter()
            .map(|a| a.dest.strip_prefix(target.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(actions.len(), 2);
        assert!(dests.contains(&PathBuf::from("settings.gradle.kts")));
        assert!(dests.contains(&PathBuf::from("app/build.gradle.kts")));
    }

    #[test]
    fn test_plan_copy_substitutes_path_tokens() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        write(
            &template
                .path()
                .join("app/src/main/java/{{PACKAGE_PATH}}/MainActivity.kt"),
            "package {{PACKAGE_NAME}}\n",
        );

        let tokens = TokenMap::new("MyApp", "com.acme.myapp");
        let actions =
            plan_copy(template.path(), target.path(), &tokens, &text_exts()).unwrap();

        assert_eq!(
            actions[0].dest,
            target
                .path()
                .join("app/src/main/java/com/acme/myapp/MainActivity.kt")
        );
    }

    #[test]
    fn test_execute_copy_substitutes_text() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        write(
            &template.path().join("settings.gradle.kts"),
            "rootProject.name = \"{{PROJECT_NAME}}\"\n",
        );

        let tokens = TokenMap::new("MyApp", "com.acme.myapp");
        let actions =
            plan_copy(template.path(), target.path(), &tokens, &text_exts()).unwrap();
        let stats = execute_copy(&actions, &tokens).unwrap();

        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.files_substituted, 1);
        let out = fs::read_to_string(target.path().join("settings.gradle.kts")).unwrap();
        assert_eq!(out, "rootProject.name = \"MyApp\"\n");
    }

    #[test]
    fn test_execute_copy_binary_byte_identical() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let bytes: Vec<u8> = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff, 0x7b, 0x7b];
        fs::create_dir_all(template.path().join("app")).unwrap();
        fs::write(template.path().join("app/icon.png"), &bytes).unwrap();

        let tokens = TokenMap::new("MyApp", "com.acme.myapp");
        let actions =
            plan_copy(template.path(), target.path(), &tokens, &text_exts()).unwrap();
        assert_eq!(actions[0].mode, CopyMode::Raw);

        let stats = execute_copy(&actions, &tokens).unwrap();
        assert_eq!(stats.files_substituted, 0);
        assert_eq!(fs::read(target.path().join("app/icon.png")).unwrap(), bytes);
    }
}
