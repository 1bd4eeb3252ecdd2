//! Configuration schema definitions
//!
//! TOML schema for `.droidforge.toml`. Every field has a default so a
//! missing config file behaves exactly like an empty one.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub verify: VerifyConfig,
}

/// General generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Base directory new projects are created under
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

fn default_base_dir() -> String {
    ".".to_string()
}

/// Template tree settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory holding the template tree
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// File extensions that receive token substitution; everything else
    /// is copied byte-for-byte
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            text_extensions: default_text_extensions(),
        }
    }
}

fn default_template_dir() -> String {
    "templates/android".to_string()
}

fn default_text_extensions() -> Vec<String> {
    vec![
        "kt", "kts", "toml", "xml", "md", "gradle", "properties", "pro", "txt", "gitignore",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Post-generation verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Relative paths that must exist after generation; a missing entry
    /// is fatal. Entries may carry placeholder markers, resolved with
    /// the same token values as the template copy.
    #[serde(default = "default_essential_files")]
    pub essential_files: Vec<String>,

    /// Run a Gradle dry-run after generation (non-zero exit is a soft
    /// warning, never fatal)
    #[serde(default = "default_true")]
    pub gradle_check: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            essential_files: default_essential_files(),
            gradle_check: true,
        }
    }
}

fn default_essential_files() -> Vec<String> {
    vec![
        "settings.gradle.kts",
        "build.gradle.kts",
        "gradle/libs.versions.toml",
        "app/build.gradle.kts",
        "app/src/main/java/{{PACKAGE_PATH}}/MainActivity.kt",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.general.base_dir, ".");
        assert!(schema.verify.gradle_check);
        assert!(schema
            .template
            .text_extensions
            .iter()
            .any(|e| e == "kts"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [template]
            template_dir = "custom/templates"
            "#,
        )
        .unwrap();
        assert_eq!(schema.template.template_dir, "custom/templates");
        // Untouched sections keep defaults
        assert!(schema.verify.essential_files.contains(&"settings.gradle.kts".to_string()));
    }

    #[test]
    fn test_essential_files_default() {
        let schema = ConfigSchema::default();
        assert!(schema
            .verify
            .essential_files
            .contains(&"gradle/libs.versions.toml".to_string()));
        assert!(schema
            .verify
            .essential_files
            .contains(&"app/src/main/java/{{PACKAGE_PATH}}/MainActivity.kt".to_string()));
    }
}
