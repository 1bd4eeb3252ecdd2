//! Ancillary file emission
//!
//! Writes the two generated-from-scratch files: the ignore rules and a
//! project README with interpolated name, package, and generation date.
//! Pure text generation, no template tree involved.

use crate::tokens::TokenMap;
use droidforge_core::error::Result;
use std::path::Path;

const GITIGNORE: &str = "\
*.iml
.gradle
/local.properties
/.idea
.DS_Store
/build
/captures
.externalNativeBuild
.cxx
local.properties
";

/// Write the `.gitignore` at the target root
pub fn emit_gitignore(root: &Path) -> Result<()> {
    std::fs::write(root.join(".gitignore"), GITIGNORE)?;
    Ok(())
}

/// Write the generated `README.md` at the target root
pub fn emit_readme(root: &Path, tokens: &TokenMap) -> Result<()> {
    let content = readme_content(tokens, &chrono::Local::now().format("%Y-%m-%d").to_string());
    std::fs::write(root.join("README.md"), content)?;
    Ok(())
}

fn readme_content(tokens: &TokenMap, date: &str) -> String {
    format!(
        "\
# {project}

Android application scaffolded on {date}.

- **Package**: `{package}`
- **Modules**: `app`, `build-logic`, `core/*`, `feature/home/*`

## Building

```sh
./gradlew assembleDebug
```

## Module layout

- `app`: application entry point and navigation host
- `build-logic`: convention plugins shared by all modules
- `core`: data, database, datastore, network, common, designsystem, ui, navigation
- `feature/home`: example feature split into view, viewmodel, domain, data
",
        project = tokens.project_name(),
        package = tokens.package_name(),
        date = date,
    )
}

/// Write both ancillary files
pub fn emit_all(root: &Path, tokens: &TokenMap) -> Result<usize> {
    emit_gitignore(root)?;
    emit_readme(root, tokens)?;
    Ok(2)
}
