//! Placeholder tokens and substitution
//!
//! Template files carry three literal marker strings that are replaced
//! with caller-supplied values during generation. Substitution is plain
//! string replacement, not templating: no escaping, no conditionals.

use serde::Serialize;

/// A placeholder token recognized in template files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    /// The project name, e.g. `MyApp`
    ProjectName,
    /// The package name, e.g. `com.acme.myapp`
    PackageName,
    /// The package name as a path, e.g. `com/acme/myapp`
    PackagePath,
}

impl Token {
    /// All tokens, in substitution order
    pub const ALL: [Token; 3] = [Token::ProjectName, Token::PackageName, Token::PackagePath];

    /// The literal marker string this token appears as in templates
    pub fn marker(&self) -> &'static str {
        match self {
            Token::ProjectName => "{{PROJECT_NAME}}",
            Token::PackageName => "{{PACKAGE_NAME}}",
            Token::PackagePath => "{{PACKAGE_PATH}}",
        }
    }
}

/// Resolved token values, computed once per invocation and immutable
/// afterwards
#[derive(Debug, Clone)]
pub struct TokenMap {
    project_name: String,
    package_name: String,
    package_path: String,
}

impl TokenMap {
    /// Build the map from the two caller-supplied values; the package
    /// path is derived from the package name
    pub fn new(project_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        let package_path = package_to_path(&package_name);
        Self {
            project_name: project_name.into(),
            package_name,
            package_path,
        }
    }

    /// The replacement value for a token
    pub fn value(&self, token: Token) -> &str {
        match token {
            Token::ProjectName => &self.project_name,
            Token::PackageName => &self.package_name,
            Token::PackagePath => &self.package_path,
        }
    }

    /// The project name
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The package name
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The package name with dots replaced by path separators
    pub fn package_path(&self) -> &str {
        &self.package_path
    }
}

/// Convert a dotted package name to a relative source path
pub fn package_to_path(package: &str) -> String {
    package.replace('.', "/")
}

/// Replace every occurrence of every token marker in `content`
///
/// Pure function: one pass per token, literal matching, all occurrences.
pub fn substitute(content: &str, tokens: &TokenMap) -> String {
    let mut out = content.to_string();
    for token in Token::ALL {
        out = out.replace(token.marker(), tokens.value(token));
    }
    out
}
