use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Directory the asset build writes into.
pub const DEFAULT_DIST_DIR: &str = "dist";
/// Compiled widget script.
pub const DEFAULT_SCRIPT: &str = "app.js";
/// HTML shell referencing the script.
pub const DEFAULT_SHELL: &str = "index.html";
/// Single-file artifact served in the iframe.
pub const DEFAULT_ARTIFACT: &str = "iframe-app.html";
/// Where the original shell is moved.
pub const DEFAULT_BACKUP: &str = "original.html";

/// The `[input]` section of `bundle.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    /// Compiled script whose text is inlined.
    pub script: PathBuf,
    /// HTML shell with one `<script src>` element.
    pub shell: PathBuf,
}

/// The `[output]` section of `bundle.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// Merged single-file document.
    pub artifact: PathBuf,
    /// New location of the original shell.
    pub backup: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        let dist = Path::new(DEFAULT_DIST_DIR);
        Self {
            script: dist.join(DEFAULT_SCRIPT),
            shell: dist.join(DEFAULT_SHELL),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        let dist = Path::new(DEFAULT_DIST_DIR);
        Self {
            artifact: dist.join(DEFAULT_ARTIFACT),
            backup: dist.join(DEFAULT_BACKUP),
        }
    }
}

/// Paths read and written by one bundle run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Build outputs consumed.
    pub input: InputPaths,
    /// Files produced.
    pub output: OutputPaths,
}

impl BundleConfig {
    /// Conventional file names inside `dist`.
    pub fn in_dir<P: AsRef<Path>>(dist: P) -> Self {
        let dist = dist.as_ref();
        Self {
            input: InputPaths {
                script: dist.join(DEFAULT_SCRIPT),
                shell: dist.join(DEFAULT_SHELL),
            },
            output: OutputPaths {
                artifact: dist.join(DEFAULT_ARTIFACT),
                backup: dist.join(DEFAULT_BACKUP),
            },
        }
    }

    /// Parse a configuration from TOML text. Missing fields keep defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Reject configurations where two roles resolve to the same file.
    ///
    /// Paths are compared after resolving symlinks and `..`, so an alias of
    /// the shell can never be written over or moved onto.
    pub fn validate(&self) -> Result<()> {
        let roles = [
            ("input.script", &self.input.script),
            ("input.shell", &self.input.shell),
            ("output.artifact", &self.output.artifact),
            ("output.backup", &self.output.backup),
        ];

        let resolved: Vec<PathBuf> = roles
            .iter()
            .map(|(_, path)| file_identity(path))
            .collect();

        for (i, (name, path)) in roles.iter().enumerate() {
            for (j, (other, _)) in roles.iter().enumerate().skip(i + 1) {
                if resolved[i] == resolved[j] {
                    return Err(Error::InvalidConfig(format!(
                        "{name} and {other} both point to {}",
                        path.display()
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Location of the file `path` names, or would name once created.
fn file_identity(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }

    // Resolve the deepest existing ancestor and re-attach the rest.
    let lexical = lexical_path(path);
    let mut existing = lexical.as_path();
    let mut rest = Vec::new();
    loop {
        let candidate = if existing.as_os_str().is_empty() {
            Path::new(".")
        } else {
            existing
        };
        if let Ok(real) = fs::canonicalize(candidate) {
            return rest.iter().rev().fold(real, |acc, name| acc.join(name));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return lexical,
        }
    }
}

fn lexical_path(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}
