use crate::inline::inline_script;
use crate::{BundleConfig, Error, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of a successful bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// Path of the merged document.
    pub artifact: PathBuf,
    /// Path the original shell was moved to.
    pub backup: PathBuf,
    /// Size of the merged document in bytes.
    pub size: u64,
    /// BLAKE3 hex digest of the merged document.
    pub digest: String,
}

/// Fuses a compiled script and its HTML shell into a single-file artifact.
///
/// Steps run strictly in order: read both inputs, merge, write the artifact,
/// then move the shell to the backup path. Nothing is written when an input
/// is missing, and the shell is only moved once the artifact is on disk.
#[derive(Debug, Clone, Default)]
pub struct Bundler {
    config: BundleConfig,
}

impl Bundler {
    /// Create a bundler for the given paths.
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Produce the artifact and relocate the original shell.
    pub fn run(&self) -> Result<BundleReport> {
        self.config.validate()?;
        let input = &self.config.input;
        let output = &self.config.output;

        let script = read_input(&input.script)?;
        let shell = read_input(&input.shell)?;
        if output.backup.exists() {
            return Err(Error::BackupExists(output.backup.clone()));
        }
        debug!(
            "read {} ({} bytes) and {} ({} bytes)",
            input.script.display(),
            script.len(),
            input.shell.display(),
            shell.len()
        );

        let merged = inline_script(&shell, &script)?;

        write_artifact(&output.artifact, merged.as_bytes())?;
        info!("wrote {}", output.artifact.display());

        ensure_parent(&output.backup)?;
        fs::rename(&input.shell, &output.backup)?;
        info!(
            "moved {} to {}",
            input.shell.display(),
            output.backup.display()
        );

        Ok(BundleReport {
            artifact: output.artifact.clone(),
            backup: output.backup.clone(),
            size: merged.len() as u64,
            digest: blake3::hash(merged.as_bytes()).to_hex().to_string(),
        })
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::MissingInput(path.to_path_buf()),
        _ => Error::IoError(err),
    })
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    fs::create_dir_all(parent_dir(path))?;
    Ok(())
}

fn write_artifact(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent(path)?;

    let mut temp = tempfile::Builder::new()
        .prefix(".tmp.bundle-")
        .suffix(".html")
        .tempfile_in(parent_dir(path))?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    persist_tempfile(temp, path)
}

fn persist_tempfile(temp: NamedTempFile, final_path: &Path) -> Result<()> {
    temp.persist(final_path)
        .map(|_| ())
        .map_err(|err| Error::IoError(err.error))
}
