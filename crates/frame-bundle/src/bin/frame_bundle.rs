//! frame-bundle: produce a single-file HTML artifact for iframe embedding.
//!
//! Reads the compiled widget script and the HTML shell written by the asset
//! build, inlines the script into the shell, writes the merged document and
//! moves the original shell aside.
//!
//! # Usage
//!
//! ```bash
//! # dist/app.js + dist/index.html -> dist/iframe-app.html, dist/original.html
//! frame-bundle
//!
//! # Paths from a config file, one of them overridden
//! frame-bundle --config bundle.toml --artifact public/embed.html
//! ```

use clap::Parser;
use env_logger::Env;
use frame_bundle::{BundleConfig, Bundler};
use log::{error, info};
use std::path::PathBuf;
use std::process;

/// Inline a compiled widget script into its HTML shell.
#[derive(Parser, Debug)]
#[command(name = "frame-bundle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a bundle.toml with [input] and [output] paths
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Build output directory holding the conventional file names
    #[arg(short, long, value_name = "DIR", conflicts_with = "config")]
    dist: Option<PathBuf>,

    /// Compiled script to inline
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// HTML shell referencing the script
    #[arg(long, value_name = "FILE")]
    shell: Option<PathBuf>,

    /// Where to write the merged document
    #[arg(long, value_name = "FILE")]
    artifact: Option<PathBuf>,

    /// Where to move the original shell
    #[arg(long, value_name = "FILE")]
    backup: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn bundle_config(&self) -> frame_bundle::Result<BundleConfig> {
        let mut config = match (&self.config, &self.dist) {
            (Some(path), _) => BundleConfig::load(path)?,
            (None, Some(dist)) => BundleConfig::in_dir(dist),
            (None, None) => BundleConfig::default(),
        };

        if let Some(script) = &self.script {
            config.input.script = script.clone();
        }
        if let Some(shell) = &self.shell {
            config.input.shell = shell.clone();
        }
        if let Some(artifact) = &self.artifact {
            config.output.artifact = artifact.clone();
        }
        if let Some(backup) = &self.backup {
            config.output.backup = backup.clone();
        }

        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    let config = match args.bundle_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load bundle config: {}", e);
            process::exit(1);
        }
    };

    info!("Script: {}", config.input.script.display());
    info!("Shell: {}", config.input.shell.display());

    let report = match Bundler::new(config).run() {
        Ok(report) => report,
        Err(e) => {
            error!("Bundle failed: {}", e);
            process::exit(1);
        }
    };

    info!("Artifact: {} ({} bytes)", report.artifact.display(), report.size);
    info!("BLAKE3: {}", report.digest);
    info!("Original shell kept at {}", report.backup.display());
}
