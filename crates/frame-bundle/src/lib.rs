//! # frame-bundle
//!
//! Build step that turns the widget's compiled output into one
//! self-contained HTML file for iframe embedding.
//!
//! This crate provides:
//! - [`inline_script`]: pure `(shell, script) -> merged` transform
//! - [`Bundler`]: read inputs, merge, write the artifact, move the shell aside
//! - [`BundleConfig`]: input/output paths, optionally from `bundle.toml`
//!
//! ## Example
//!
//! ```ignore
//! use frame_bundle::{BundleConfig, Bundler};
//!
//! let report = Bundler::new(BundleConfig::in_dir("dist")).run()?;
//! println!("{} ({})", report.artifact.display(), report.digest);
//! ```

mod bundler;
mod config;
mod error;
mod inline;

pub use bundler::{BundleReport, Bundler};
pub use config::{
    BundleConfig, InputPaths, OutputPaths, DEFAULT_ARTIFACT, DEFAULT_BACKUP, DEFAULT_DIST_DIR,
    DEFAULT_SCRIPT, DEFAULT_SHELL,
};
pub use error::{Error, Result};
pub use inline::{inline_script, EXTERNAL_SCRIPT_SELECTOR};
