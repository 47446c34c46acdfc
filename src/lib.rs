//! # viewgen
//!
//! Flattened view manifests for trees of versioned packages.
//!
//! A package tree is laid out as `./<package>/<version>/...`. viewgen walks
//! it and, for every directory inside a package/version pair, prints the
//! directory's path with the `<package>/<version>` prefix stripped, followed
//! by one line per file or symbolic link mapping the flattened path back to
//! its canonical `/Packages/<package>/<version>/...` location:
//!
//! ```text
//! /:
//! /README:/Packages/alpha/2.0/README
//! /bin:
//! /bin/run:/Packages/alpha/2.0/bin/run
//! ```
//!
//! The root and the `./<package>` level never produce output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let summary = viewgen::generate(".", std::io::stdout().lock())?;
//! eprintln!("{} directories mapped", summary.matched);
//! # Ok::<(), viewgen::ViewError>(())
//! ```
//!
//! # Custom Sources and Sinks
//!
//! Implement [`Source`] to build a view from something other than the
//! filesystem, and [`Sink`] to receive the manifest somewhere other than a
//! writer. `Vec<String>` is a ready-made sink:
//!
//! ```rust
//! use viewgen::{DirectoryEntry, Source, ViewError};
//!
//! struct Fixture(Vec<DirectoryEntry>);
//!
//! impl Source for Fixture {
//!     fn walk(&self) -> Box<dyn Iterator<Item = Result<DirectoryEntry, ViewError>> + '_> {
//!         Box::new(self.0.iter().cloned().map(Ok::<_, ViewError>))
//!     }
//! }
//!
//! let tree = Fixture(vec![DirectoryEntry {
//!     display: "./alpha/2.0/bin".into(),
//!     files:   vec!["run".into()],
//!     links:   vec![],
//! }]);
//!
//! let mut lines: Vec<String> = Vec::new();
//! viewgen::view().source(tree).run(&mut lines).unwrap();
//!
//! assert_eq!(lines, ["/bin:", "/bin/run:/Packages/alpha/2.0/bin/run"]);
//! ```

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod manifest;
mod pattern;
mod results;
mod sink;
mod source;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ViewBuilder;
pub use entry::{DirectoryEntry, EntryKind};
pub use error::ViewError;
pub use manifest::{ManifestBlock, DEFAULT_PACKAGES_ROOT};
pub use pattern::{is_package_version_directory, PackageMatch};
pub use results::{ScanStats, Summary};
pub use sink::WriteSink;
pub use source::DirectorySource;
pub use traits::{Sink, Source};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`ViewBuilder`] rooted at `.`.
pub fn view() -> ViewBuilder {
    ViewBuilder::default()
}

/// Walk `root` and write its view manifest to `out`.
///
/// Shorthand for `view().root(root).write_to(out)`.
pub fn generate(
    root: impl Into<std::path::PathBuf>,
    out: impl std::io::Write,
) -> Result<Summary, ViewError> {
    view().root(root).write_to(out)
}
