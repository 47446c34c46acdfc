use std::io::Write;
use std::path::PathBuf;

use crate::engine::{run, EngineOptions};
use crate::error::ViewError;
use crate::manifest::DEFAULT_PACKAGES_ROOT;
use crate::results::Summary;
use crate::sink::WriteSink;
use crate::source::DirectorySource;
use crate::traits::{Sink, Source};

// ---------------------------------------------------------------------------
// ViewBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a view generation.
///
/// Created via [`viewgen::view()`](crate::view). Configure with chained
/// builder methods, then call [`run()`](ViewBuilder::run) with a sink.
///
/// # Example
///
/// ```rust,ignore
/// let mut lines: Vec<String> = Vec::new();
/// let summary = viewgen::view()
///     .root("/srv/packages")
///     .run(&mut lines)?;
/// ```
pub struct ViewBuilder {
    root:          PathBuf,
    source:        Option<Box<dyn Source>>,
    packages_root: String,
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self {
            root:          PathBuf::from("."),
            source:        None,
            packages_root: DEFAULT_PACKAGES_ROOT.to_owned(),
        }
    }
}

impl ViewBuilder {
    // ── Source ────────────────────────────────────────────────────────────

    /// Directory to walk. Defaults to `.`, the current working directory.
    ///
    /// Ignored when a custom [`source()`](ViewBuilder::source) is set.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Walk a custom [`Source`] instead of the filesystem.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// Prefix of the canonical mapping targets. Defaults to `/Packages`.
    pub fn packages_root(mut self, prefix: impl Into<String>) -> Self {
        self.packages_root = prefix.into();
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Generate the manifest into `sink`.
    ///
    /// # Errors
    ///
    /// Fails on the first traversal error (missing root, unreadable
    /// directory, symlink loop) or sink error. Blocks already handed to the
    /// sink before the failure are not retracted.
    pub fn run(self, sink: &mut dyn Sink) -> Result<Summary, ViewError> {
        let source: Box<dyn Source> = match self.source {
            Some(s) => s,
            None    => Box::new(DirectorySource::new(self.root)),
        };

        let opts = EngineOptions {
            source,
            packages_root: self.packages_root,
        };

        run(opts, sink)
    }

    /// Generate the manifest into any writer, flushing it at the end.
    pub fn write_to<W: Write>(self, out: W) -> Result<Summary, ViewError> {
        let mut sink = WriteSink::new(out);
        self.run(&mut sink)
    }
}
