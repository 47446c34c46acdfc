use std::time::Instant;

use tracing::{debug, trace};

use crate::error::ViewError;
use crate::manifest::ManifestBlock;
use crate::pattern::PackageMatch;
use crate::results::{ScanStats, Summary};
use crate::traits::{Sink, Source};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions<'a> {
    pub source:        Box<dyn Source + 'a>,
    pub packages_root: String,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk `opts.source` and stream one manifest block per matched directory
/// into `sink`.
///
/// Single pass, fail-fast: the first error from the source or the sink ends
/// the run. Blocks already emitted stay emitted.
pub(crate) fn run(opts: EngineOptions<'_>, sink: &mut dyn Sink) -> Result<Summary, ViewError> {
    let start = Instant::now();

    let mut dirs    = 0;
    let mut matched = 0;
    let mut entries = 0;
    let mut lines   = 0;

    for entry in opts.source.walk() {
        let entry = entry?;
        dirs += 1;

        let Some(m) = PackageMatch::from_path(&entry.display) else {
            trace!(dir = %entry.display, "not a package/version directory, skipping");
            continue;
        };

        let block = ManifestBlock::render(&entry, &m, &opts.packages_root);
        debug!(
            dir       = %entry.display,
            package   = m.package(),
            flattened = m.flattened(),
            lines     = block.len(),
            "emitting view block"
        );

        sink.emit(&block)?;

        matched += 1;
        entries += block.mappings().len();
        lines   += block.len();
    }

    sink.finish()?;

    Ok(Summary {
        matched,
        lines,
        stats: ScanStats {
            dirs,
            entries,
            duration: start.elapsed(),
        },
    })
}
