use std::time::Duration;

/// The output of a completed run. The manifest itself went to the sink;
/// this only counts what was done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Directories that matched `./<package>/<version>/` and produced a block.
    pub matched: usize,

    /// Manifest lines written, headers included.
    pub lines: usize,

    /// Traversal statistics.
    pub stats: ScanStats,
}

/// Traversal statistics for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// Directories visited, matched or not (the root included).
    pub dirs: usize,

    /// Files and links seen in matched directories.
    pub entries: usize,

    /// Wall-clock time from start to the final flush.
    pub duration: Duration,
}
