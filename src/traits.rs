use crate::entry::DirectoryEntry;
use crate::error::ViewError;
use crate::manifest::ManifestBlock;

/// A source of directories to build a view from.
///
/// The filesystem implementation is [`DirectorySource`](crate::DirectorySource);
/// implement this to generate a manifest from anything shaped like a
/// directory tree (fixtures, archives, remote listings).
///
/// `walk()` is lazy: entries are produced one directory at a time, and the
/// engine stops pulling at the first `Err`.
///
/// # Example
///
/// ```rust
/// use viewgen::{DirectoryEntry, Source, ViewError};
///
/// struct OneDir;
///
/// impl Source for OneDir {
///     fn walk(&self) -> Box<dyn Iterator<Item = Result<DirectoryEntry, ViewError>> + '_> {
///         Box::new(std::iter::once(Ok::<_, ViewError>(DirectoryEntry {
///             display: "./alpha/2.0".into(),
///             files:   vec!["README".into()],
///             links:   vec![],
///         })))
///     }
/// }
/// ```
pub trait Source {
    /// Traverse the source and yield one entry per directory.
    fn walk(&self) -> Box<dyn Iterator<Item = Result<DirectoryEntry, ViewError>> + '_>;
}

/// Receives manifest lines as they are produced.
///
/// A matched directory's header and file lines arrive together in one
/// [`ManifestBlock`], so implementations can keep a block contiguous.
pub trait Sink {
    /// Accept the block for one matched directory.
    fn emit(&mut self, block: &ManifestBlock) -> Result<(), ViewError>;

    /// Called once after the last block. Default: nothing to flush.
    fn finish(&mut self) -> Result<(), ViewError> {
        Ok(())
    }
}
