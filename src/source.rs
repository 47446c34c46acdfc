use std::fs;
use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};
use tracing::trace;

use crate::entry::{DirectoryEntry, EntryKind};
use crate::error::ViewError;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Walks a real directory tree.
///
/// Depth-first, siblings sorted by name, links never followed, and every
/// filter `ignore` normally applies (hidden files, `.gitignore`, ...) turned
/// off: the view must list everything on disk.
///
/// The walker only yields directories. Each directory's files and links
/// come from one `read_dir` taken when the directory is reached, so a
/// directory's block is complete before any of its subdirectories are
/// visited.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for DirectorySource {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<DirectoryEntry, ViewError>> + '_> {
        if !self.root.is_dir() {
            return Box::new(std::iter::once(Err(ViewError::InvalidSource(self.root.clone()))));
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|e| e.file_type().map(|ft| ft.is_dir()).unwrap_or(false))
            .build();

        Box::new(DirectoryWalk {
            root:  &self.root,
            inner: walker,
        })
    }
}

// ---------------------------------------------------------------------------
// DirectoryWalk
// ---------------------------------------------------------------------------

/// Lazy iterator behind [`DirectorySource::walk`]; lists a directory's
/// children only when that directory is reached.
struct DirectoryWalk<'a> {
    root:  &'a Path,
    inner: Walk,
}

impl Iterator for DirectoryWalk<'_> {
    type Item = Result<DirectoryEntry, ViewError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(e)  => e,
            Err(e) => return Some(Err(map_ignore_error(e))),
        };

        Some(read_directory(self.root, entry.path()))
    }
}

/// Build a [`DirectoryEntry`] for one directory reached by the walker.
fn read_directory(root: &Path, path: &Path) -> Result<DirectoryEntry, ViewError> {
    let mut files = Vec::new();
    let mut links = Vec::new();

    let children = fs::read_dir(path).map_err(|e| ViewError::from_io(path.to_path_buf(), e))?;
    for child in children {
        let child = child.map_err(|e| ViewError::from_io(path.to_path_buf(), e))?;
        let ft = child
            .file_type()
            .map_err(|e| ViewError::from_io(child.path(), e))?;
        let name = child.file_name().to_string_lossy().into_owned();

        match EntryKind::from_file_type(ft) {
            EntryKind::Dir     => {}
            EntryKind::Symlink => links.push(name),
            EntryKind::File | EntryKind::Other => files.push(name),
        }
    }

    files.sort();
    links.sort();

    let shown = display_path(root, path);
    trace!(dir = %shown, files = files.len(), links = links.len(), "listed directory");

    Ok(DirectoryEntry {
        display: shown,
        files,
        links,
    })
}

/// `.` for the root, `./a/b` below it, always with `/` separators.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut display = String::from(".");
    for component in rel.components() {
        display.push('/');
        display.push_str(&component.as_os_str().to_string_lossy());
    }
    display
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ViewError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> ViewError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => ViewError::from_io(path, io_err),
            other                     => map_ignore_error(other),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Io(io_err)            => ViewError::from_io(PathBuf::new(), io_err),
        other                                => ViewError::Source(other.to_string()),
    }
}
