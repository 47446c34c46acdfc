/// One directory produced by a [`Source`](crate::traits::Source) during traversal,
/// together with the names of its immediate files and symbolic links.
///
/// Subdirectories are not listed here; they show up as their own
/// `DirectoryEntry` later in the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path relative to the traversal root, written with the root marker:
    /// `.` for the root itself, `./alpha/2.0/bin` below it.
    pub display: String,

    /// Names of immediate regular files (and any other non-directory,
    /// non-link entries), sorted.
    pub files: Vec<String>,

    /// Names of immediate symbolic links, sorted. Links are never followed.
    pub links: Vec<String>,
}

impl DirectoryEntry {
    /// Files first, then links, in the order they will be emitted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .chain(self.links.iter())
            .map(String::as_str)
    }
}

/// The kind of an immediate child of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link, whatever it points to.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    /// Classify a file type without following links.
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}
