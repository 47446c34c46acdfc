//! Recognition of `./<package>/<version>/` directories.
//!
//! A directory path is tested with a trailing separator appended, so
//! `./alpha/2.0` is seen as `./alpha/2.0/` and flattens to `/`, while
//! `./alpha/2.0/bin` flattens to `/bin`. The match is anchored at the
//! root marker; the root and single-segment directories never match.

use std::sync::OnceLock;

use regex::Regex;

/// Root marker, two non-empty separator-free segments, separator.
const PACKAGE_VERSION_PREFIX: &str = r"^\./[^/]+/[^/]+/";

fn prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The pattern is a literal; failing to compile it is a programming error.
        Regex::new(PACKAGE_VERSION_PREFIX).unwrap_or_else(|e| panic!("bad prefix pattern: {e}"))
    })
}

/// Does `path` lie inside a `./<package>/<version>/` directory (or is it one)?
pub fn is_package_version_directory(path: &str) -> bool {
    PackageMatch::from_path(path).is_some()
}

/// The flattened path and package identifier derived from one directory path.
///
/// Both halves come from the same match; there is no way to build one
/// without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMatch {
    flattened: String,
    package:   String,
}

impl PackageMatch {
    /// Match `path` (e.g. `./alpha/2.0/bin`) against the package/version prefix.
    ///
    /// Returns `None` for paths that do not start with `./<seg>/<seg>/`.
    pub fn from_path(path: &str) -> Option<Self> {
        let mut normalized = path.to_owned();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let end = prefix_regex().find(&normalized)?.end();

        // `end - 1` is the separator closing the prefix; keep it as the root
        // of the flattened path.
        let rest = &normalized[end - 1..];
        let flattened = if rest.len() > 1 {
            &rest[..rest.len() - 1]
        } else {
            rest
        };

        Some(Self {
            flattened: flattened.to_owned(),
            package:   normalized[2..end - 1].to_owned(),
        })
    }

    /// Path inside the view, always rooted at `/`.
    pub fn flattened(&self) -> &str {
        &self.flattened
    }

    /// `<package>/<version>`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Flattened path of an immediate child named `name`.
    pub fn child(&self, name: &str) -> String {
        if self.flattened == "/" {
            format!("/{name}")
        } else {
            format!("{}/{name}", self.flattened)
        }
    }
}
