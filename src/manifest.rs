use std::io::Write;

use crate::entry::DirectoryEntry;
use crate::pattern::PackageMatch;

/// Canonical namespace flattened paths are mapped into.
pub const DEFAULT_PACKAGES_ROOT: &str = "/Packages";

/// Manifest text for one matched directory: a `<flattened>:` header and
/// one `<flattened>/<name>:<packages-root>/<package><flattened>/<name>`
/// line per file or link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestBlock {
    header:   String,
    mappings: Vec<String>,
}

impl ManifestBlock {
    pub fn render(entry: &DirectoryEntry, m: &PackageMatch, packages_root: &str) -> Self {
        let mappings = entry
            .names()
            .map(|name| {
                let child = m.child(name);
                format!("{child}:{packages_root}/{}{child}", m.package())
            })
            .collect();

        Self {
            header: format!("{}:", m.flattened()),
            mappings,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// File and link lines, without the header.
    pub fn mappings(&self) -> &[String] {
        &self.mappings
    }

    /// Header followed by mappings.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.mappings.iter().map(String::as_str))
    }

    /// Number of lines including the header.
    pub fn len(&self) -> usize {
        self.mappings.len() + 1
    }

    /// A block always carries its header, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Write the block as newline-terminated lines in a single buffer.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let mut buf = String::with_capacity(self.lines().map(|l| l.len() + 1).sum());
        for line in self.lines() {
            buf.push_str(line);
            buf.push('\n');
        }
        out.write_all(buf.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(display: &str, files: &[&str], links: &[&str]) -> DirectoryEntry {
        DirectoryEntry {
            display: display.into(),
            files:   files.iter().map(|s| s.to_string()).collect(),
            links:   links.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn renders_header_and_mappings() {
        let e = entry("./alpha/2.0", &["README"], &["latest"]);
        let m = PackageMatch::from_path(&e.display).unwrap();
        let block = ManifestBlock::render(&e, &m, DEFAULT_PACKAGES_ROOT);

        assert_eq!(block.header(), "/:");
        assert_eq!(
            block.mappings(),
            [
                "/README:/Packages/alpha/2.0/README",
                "/latest:/Packages/alpha/2.0/latest",
            ]
        );
        assert_eq!(block.len(), 3);
    }

    #[test]
    fn empty_directory_renders_header_only() {
        let e = entry("./alpha/2.0/share", &[], &[]);
        let m = PackageMatch::from_path(&e.display).unwrap();
        let block = ManifestBlock::render(&e, &m, DEFAULT_PACKAGES_ROOT);

        assert_eq!(block.lines().collect::<Vec<_>>(), ["/share:"]);
    }

    #[test]
    fn custom_packages_root() {
        let e = entry("./alpha/2.0/bin", &["run"], &[]);
        let m = PackageMatch::from_path(&e.display).unwrap();
        let block = ManifestBlock::render(&e, &m, "/Programs");

        assert_eq!(block.mappings(), ["/bin/run:/Programs/alpha/2.0/bin/run"]);
    }

    #[test]
    fn write_to_terminates_every_line() {
        let e = entry("./alpha/2.0/bin", &["run"], &[]);
        let m = PackageMatch::from_path(&e.display).unwrap();
        let block = ManifestBlock::render(&e, &m, DEFAULT_PACKAGES_ROOT);

        let mut out = Vec::new();
        block.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/bin:\n/bin/run:/Packages/alpha/2.0/bin/run\n"
        );
    }
}
