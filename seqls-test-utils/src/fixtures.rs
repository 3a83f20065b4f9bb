//! On-disk directory fixtures

use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;

/// A temporary directory populated with empty files, one per name. The
/// directory and its contents are removed on drop.
#[derive(Debug)]
pub struct SequenceDir {
    dir: TempDir,
}

impl SequenceDir {
    /// Create a directory containing the given basenames as empty files.
    pub fn create<I, S>(names: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = TempDir::new()?;
        for name in names {
            fs::write(dir.path().join(name.as_ref()), b"")?;
        }
        Ok(Self { dir })
    }

    /// Path of the fixture directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add one more file after creation.
    pub fn add_file(&self, name: &str) -> io::Result<()> {
        fs::write(self.dir.path().join(name), b"")
    }

    /// Add a subdirectory; listings must never treat it as a member.
    pub fn add_subdir(&self, name: &str) -> io::Result<()> {
        fs::create_dir(self.dir.path().join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_named_files() {
        let fixture = SequenceDir::create(["a01.png", "a02.png"]).unwrap();
        assert!(fixture.path().join("a01.png").is_file());
        assert!(fixture.path().join("a02.png").is_file());
    }

    #[test]
    fn test_add_subdir() {
        let fixture = SequenceDir::create(["a01.png"]).unwrap();
        fixture.add_subdir("nested").unwrap();
        assert!(fixture.path().join("nested").is_dir());
    }
}
