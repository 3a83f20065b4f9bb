//! Single-level directory walker
//!
//! Enumerates the files of exactly one directory level. Sequences are an
//! artifact of one directory (a frame set never spans folders), so the
//! walker never descends, and subdirectory entries are not members.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::{ListingError, Result, filter::NameFilter};

/// Options for directory listing
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Patterns to include (glob patterns)
    pub include_patterns: Vec<String>,
    /// Patterns to exclude (glob patterns, override includes)
    pub exclude_patterns: Vec<String>,
    /// Skip entries without an extension
    pub require_extension: bool,
    /// Follow symbolic links
    pub follow_links: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            require_extension: true,
            follow_links: false,
        }
    }
}

impl ListOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add include patterns
    pub fn with_include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.include_patterns = patterns;
        self
    }

    /// Add exclude patterns
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Set whether entries without an extension are skipped
    pub fn with_require_extension(mut self, require: bool) -> Self {
        self.require_extension = require;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// Streaming basename iterator over one directory level
pub struct DirectoryLister {
    /// Walker for directory traversal
    walker: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>>,
    /// Basename filter for pattern matching
    filter: NameFilter,
    /// Options used for listing
    options: ListOptions,
}

impl DirectoryLister {
    /// Create a new directory lister
    pub fn new(path: &Path, options: ListOptions) -> Result<Self> {
        if !path.is_dir() {
            return Err(ListingError::PathNotFound(path.to_path_buf()));
        }

        let filter = NameFilter::new(
            options.include_patterns.clone(),
            options.exclude_patterns.clone(),
        )?;

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(options.follow_links);

        Ok(Self {
            walker: Box::new(walker.into_iter()),
            filter,
            options,
        })
    }

    /// Check if an entry is a file we should include
    fn should_include_entry(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_file() {
            return false;
        }

        if self.options.require_extension && Path::new(entry.file_name()).extension().is_none() {
            return false;
        }

        self.filter.should_include(Path::new(entry.file_name()))
    }
}

impl Iterator for DirectoryLister {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.next()? {
                Ok(entry) => {
                    if self.should_include_entry(&entry) {
                        match entry.file_name().to_str() {
                            Some(name) => return Some(Ok(name.to_string())),
                            None => {
                                // non-UTF-8 names cannot be tokenized
                                log::warn!("skipping non-UTF-8 entry {:?}", entry.file_name());
                                continue;
                            }
                        }
                    }
                }
                Err(e) => {
                    // Log walk errors but continue
                    log::warn!("walk error: {e}");
                    continue;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqls_test_utils::SequenceDir;

    fn collect(path: &Path, options: ListOptions) -> Vec<String> {
        let mut names = DirectoryLister::new(path, options)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        names.sort();
        names
    }

    #[test]
    fn test_lists_files_only() {
        let fixture = SequenceDir::create(["a01.png", "a02.png"]).unwrap();
        fixture.add_subdir("nested").unwrap();

        let names = collect(fixture.path(), ListOptions::new());
        assert_eq!(names, vec!["a01.png", "a02.png"]);
    }

    #[test]
    fn test_never_descends() {
        let fixture = SequenceDir::create(["a01.png"]).unwrap();
        fixture.add_subdir("nested").unwrap();
        std::fs::write(fixture.path().join("nested/b01.png"), b"").unwrap();

        let names = collect(fixture.path(), ListOptions::new());
        assert_eq!(names, vec!["a01.png"]);
    }

    #[test]
    fn test_skips_extensionless_entries() {
        let fixture = SequenceDir::create(["a01.png", "README"]).unwrap();

        let names = collect(fixture.path(), ListOptions::new());
        assert_eq!(names, vec!["a01.png"]);

        let all = collect(
            fixture.path(),
            ListOptions::new().with_require_extension(false),
        );
        assert_eq!(all, vec!["README", "a01.png"]);
    }

    #[test]
    fn test_include_pattern_narrows() {
        let fixture = SequenceDir::create(["d.0001.png", "d.0002.png", "elem.info"]).unwrap();

        let names = collect(
            fixture.path(),
            ListOptions::new()
                .with_include_patterns(vec!["d.[0-9][0-9][0-9][0-9].png".to_string()]),
        );
        assert_eq!(names, vec!["d.0001.png", "d.0002.png"]);
    }

    #[test]
    fn test_exclude_pattern_overrides() {
        let fixture = SequenceDir::create(["a01.png", "a02.png", "tmp_a03.png"]).unwrap();

        let names = collect(
            fixture.path(),
            ListOptions::new().with_exclude_patterns(vec!["tmp_*".to_string()]),
        );
        assert_eq!(names, vec!["a01.png", "a02.png"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = DirectoryLister::new(Path::new("/no/such/directory"), ListOptions::new());
        assert!(matches!(result, Err(ListingError::PathNotFound(_))));
    }
}
