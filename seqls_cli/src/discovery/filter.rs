//! Basename filtering using glob patterns
//!
//! Include/exclude matching over basenames with compiled `GlobSet`s.
//! Character classes in the patterns are what the sibling-search mode leans
//! on: a rebuilt pattern like `d.[0-9][0-9][0-9][0-9].png` narrows a
//! directory to one sequence family.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use super::{ListingError, Result};

/// Pattern matcher using GlobSet for efficient matching
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    globset: GlobSet,
}

impl PatternMatcher {
    /// Create a new pattern matcher from glob patterns
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| ListingError::InvalidPattern(format!("{pattern}: {e}")))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| ListingError::InvalidPattern(e.to_string()))?;

        Ok(Self { globset })
    }

    /// Check if a basename matches any of the patterns
    pub fn matches(&self, name: &Path) -> bool {
        self.globset.is_match(name)
    }
}

/// Basename filter managing include and exclude patterns
#[derive(Debug)]
pub struct NameFilter {
    /// Include patterns matcher
    include_matcher: Option<PatternMatcher>,
    /// Exclude patterns matcher (overrides includes)
    exclude_matcher: Option<PatternMatcher>,
}

impl NameFilter {
    /// Create a new basename filter
    pub fn new(include_patterns: Vec<String>, exclude_patterns: Vec<String>) -> Result<Self> {
        let include_matcher = if !include_patterns.is_empty() {
            Some(PatternMatcher::new(&include_patterns)?)
        } else {
            None
        };

        let exclude_matcher = if !exclude_patterns.is_empty() {
            Some(PatternMatcher::new(&exclude_patterns)?)
        } else {
            None
        };

        Ok(Self {
            include_matcher,
            exclude_matcher,
        })
    }

    /// Check if a basename should be included
    ///
    /// Rules:
    /// 1. If the name matches exclude patterns -> false (exclude overrides)
    /// 2. If no include patterns -> true (include all by default)
    /// 3. If the name matches include patterns -> true
    /// 4. Otherwise -> false
    pub fn should_include(&self, name: &Path) -> bool {
        if let Some(ref exclude) = self.exclude_matcher
            && exclude.matches(name)
        {
            return false;
        }

        if let Some(ref include) = self.include_matcher {
            include.matches(name)
        } else {
            true
        }
    }
}
