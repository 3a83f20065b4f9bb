//! Append-mode report log
//!
//! Every logged run appends the target label, the total file count, the
//! plain-text report, and a separating blank line, so the log reads as a
//! history of listings.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append-only writer for the report log.
pub struct ReportLog {
    file: File,
}

impl ReportLog {
    /// Open the log for appending, creating parent directories as needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Append one run: label line, total line, rendered report, blank line.
    pub fn append_report(
        &mut self,
        target_label: &str,
        total_files: usize,
        rendered: &str,
    ) -> io::Result<()> {
        writeln!(self.file, "{target_label}")?;
        writeln!(self.file, "{total_files}")?;
        self.file.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            writeln!(self.file)?;
        }
        writeln!(self.file)?;
        Ok(())
    }
}
