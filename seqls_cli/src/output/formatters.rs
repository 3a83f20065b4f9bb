use anyhow::Result;
use colored::{ColoredString, Colorize};
use seqls_core::{RangeBreak, ScanReport, SequenceEntry};
use serde_json::json;

use super::ReportFormatter;
use crate::context::RunContext;

/// The listing shown when nothing matched.
pub const EMPTY_MESSAGE: &str = "There is nothing here.";

/// Range tally for one group: the space-joined `start-end` list, shown only
/// when the group actually has breaks. A fully contiguous sequence (one
/// range) and a singleton (none) both render blank.
fn range_tally(ranges: &[RangeBreak]) -> String {
    if ranges.len() < 2 {
        return String::new();
    }
    ranges
        .iter()
        .map(RangeBreak::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_entry(&self, entry: &SequenceEntry, verbosity: u8) -> String {
        let mut output = String::new();

        if verbosity > 1 {
            for file in &entry.files {
                output.push_str(&format!("  {file}\n"));
            }
        }

        let count = self.colorize(&entry.metadata.count.to_string(), |s| s.yellow());
        let name = self.colorize(&entry.metadata.format_name, |s| s.cyan());
        output.push_str(&format!(
            "{} {}\t{}\n",
            count,
            name,
            range_tally(&entry.metadata.ranges)
        ));

        output
    }
}

impl ReportFormatter for TextFormatter {
    fn format_report(&self, report: &ScanReport, ctx: &RunContext) -> Result<String> {
        if report.is_empty() {
            return Ok(format!("\n{EMPTY_MESSAGE}\n"));
        }

        let mut output = String::new();

        if ctx.verbosity > 0 {
            output.push_str(&format!("--- {} ---\n", ctx.target_label));
        }

        for entry in report.entries.values() {
            output.push_str(&self.format_entry(entry, ctx.verbosity));
        }

        if ctx.verbosity > 0 {
            output.push_str(&format!("Length of all files: {}\n", report.total_files));
        }

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ScanReport, ctx: &RunContext) -> Result<String> {
        let value = json!({
            "target": ctx.target_label,
            "total_files": report.total_files,
            "sequences": report.entries,
        });

        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }
}

/// CSV formatter for tabular output
pub struct CsvFormatter;

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for CsvFormatter {
    fn format_report(&self, report: &ScanReport, _ctx: &RunContext) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["skeleton", "count", "format_name", "ranges"])?;

        for (skeleton, entry) in &report.entries {
            let ranges = entry
                .metadata
                .ranges
                .iter()
                .map(RangeBreak::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writer.write_record([
                skeleton.as_str(),
                &entry.metadata.count.to_string(),
                &entry.metadata.format_name,
                &ranges,
            ])?;
        }

        Ok(String::from_utf8(writer.into_inner()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqls_core::scan;

    fn ctx() -> RunContext {
        RunContext::new("testdir".to_string(), 0)
    }

    fn sample_report() -> ScanReport {
        scan(["d.0001.png", "d.0002.png", "d.0003.png", "elem.info"])
    }

    #[test]
    fn test_text_line_shape() {
        let rendered = TextFormatter::new(false)
            .format_report(&sample_report(), &ctx())
            .unwrap();

        assert!(rendered.contains("3 d.%04d.png\t"));
        assert!(rendered.contains("1 elem.info\t"));
    }

    #[test]
    fn test_text_blank_tally_for_contiguous_group() {
        let rendered = TextFormatter::new(false)
            .format_report(&sample_report(), &ctx())
            .unwrap();

        // a single range renders no tally
        assert!(rendered.contains("d.%04d.png\t\n"));
    }

    #[test]
    fn test_text_tally_for_gapped_group() {
        let report = scan(["f.101.rgb", "f.102.rgb", "f.104.rgb", "f.105.rgb"]);
        let rendered = TextFormatter::new(false)
            .format_report(&report, &ctx())
            .unwrap();

        assert!(rendered.contains("4 f.%d.rgb\t101-102 104-105"));
    }

    #[test]
    fn test_text_empty_report() {
        let rendered = TextFormatter::new(false)
            .format_report(&ScanReport::default(), &ctx())
            .unwrap();

        assert!(rendered.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_text_verbose_chrome() {
        let verbose_ctx = RunContext::new("testdir".to_string(), 1);
        let rendered = TextFormatter::new(false)
            .format_report(&sample_report(), &verbose_ctx)
            .unwrap();

        assert!(rendered.contains("--- testdir ---"));
        assert!(rendered.contains("Length of all files: 4"));
    }

    #[test]
    fn test_text_doubly_verbose_lists_members() {
        let verbose_ctx = RunContext::new("testdir".to_string(), 2);
        let rendered = TextFormatter::new(false)
            .format_report(&sample_report(), &verbose_ctx)
            .unwrap();

        assert!(rendered.contains("  d.0002.png\n"));
    }

    #[test]
    fn test_json_structure() {
        let rendered = JsonFormatter::new(false)
            .format_report(&sample_report(), &ctx())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["total_files"], 4);
        assert_eq!(value["sequences"]["d..png"]["metadata"]["count"], 3);
        assert_eq!(
            value["sequences"]["d..png"]["metadata"]["format_name"],
            "d.%04d.png"
        );
    }

    #[test]
    fn test_csv_rows() {
        let rendered = CsvFormatter::new()
            .format_report(&sample_report(), &ctx())
            .unwrap();

        assert!(rendered.starts_with("skeleton,count,format_name,ranges"));
        assert!(rendered.contains("d..png,3,d.%04d.png,1-3"));
        assert!(rendered.contains("elem.info,1,elem.info,"));
    }
}
