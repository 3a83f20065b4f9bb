use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

mod config;
mod context;
mod discovery;
mod error;
mod logfile;
mod output;
mod paths;
mod terminal;

use crate::config::{AppConfig, ConfigManager};
use crate::context::RunContext;
use crate::discovery::{ListOptions, ListingError, list_basenames};
use crate::error::{CliError, CliResult};
use crate::logfile::ReportLog;
use crate::output::{OutputFormat, ReportFormatter, TextFormatter, create_formatter};
use seqls_core::{Placeholder, format_all, tokenize};

#[derive(Parser)]
#[command(name = "seqls")]
#[command(author, version, about = "Sequence-aware directory listing - numbered frame sets collapse to one entry", long_about = None)]
struct Cli {
    /// File, directory, or glob pattern to list; defaults to the current directory
    target: Option<String>,

    /// Explicitly specify a directory or a file path
    #[arg(short, long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Increase verbosity (-v adds totals, -vv also lists members)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Output format (text, json, csv)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Exclude patterns (glob patterns, can be specified multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude_patterns: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Append the report to the report log
    #[arg(long)]
    log: bool,

    /// Write the report log to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// What one invocation was asked to list.
enum Target {
    Directory(PathBuf),
    /// One explicit file: list its sequence siblings.
    File(PathBuf),
    /// A glob over the basenames of one directory.
    Glob { dir: PathBuf, pattern: String },
}

impl Target {
    fn label(&self) -> String {
        match self {
            Target::Directory(dir) => dir.display().to_string(),
            Target::File(path) => path.display().to_string(),
            Target::Glob { dir, pattern } => dir.join(pattern).display().to_string(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let debug = cli.debug;
    if let Err(error) = run(cli) {
        eprint!("{}", error.format_for_user(debug));
        std::process::exit(error.exit_code() as i32);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = ConfigManager::new().load()?;

    let use_color = terminal::color_enabled(cli.no_color, config.output.color_enabled);
    if !use_color {
        colored::control::set_override(false);
    }

    let target = classify_target(&cli)?;
    let names = enumerate(&target, &cli, &config)?;
    let report = seqls_core::scan(&names);

    let ctx = RunContext::new(target.label(), cli.verbose);
    let format = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.default_format);
    let format =
        OutputFormat::from_string(format).map_err(|e| CliError::usage(&e.to_string()))?;

    let rendered = create_formatter(format, use_color).format_report(&report, &ctx)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    if cli.log || config.log.enabled {
        write_report_log(&cli, &config, &ctx, &report)?;
    }

    Ok(())
}

/// Decide what the positional/`--path` input names. An explicit `--path`
/// that is neither a file nor a directory is the one hard failure; a
/// positional that matches nothing on disk is treated as a glob.
fn classify_target(cli: &Cli) -> CliResult<Target> {
    if let Some(path) = &cli.path {
        return classify_path(path);
    }

    if let Some(target) = &cli.target {
        let as_path = Path::new(target);
        if as_path.is_dir() || as_path.is_file() {
            return classify_path(as_path);
        }
        let (dir, pattern) = split_glob(target)?;
        return Ok(Target::Glob { dir, pattern });
    }

    let cwd = std::env::current_dir().map_err(|e| CliError::from_io_error(e, "."))?;
    Ok(Target::Directory(cwd))
}

fn classify_path(path: &Path) -> CliResult<Target> {
    if path.is_dir() {
        Ok(Target::Directory(path.to_path_buf()))
    } else if path.is_file() {
        Ok(Target::File(path.to_path_buf()))
    } else {
        Err(
            CliError::filesystem("Incorrect path given: neither a file nor a directory")
                .with_context("path", &path.display().to_string()),
        )
    }
}

/// Split a glob like `renders/d.*.png` into its directory part and the
/// basename pattern. The directory part must exist.
fn split_glob(target: &str) -> CliResult<(PathBuf, String)> {
    let as_path = Path::new(target);
    let pattern = as_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::usage(&format!("Unusable glob pattern: {target}")))?
        .to_string();

    let dir = match as_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if !dir.is_dir() {
        return Err(
            CliError::filesystem("Incorrect path given: glob directory not found")
                .with_context("path", &dir.display().to_string()),
        );
    }

    Ok((dir, pattern))
}

/// Enumerate the basenames the engine will see for this target.
fn enumerate(target: &Target, cli: &Cli, config: &AppConfig) -> CliResult<Vec<String>> {
    let base_options = ListOptions::new()
        .with_exclude_patterns(cli.exclude_patterns.clone())
        .with_require_extension(config.listing.require_extension)
        .with_follow_links(config.listing.follow_links);

    let (dir, options) = match target {
        Target::Directory(dir) => (dir.clone(), base_options),
        Target::Glob { dir, pattern } => (
            dir.clone(),
            base_options.with_include_patterns(vec![pattern.clone()]),
        ),
        Target::File(path) => {
            let base = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    CliError::usage(&format!("Unusable file name: {}", path.display()))
                })?;
            // widen every digit run so the whole family matches
            let pattern = format_all(&tokenize(base), Placeholder::CharClass);
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            (dir, base_options.with_include_patterns(vec![pattern]))
        }
    };

    list_basenames(&dir, options).map_err(|e| match e {
        ListingError::PathNotFound(p) => {
            CliError::filesystem("Incorrect path given: not found")
                .with_context("path", &p.display().to_string())
        }
        ListingError::InvalidPattern(msg) => CliError::usage(&format!("Invalid pattern: {msg}")),
        ListingError::Io(err) => CliError::from_io_error(err, &dir.display().to_string()),
    })
}

fn write_report_log(
    cli: &Cli,
    config: &AppConfig,
    ctx: &RunContext,
    report: &seqls_core::ScanReport,
) -> CliResult<()> {
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.log.path.clone())
        .unwrap_or_else(paths::get_log_path);

    let plain = TextFormatter::new(false).format_report(report, ctx)?;
    let mut log = ReportLog::open(&log_path)
        .map_err(|e| CliError::from_io_error(e, &log_path.display().to_string()))?;
    log.append_report(&ctx.target_label, report.total_files, &plain)
        .map_err(|e| CliError::from_io_error(e, &log_path.display().to_string()))?;

    Ok(())
}
