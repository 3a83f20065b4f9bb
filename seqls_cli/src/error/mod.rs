use colored::Colorize;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// CLI-specific error type with semantic exit codes
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Additional context information
    context: Vec<(String, String)>,

    /// Suggestions for recovery
    suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    Usage,
    Filesystem,
}

/// Semantic exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    #[allow(dead_code)]
    Success = 0,
    GeneralError = 1,
    Usage = 2,
    FilesystemError = 3,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self {
            message: message.to_string(),
            category: ErrorCategory::General,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a command misuse error
    pub fn usage(message: &str) -> Self {
        Self {
            message: message.to_string(),
            category: ErrorCategory::Usage,
            context: Vec::new(),
            suggestions: vec!["Run 'seqls --help' for usage information".to_string()],
            source: None,
        }
    }

    /// Create a filesystem error
    pub fn filesystem(message: &str) -> Self {
        let mut error = Self {
            message: message.to_string(),
            category: ErrorCategory::Filesystem,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        };

        if message.contains("not found") || message.contains("Incorrect path") {
            error
                .suggestions
                .push("Check if the file or directory exists".to_string());
            error
                .suggestions
                .push("Verify you have the correct path".to_string());
        } else if message.contains("permission") || message.contains("denied") {
            error.suggestions.push("Check file permissions".to_string());
        }

        error
    }

    /// Create an error from an IO error
    pub fn from_io_error(error: io::Error, path: &str) -> Self {
        let message = format!("IO error on '{path}': {error}");
        let mut cli_error = match error.kind() {
            io::ErrorKind::NotFound => Self::filesystem(&message),
            io::ErrorKind::PermissionDenied => Self::filesystem(&message),
            _ => Self::general(&message),
        };

        cli_error.source = Some(Box::new(error));
        cli_error
            .context
            .push(("path".to_string(), path.to_string()));
        cli_error
    }

    /// Attach a context key/value pair
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a recovery suggestion
    #[allow(dead_code)]
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestions.push(suggestion.to_string());
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General => ExitCode::GeneralError,
            ErrorCategory::Usage => ExitCode::Usage,
            ErrorCategory::Filesystem => ExitCode::FilesystemError,
        }
    }

    /// Format the error for user display
    pub fn format_for_user(&self, debug: bool) -> String {
        let mut output = String::new();

        let prefix = match self.category {
            ErrorCategory::General => "Error".red(),
            ErrorCategory::Usage => "Usage Error".yellow(),
            ErrorCategory::Filesystem => "File Error".red(),
        };

        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if !self.context.is_empty() {
            output.push_str("\nContext:\n");
            for (key, value) in &self.context {
                output.push_str(&format!("  {}: {}\n", key.bold(), value));
            }
        }

        if debug && let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  - {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            match self.category {
                ErrorCategory::General => "Error",
                ErrorCategory::Usage => "Usage Error",
                ErrorCategory::Filesystem => "File Error",
            },
            self.message
        )?;

        for (key, value) in &self.context {
            write!(f, " ({key}: {value})")?;
        }

        Ok(())
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Convert anyhow errors to CLI errors
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        Self::general(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::general("x").exit_code(), ExitCode::GeneralError);
        assert_eq!(CliError::usage("x").exit_code(), ExitCode::Usage);
        assert_eq!(
            CliError::filesystem("x").exit_code(),
            ExitCode::FilesystemError
        );
    }

    #[test]
    fn test_filesystem_error_suggests_path_check() {
        let error = CliError::filesystem("path not found: /tmp/missing");
        let rendered = error.format_for_user(false);
        assert!(rendered.contains("Check if the file or directory exists"));
    }

    #[test]
    fn test_display_includes_context() {
        let error = CliError::general("boom").with_context("path", "/tmp/x");
        assert!(error.to_string().contains("path: /tmp/x"));
    }

    #[test]
    fn test_from_io_error_maps_not_found() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error = CliError::from_io_error(io_error, "/tmp/x");
        assert_eq!(error.exit_code(), ExitCode::FilesystemError);
    }
}
