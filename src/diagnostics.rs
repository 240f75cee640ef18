//! Diagnostics collected during a conversion run.
//!
//! Every entry is recorded in a [`Diagnostics`] value and forwarded to the
//! `log` facade, so callers (and tests) can inspect what happened without
//! depending on how the global logger is configured.

use colored::*;
use serde::Serialize;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            Severity::Info => log::Level::Info,
        }
    }
}

/// A single diagnostic message, optionally tied to an input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Format without colors for logs or non-terminal output
    pub fn format_plain(&self) -> String {
        let severity_str = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };

        match self.line {
            Some(line) => format!("[{}] line {}: {}", severity_str, line, self.message),
            None => format!("[{}] {}", severity_str, self.message),
        }
    }
}

/// Ordered collection of everything reported during a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and forward it to the `log` facade.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let level = log::Level::from(diagnostic.severity);
        match diagnostic.line {
            Some(line) => log::log!(level, "line {}: {}", line, diagnostic.message),
            None => log::log!(level, "{}", diagnostic.message),
        }
        self.entries.push(diagnostic);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::info(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::warning(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::error(message));
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Messages of a given severity, in the order they were reported.
    pub fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| d.message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Convert the collected diagnostics to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One-line summary with colors for terminal output
    pub fn summary_line(&self) -> String {
        let errors = self.error_count();
        let warnings = self.warning_count();

        let status = if errors > 0 {
            "✗".red().bold()
        } else if warnings > 0 {
            "⚠".yellow().bold()
        } else {
            "✓".green().bold()
        };

        let plural = |n: usize, one: &str, many: &str| {
            format!("{} {}", n, if n == 1 { one } else { many })
        };

        format!(
            "{} {}, {}",
            status,
            plural(errors, "error", "errors").red(),
            plural(warnings, "warning", "warnings").yellow()
        )
    }
}
