//! Line-oriented dependency parser.
//!
//! The input is a plain text file with one `key = value` assignment per
//! line, where the key is `groupId`, `artifactId` or `version`:
//!
//! ```text
//! groupId = org.example;
//! artifactId = mylib;
//! version = 1.2.3;
//! ```
//!
//! Values are accumulated in a [`PendingDependency`]. A `version` line
//! commits the pending triple when all three fields are present. Lines
//! that do not start with a known key are ignored. The key is the leading
//! identifier of the line, so a value that happens to contain a key name is
//! never mistaken for an assignment.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::ConverterError;
use crate::models::Dependency;
use clap::ValueEnum;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What to do with a line that starts with a key but is not `<key> = value`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Log a warning and ignore the line
    #[default]
    Skip,
    /// Abort parsing with an error
    Fail,
}

/// The three recognised keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GroupId,
    ArtifactId,
    Version,
}

impl Field {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "groupId" => Some(Field::GroupId),
            "artifactId" => Some(Field::ArtifactId),
            "version" => Some(Field::Version),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Field::GroupId => "groupId",
            Field::ArtifactId => "artifactId",
            Field::Version => "version",
        }
    }
}

/// Classification of a single trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `key = value` with a recognised key
    Assignment(Field, String),
    /// Starts with a recognised key but is not `key = value`
    Malformed(Field),
    /// Anything else
    Ignored,
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Classify a line. The line is expected to be trimmed already.
///
/// The leading identifier decides whether the line is about a key at all.
/// `groupIdX = 1` and `my.version = 2` are ignored, while `groupId: g` and
/// `groupId := g` are malformed.
pub fn classify_line(line: &str) -> LineKind {
    let end = line
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(line.len());
    let Some(field) = Field::from_key(&line[..end]) else {
        return LineKind::Ignored;
    };

    match line[end..].trim_start().strip_prefix('=') {
        Some(value) => LineKind::Assignment(field, clean_value(value)),
        None => LineKind::Malformed(field),
    }
}

/// Trim a raw value and remove every `;` from it.
///
/// Everything after the first `=` is kept, so `version = a=b` yields `a=b`.
pub fn clean_value(raw: &str) -> String {
    raw.trim().replace(';', "").trim().to_string()
}

/// Field values collected since the last committed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl PendingDependency {
    /// Store a value, overwriting any unconsumed value for the same field.
    pub fn apply(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::GroupId => &mut self.group_id,
            Field::ArtifactId => &mut self.artifact_id,
            Field::Version => &mut self.version,
        };
        *slot = Some(value);
    }

    /// Build a record from the current values and reset all slots, or
    /// leave everything untouched if any field is missing or empty.
    pub fn take_if_complete(&mut self) -> Option<Dependency> {
        let dependency = Dependency::new(
            self.group_id.as_deref()?,
            self.artifact_id.as_deref()?,
            self.version.as_deref()?,
        )?;
        *self = Self::default();
        Some(dependency)
    }

    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.artifact_id.is_none() && self.version.is_none()
    }

    fn describe(&self) -> String {
        let show = |slot: &Option<String>| slot.clone().unwrap_or_else(|| "null".to_string());
        format!(
            "{}, {}, {}",
            show(&self.group_id),
            show(&self.artifact_id),
            show(&self.version)
        )
    }
}

/// Fold state: the pending triple plus the records committed so far.
#[derive(Debug, Default)]
struct ParseState {
    pending: PendingDependency,
    dependencies: Vec<Dependency>,
}

fn step(
    mut state: ParseState,
    line_no: usize,
    raw: &str,
    policy: MalformedLinePolicy,
    diags: &mut Diagnostics,
) -> Result<ParseState, ConverterError> {
    let line = raw.trim_start_matches('\u{feff}').trim();
    diags.push(Diagnostic::info(format!("Processing line: {}", line)).with_line(line_no));

    match classify_line(line) {
        LineKind::Assignment(field, value) => {
            diags.push(
                Diagnostic::info(format!("Parsed {}: {}", field.key(), value)).with_line(line_no),
            );
            state.pending.apply(field, value);

            if field == Field::Version {
                match state.pending.take_if_complete() {
                    Some(dependency) => {
                        diags.push(
                            Diagnostic::info(format!("Added dependency: {}", dependency))
                                .with_line(line_no),
                        );
                        state.dependencies.push(dependency);
                    }
                    None => diags.push(
                        Diagnostic::warning(format!(
                            "Invalid dependency found and skipped: {}",
                            state.pending.describe()
                        ))
                        .with_line(line_no),
                    ),
                }
            }
        }
        LineKind::Malformed(field) => match policy {
            MalformedLinePolicy::Skip => diags.push(
                Diagnostic::warning(format!(
                    "Malformed {} line skipped, expected '{} = value': {}",
                    field.key(),
                    field.key(),
                    line
                ))
                .with_line(line_no),
            ),
            MalformedLinePolicy::Fail => {
                return Err(ConverterError::MalformedLine {
                    line: line_no,
                    content: line.to_string(),
                });
            }
        },
        LineKind::Ignored => {}
    }

    Ok(state)
}

/// Parse dependencies from any buffered reader.
///
/// `source` names the input in read errors. An I/O error part way through
/// discards everything parsed so far. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD and reported as a warning for that line.
pub fn parse_reader<R: BufRead>(
    reader: R,
    source: &Path,
    policy: MalformedLinePolicy,
    diags: &mut Diagnostics,
) -> Result<Vec<Dependency>, ConverterError> {
    let state = reader
        .split(b'\n')
        .enumerate()
        .try_fold(ParseState::default(), |state, (idx, bytes)| {
            let bytes = bytes.map_err(|e| ConverterError::read(source, e))?;
            let line = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = line {
                diags.push(
                    Diagnostic::warning("Line is not valid UTF-8, invalid bytes replaced")
                        .with_line(idx + 1),
                );
            }
            step(state, idx + 1, &line, policy, diags)
        })?;

    if !state.pending.is_empty() {
        diags.warning(format!(
            "Discarding incomplete dependency at end of input: {}",
            state.pending.describe()
        ));
    }

    Ok(state.dependencies)
}

/// Open `path` and parse the dependencies it lists.
pub fn read_dependencies(
    path: &Path,
    policy: MalformedLinePolicy,
    diags: &mut Diagnostics,
) -> Result<Vec<Dependency>, ConverterError> {
    let file = File::open(path).map_err(|e| ConverterError::read(path, e))?;
    parse_reader(BufReader::new(file), path, policy, diags)
}
