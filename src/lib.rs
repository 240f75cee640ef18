//! Main library for the dependency XML generator.
//!
//! This crate reads a line-oriented `groupId` / `artifactId` / `version`
//! listing and writes it out as a `<dependencies>` XML document.

pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod parser;
pub mod xml;

use diagnostics::Diagnostics;
use errors::ConverterError;
use log::info;
use parser::MalformedLinePolicy;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Top-level configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub on_malformed: MalformedLinePolicy,
    pub escape: bool,
    pub report_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("dependencies.txt"),
            output_file: PathBuf::from("dependencies.xml"),
            on_malformed: MalformedLinePolicy::default(),
            escape: false,
            report_file: None,
        }
    }
}

/// The main entry point for the conversion logic.
///
/// Parses the input file and, if at least one dependency was found, writes
/// the XML document. Returns the number of dependencies written. When no
/// dependency is found the output file is not touched.
pub fn run(config: &Config, diags: &mut Diagnostics) -> Result<usize, ConverterError> {
    let start_time = Instant::now();
    info!("  Input: {}", config.input_file.display());
    info!("  Output: {}", config.output_file.display());

    let dependencies = parser::read_dependencies(&config.input_file, config.on_malformed, diags)?;

    if dependencies.is_empty() {
        return Err(ConverterError::EmptyResult(config.input_file.clone()));
    }

    xml::write_file(&config.output_file, &dependencies, config.escape)?;
    diags.info(format!(
        "Dependencies written to XML file successfully ({} entries)",
        dependencies.len()
    ));

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(dependencies.len())
}

/// Write the collected diagnostics to `path` as JSON.
pub fn write_report(path: &Path, diags: &Diagnostics) -> Result<(), ConverterError> {
    let json = diags.to_json().map_err(|e| ConverterError::Report {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, json).map_err(|e| ConverterError::Report {
        path: path.to_path_buf(),
        source: e,
    })
}
