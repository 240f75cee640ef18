//! Main binary entry point for depxml.

use clap::Parser;
use depxml::diagnostics::Diagnostics;
use depxml::errors::ConverterError;
use depxml::parser::MalformedLinePolicy;
use depxml::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "DEPXML_INPUT",
        default_value = "dependencies.txt"
    )]
    input: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "DEPXML_OUTPUT",
        default_value = "dependencies.xml"
    )]
    output: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    #[arg(
        long,
        value_enum,
        default_value = "skip",
        help = "How to handle a key line with no '=' separator"
    )]
    on_malformed: MalformedLinePolicy,

    #[arg(long, help = "Escape XML special characters in field values")]
    escape: bool,

    #[arg(long, value_name = "FILE", help = "Write all diagnostics to a JSON file")]
    report: Option<PathBuf>,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn report_error(e: &ConverterError, diags: &mut Diagnostics) {
    diags.error(format!("Failed to process dependencies: {}", e));
    let mut source = std::error::Error::source(e);
    while let Some(s) = source {
        log::error!("  Caused by: {}", s);
        source = std::error::Error::source(s);
    }
}

fn build_config(cli: Cli) -> Config {
    Config {
        input_file: cli.input,
        output_file: cli.output,
        on_malformed: cli.on_malformed,
        escape: cli.escape,
        report_file: cli.report,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = build_config(cli);
    let mut diags = Diagnostics::new();

    let mut outcome = match depxml::run(&config, &mut diags) {
        Ok(count) => {
            eprintln!(
                "Dependencies written to XML file successfully: {} ({} entries)",
                config.output_file.display(),
                count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e, &mut diags);
            ExitCode::FAILURE
        }
    };

    if let Some(report) = &config.report_file {
        if let Err(e) = depxml::write_report(report, &diags) {
            report_error(&e, &mut diags);
            outcome = ExitCode::FAILURE;
        }
    }

    eprintln!("{}", diags.summary_line());
    outcome
}
