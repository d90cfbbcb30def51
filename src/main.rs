use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use header_sync::services::{DEFAULT_INCLUDE_TARGET, DEFAULT_LIBRARY_PATH, DEFAULT_TEST_SOURCE_DIR};
use header_sync::{
    combine_tests, copy_include, locate_tests, AppConfig, CombineReport, IncludeConfig,
    IncludeCopyReport, TestsConfig,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Include,
    LocateTests,
    CombineTests,
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let (operation, config) = create_app_config(&matches)?;

    initialize_logging(&config.log_level)?;

    run_application(operation, config)
}

fn build_cli() -> Command {
    let location = Arg::new("location")
        .long("location")
        .value_name("DIR")
        .help("Directory scanned for files whose name contains \"test.hpp\"")
        .default_value(DEFAULT_TEST_SOURCE_DIR);

    Command::new("header-sync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy header-only library includes and combine test headers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the operation report as JSON on stdout")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("include")
                .about("Copy <LIBRARY>/include into <TARGET>/<library name>")
                .arg(
                    Arg::new("library")
                        .value_name("LIBRARY")
                        .help("Root directory of the header-only library")
                        .default_value(DEFAULT_LIBRARY_PATH),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .value_name("DIR")
                        .help("Existing directory receiving the per-library folder")
                        .default_value(DEFAULT_INCLUDE_TARGET),
                ),
        )
        .subcommand(
            Command::new("locate-tests")
                .about("List test headers in a directory")
                .arg(location.clone()),
        )
        .subcommand(
            Command::new("combine-tests")
                .about("Concatenate test headers into a single file")
                .arg(location)
                .arg(
                    Arg::new("outfile")
                        .long("outfile")
                        .value_name("FILE")
                        .help("Combined output file [default: <location>/_tests.hpp]"),
                ),
        )
}

/// Build the application configuration from CLI arguments
fn create_app_config(matches: &ArgMatches) -> Result<(Operation, AppConfig)> {
    let mut config = AppConfig {
        log_level: string_arg(matches, "log-level")?,
        json: matches.get_flag("json"),
        ..AppConfig::default()
    };

    let operation = match matches.subcommand() {
        Some(("include", sub)) => {
            config.include = IncludeConfig {
                library_path: path_arg(sub, "library")?,
                target_root: path_arg(sub, "target")?,
            };
            Operation::Include
        }
        Some(("locate-tests", sub)) => {
            config.tests = TestsConfig::new(path_arg(sub, "location")?);
            Operation::LocateTests
        }
        Some(("combine-tests", sub)) => {
            let mut tests = TestsConfig::new(path_arg(sub, "location")?);
            if let Some(outfile) = sub.get_one::<String>("outfile") {
                tests.outfile = PathBuf::from(outfile);
            }
            config.tests = tests;
            Operation::CombineTests
        }
        _ => anyhow::bail!("No subcommand given"),
    };

    Ok((operation, config))
}

fn string_arg(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("Missing value for --{}", name))
}

fn path_arg(matches: &ArgMatches, name: &str) -> Result<PathBuf> {
    string_arg(matches, name).map(PathBuf::from)
}

/// Initialize structured logging with tracing
fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

fn run_application(operation: Operation, config: AppConfig) -> Result<()> {
    info!("Starting header-sync {:?}", operation);
    tracing::debug!("Configuration: {:#?}", config);

    match operation {
        Operation::Include => {
            let report = copy_include(&config.include.library_path, &config.include.target_root)?;
            if config.json {
                print_json(&report)?;
            } else {
                print_include_report(&report);
            }
        }
        Operation::LocateTests => {
            let headers = locate_tests(&config.tests.location)?;
            if config.json {
                print_json(&headers)?;
            } else {
                for header in &headers {
                    println!("{}", header.display());
                }
            }
        }
        Operation::CombineTests => {
            let headers = locate_tests(&config.tests.location)?;
            let report = combine_tests(&headers, &config.tests.outfile)?;
            if config.json {
                print_json(&report)?;
            } else {
                print_combine_report(&report);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

fn print_include_report(report: &IncludeCopyReport) {
    info!("=== INCLUDE COPY REPORT ===");
    info!("Library: {}", report.library_name);
    info!("Destination: {}", report.destination_dir.display());
    info!("Destination created: {}", report.created_destination);
    info!("Files copied: {}", report.files.len());
    for file in &report.files {
        info!("  {} ({} bytes, sha256 {})", file.destination.display(), file.bytes, file.sha256);
    }
}

fn print_combine_report(report: &CombineReport) {
    info!("=== COMBINE REPORT ===");
    info!("Output: {}", report.outfile.display());
    info!("Headers combined: {}", report.headers.len());
    for header in &report.headers {
        info!("  {} ({} bytes)", header.path.display(), header.bytes);
    }
    info!("Total bytes: {}", report.total_bytes);
    info!("Output sha256: {}", report.sha256);
}
