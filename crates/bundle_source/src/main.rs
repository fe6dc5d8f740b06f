use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, Command};
use std::ffi::OsString;
use std::path::PathBuf;

use bundle_source::{bundle_source, BundleConfig};
use include_directive::IncludeMatch;

const USAGE: &str = "Usage: bundle_source <source_file> <library_dir>";

fn cli() -> Command {
    Command::new("bundle_source")
        .version("0.1.0")
        .about("Bundles a source file and the FormalPowerSeries library into one submission file")
        .arg(
            Arg::new("source_file")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Source file that includes FormalPowerSeries.h"),
        )
        .arg(
            Arg::new("library_dir")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory holding FormalPowerSeries.{h,cpp} and ac-library/"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Bundled output file (default: combined.cpp)"),
        )
        .arg(
            Arg::new("python")
                .long("python")
                .num_args(1)
                .value_parser(clap::value_parser!(OsString))
                .help("Interpreter used to run ac-library/expander.py (default: python3)"),
        )
        .arg(
            Arg::new("loose_includes")
                .long("loose-includes")
                .help("Match includes by substring of the include argument")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_expander")
                .long("no-expander")
                .help("Do not run ac-library/expander.py on the output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        },
    };

    let verbose = matches.get_flag("verbose");
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let (Some(source_file), Some(library_dir)) = (
        matches.get_one::<PathBuf>("source_file"),
        matches.get_one::<PathBuf>("library_dir"),
    ) else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    let mut config = BundleConfig::from_env(source_file, library_dir);
    config.verbose = verbose;
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if let Some(python) = matches.get_one::<OsString>("python") {
        config.interpreter = python.clone();
    }
    if matches.get_flag("loose_includes") {
        config.include_match = IncludeMatch::Loose;
    }
    if matches.get_flag("no_expander") {
        config.run_expander = false;
    }

    let output = bundle_source(&config)?;
    println!(
        "Bundled {} into {}",
        config.source_file.display(),
        output.display()
    );
    Ok(())
}
