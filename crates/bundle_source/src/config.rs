// crates/bundle_source/src/config.rs

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use include_directive::IncludeMatch;
use run_expander::DEFAULT_INTERPRETER;

/// Output file written in the current directory unless overridden.
pub const DEFAULT_OUTPUT: &str = "combined.cpp";

/// Overrides the interpreter used to run the external expander.
pub const PYTHON_ENV: &str = "BUNDLE_PYTHON";

/// When set, the external expander is not run.
pub const SKIP_EXPANDER_ENV: &str = "BUNDLE_SKIP_EXPANDER";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct BundleConfig {
    pub source_file: PathBuf,
    /// Holds `FormalPowerSeries.h`, `FormalPowerSeries.cpp` and `ac-library/`.
    pub library_dir: PathBuf,
    pub output: PathBuf,
    pub interpreter: OsString,
    pub include_match: IncludeMatch,
    pub run_expander: bool,
    pub verbose: bool,
}

impl BundleConfig {
    pub fn new<S: Into<PathBuf>, L: Into<PathBuf>>(source_file: S, library_dir: L) -> Self {
        Self {
            source_file: source_file.into(),
            library_dir: library_dir.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            interpreter: OsString::from(DEFAULT_INTERPRETER),
            include_match: IncludeMatch::Strict,
            run_expander: true,
            verbose: false,
        }
    }

    /// Like `new`, with `BUNDLE_PYTHON` and `BUNDLE_SKIP_EXPANDER` applied.
    pub fn from_env<S: Into<PathBuf>, L: Into<PathBuf>>(source_file: S, library_dir: L) -> Self {
        let mut config = Self::new(source_file, library_dir);
        if let Some(interpreter) = env::var_os(PYTHON_ENV) {
            if !interpreter.is_empty() {
                config.interpreter = interpreter;
            }
        }
        if env::var_os(SKIP_EXPANDER_ENV).is_some() {
            config.run_expander = false;
        }
        config
    }
}
