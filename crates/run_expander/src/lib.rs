// crates/run_expander/src/lib.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use anyhow::{bail, Context, Result};

/// Interpreter used to run the expander script unless overridden.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Directory (under the library directory) holding the expander and its headers.
pub const AC_LIBRARY_DIR: &str = "ac-library";

/// File name of the external expander script.
pub const EXPANDER_SCRIPT: &str = "expander.py";

/// A single call of the external expander over an already written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderInvocation {
    pub interpreter: OsString,
    pub script: PathBuf,
    pub lib_dir: PathBuf,
    pub target: PathBuf,
}

impl ExpanderInvocation {
    /// Builds the default invocation for the layout `<library_dir>/ac-library/expander.py`.
    pub fn for_library<P: AsRef<Path>, Q: AsRef<Path>>(library_dir: P, target: Q) -> Self {
        let lib_dir = library_dir.as_ref().join(AC_LIBRARY_DIR);
        Self {
            interpreter: OsString::from(DEFAULT_INTERPRETER),
            script: lib_dir.join(EXPANDER_SCRIPT),
            lib_dir,
            target: target.as_ref().to_path_buf(),
        }
    }

    pub fn with_interpreter<S: Into<OsString>>(mut self, interpreter: S) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Arguments passed after the interpreter: the script, `--lib=<dir>`, then the target file.
    pub fn args(&self) -> Vec<OsString> {
        let mut lib_flag = OsString::from("--lib=");
        lib_flag.push(&self.lib_dir);
        vec![
            self.script.clone().into_os_string(),
            lib_flag,
            self.target.clone().into_os_string(),
        ]
    }
}

/// Runs the external expander and waits for it to exit. Its stdout and stderr
/// are inherited so any diagnostics reach the user untouched.
///
/// # Errors
///
/// Returns an error if the interpreter cannot be spawned, or if the expander
/// exits with a non-zero status.
pub fn run_expander(invocation: &ExpanderInvocation) -> Result<ExitStatus> {
    log::debug!(
        "Running {} {:?}",
        invocation.interpreter.to_string_lossy(),
        invocation.args()
    );
    let status = Command::new(&invocation.interpreter)
        .args(invocation.args())
        .status()
        .with_context(|| {
            format!(
                "Failed to execute {}",
                invocation.interpreter.to_string_lossy()
            )
        })?;

    if !status.success() {
        bail!(
            "{} exited with status {}",
            invocation.script.display(),
            status
        );
    }
    Ok(status)
}
