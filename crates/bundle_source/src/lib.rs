// crates/bundle_source/src/lib.rs

pub mod config;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use expand_aggregate_header::expand_aggregate_header;
use expand_first_include::expand_first_include;
use include_directive::AGGREGATE_HEADER;
use run_expander::{run_expander, ExpanderInvocation};

pub use config::BundleConfig;

/// Stage 1: expands the source file's first include of the aggregate header
/// with the aggregate header's own expansion.
pub fn bundle_lines(config: &BundleConfig) -> Result<Vec<String>> {
    expand_first_include(&config.source_file, AGGREGATE_HEADER, config.include_match, || {
        expand_aggregate_header(&config.library_dir, config.include_match)
    })
}

/// Writes `lines` joined with `\n` to `output`, replacing any existing file.
pub fn write_bundle<P: AsRef<Path>>(output: P, lines: &[String]) -> Result<()> {
    let output = output.as_ref();
    let file = File::create(output)
        .with_context(|| format!("Error creating {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(lines.join("\n").as_bytes())
        .with_context(|| format!("Error writing {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Error writing {}", output.display()))?;
    Ok(())
}

/// Bundles the configured source file into `config.output`, then hands the
/// written file to the external expander (unless disabled).
///
/// Returns the path of the bundled file.
pub fn bundle_source(config: &BundleConfig) -> Result<PathBuf> {
    log::debug!("{:?}", config);

    let lines = bundle_lines(config)
        .with_context(|| format!("Failed to bundle {}", config.source_file.display()))?;
    write_bundle(&config.output, &lines)?;
    log::info!("Wrote {} lines to {}", lines.len(), config.output.display());

    if config.run_expander {
        let invocation = ExpanderInvocation::for_library(&config.library_dir, &config.output)
            .with_interpreter(config.interpreter.clone());
        run_expander(&invocation).context("External expander failed")?;
    } else {
        log::info!("Skipping external expander");
    }

    Ok(config.output.clone())
}
