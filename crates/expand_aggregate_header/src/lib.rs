// crates/expand_aggregate_header/src/lib.rs

use std::path::Path;
use anyhow::Result;
use expand_first_include::expand_first_include;
use include_directive::{IncludeMatch, AGGREGATE_HEADER, AGGREGATE_IMPL};

/// Produces the replacement text for the aggregate header found in `library_dir`.
///
/// The declaration file's first include of the implementation file is replaced
/// by the implementation file itself, and the implementation's own include of
/// the declaration file is dropped so the declarations appear only once.
///
/// # Arguments
///
/// * `library_dir` - Directory holding `FormalPowerSeries.h` and `FormalPowerSeries.cpp`.
/// * `mode`        - Include matching policy applied to both files.
///
/// # Errors
///
/// Returns an error if either file cannot be read.
pub fn expand_aggregate_header<P: AsRef<Path>>(library_dir: P, mode: IncludeMatch) -> Result<Vec<String>> {
    let library_dir = library_dir.as_ref();
    let header_path = library_dir.join(AGGREGATE_HEADER);
    let impl_path = library_dir.join(AGGREGATE_IMPL);

    let lines = expand_first_include(&header_path, AGGREGATE_IMPL, mode, || {
        // The back-reference to the header contributes no lines.
        expand_first_include(&impl_path, AGGREGATE_HEADER, mode, || Ok(Vec::new()))
    })?;

    log::info!(
        "Expanded {} from {} ({} lines)",
        AGGREGATE_HEADER,
        library_dir.display(),
        lines.len()
    );
    Ok(lines)
}
