// crates/expand_first_include/src/lib.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use anyhow::{Context, Result};
use include_directive::{is_include_line, IncludeMatch};

/// Reads the file at `file_path` as a sequence of lines with trailing
/// whitespace (including any `\r`) stripped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_lines<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let file_path_ref = file_path.as_ref();
    let file = File::open(file_path_ref)
        .with_context(|| format!("Error opening file {}", file_path_ref.display()))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Error reading file {}", file_path_ref.display()))?;
        lines.push(line.trim_end().to_string());
    }
    Ok(lines)
}

/// Replaces the first line of `lines` that includes `header_name` with the
/// lines produced by `provider`. Every other line, including later includes
/// of the same header, is passed through unchanged.
///
/// The provider runs at most once, and only when a matching line exists.
///
/// # Errors
///
/// Propagates any error returned by `provider`.
pub fn splice_first_include<I, F>(
    lines: I,
    header_name: &str,
    mode: IncludeMatch,
    provider: F,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = String>,
    F: FnOnce() -> Result<Vec<String>>,
{
    let mut provider = Some(provider);
    let mut output = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        if provider.is_some() && is_include_line(&line, header_name, mode) {
            if let Some(expand) = provider.take() {
                let expansion = expand()?;
                log::debug!(
                    "Replacing include of {} at line {} with {} line(s)",
                    header_name,
                    index + 1,
                    expansion.len()
                );
                output.extend(expansion);
            }
        } else {
            output.push(line);
        }
    }

    if provider.is_some() {
        log::debug!("No include of {} found; lines left unchanged", header_name);
    }
    Ok(output)
}

/// Reads `file_path` and expands its first include of `header_name` with the
/// output of `provider`. The file itself is never modified.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or whatever `provider` fails with.
pub fn expand_first_include<P, F>(
    file_path: P,
    header_name: &str,
    mode: IncludeMatch,
    provider: F,
) -> Result<Vec<String>>
where
    P: AsRef<Path>,
    F: FnOnce() -> Result<Vec<String>>,
{
    let file_path_ref = file_path.as_ref();
    log::debug!("Expanding {} in {}", header_name, file_path_ref.display());
    let lines = read_lines(file_path_ref)?;
    splice_first_include(lines, header_name, mode, provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn failing_provider() -> Result<Vec<String>> {
        panic!("provider must not be invoked without a matching include")
    }

    #[test]
    fn test_no_match_returns_lines_unchanged() {
        let input = owned(&["#include <vector>", "int main() {}", ""]);
        let output = splice_first_include(input.clone(), "FormalPowerSeries.h", IncludeMatch::Strict, failing_provider)
            .unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_single_match_is_replaced_in_place() {
        let input = owned(&["a", "#include \"FormalPowerSeries.h\"", "b"]);
        let output = splice_first_include(input, "FormalPowerSeries.h", IncludeMatch::Strict, || {
            Ok(owned(&["x", "y"]))
        })
        .unwrap();
        assert_eq!(output, owned(&["a", "x", "y", "b"]));
    }

    #[test]
    fn test_only_first_match_is_replaced() {
        let input = owned(&[
            "#include \"FormalPowerSeries.h\"",
            "mid",
            "#include \"FormalPowerSeries.h\"",
        ]);
        let mut calls = 0;
        let output = splice_first_include(input, "FormalPowerSeries.h", IncludeMatch::Strict, || {
            calls += 1;
            Ok(owned(&["expanded"]))
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(
            output,
            owned(&["expanded", "mid", "#include \"FormalPowerSeries.h\""])
        );
    }

    #[test]
    fn test_empty_provider_deletes_the_include() {
        let input = owned(&["#include \"FormalPowerSeries.h\"", "", "#include <algorithm>"]);
        let output = splice_first_include(input, "FormalPowerSeries.h", IncludeMatch::Strict, || Ok(Vec::new()))
            .unwrap();
        assert_eq!(output, owned(&["", "#include <algorithm>"]));
    }

    #[test]
    fn test_provider_error_propagates() {
        let input = owned(&["#include \"FormalPowerSeries.h\""]);
        let result = splice_first_include(input, "FormalPowerSeries.h", IncludeMatch::Strict, || {
            anyhow::bail!("provider failed")
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("provider failed"));
    }

    #[test]
    fn test_read_lines_strips_trailing_whitespace() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "int a;   \r\n\tint b;\t\n\n  // keep leading").expect("Failed to write to temp file");

        let lines = read_lines(temp_file.path()).unwrap();
        assert_eq!(lines, owned(&["int a;", "\tint b;", "", "  // keep leading"]));
    }

    #[test]
    fn test_expand_first_include_from_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "#include <iostream>").unwrap();
        writeln!(temp_file, "#include \"../FormalPowerSeries.h\"  ").unwrap();
        writeln!(temp_file, "int main() {{}}").unwrap();

        let output = expand_first_include(temp_file.path(), "FormalPowerSeries.h", IncludeMatch::Strict, || {
            Ok(owned(&["// fps"]))
        })
        .unwrap();
        assert_eq!(output, owned(&["#include <iostream>", "// fps", "int main() {}"]));
    }

    #[test]
    fn test_expand_first_include_missing_file() {
        let result = expand_first_include(
            "/nonexistent/path/source.cpp",
            "FormalPowerSeries.h",
            IncludeMatch::Strict,
            failing_provider,
        );
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Error opening file /nonexistent/path/source.cpp"));
    }

    #[test]
    fn test_loose_mode_matches_substring_in_token() {
        let input = owned(&["#include \"lib/FormalPowerSeries.h.inc\"", "rest"]);
        let output = splice_first_include(input.clone(), "FormalPowerSeries.h", IncludeMatch::Loose, || {
            Ok(owned(&["spliced"]))
        })
        .unwrap();
        assert_eq!(output, owned(&["spliced", "rest"]));

        let strict = splice_first_include(input.clone(), "FormalPowerSeries.h", IncludeMatch::Strict, failing_provider)
            .unwrap();
        assert_eq!(strict, input);
    }
}
