// crates/include_directive/src/lib.rs

//! Shared include-line vocabulary for the bundling tool‑chain.
//!
//! * `IncludeDirective` – an `#include` line parsed once into its path and
//!   delimiter, so matching never relies on ad hoc token splitting.
//! * `IncludeMatch`     – the matching policy. `Strict` compares the parsed
//!   file name; `Loose` keeps the old "header name is a substring of the
//!   second token" behaviour for sources that depend on it.

mod directive;

pub use directive::{Delimiter, IncludeDirective};

/// Declaration half of the aggregate header pair.
pub const AGGREGATE_HEADER: &str = "FormalPowerSeries.h";

/// Implementation half, included at the bottom of `AGGREGATE_HEADER`.
pub const AGGREGATE_IMPL: &str = "FormalPowerSeries.cpp";

/// The keyword the loose matcher looks for at the very start of a line.
pub const INCLUDE_KEYWORD: &str = "#include";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncludeMatch {
    /// The line parses as a directive whose file name equals the header.
    #[default]
    Strict,
    /// The line starts with `#include` and its second token contains the header.
    Loose,
}

/// Returns true if `line` is an include directive referencing `header_name`
/// under the given matching policy.
pub fn is_include_line(line: &str, header_name: &str, mode: IncludeMatch) -> bool {
    match mode {
        IncludeMatch::Strict => IncludeDirective::parse(line)
            .map(|directive| directive.file_name() == header_name)
            .unwrap_or(false),
        IncludeMatch::Loose => {
            if !line.starts_with(INCLUDE_KEYWORD) {
                return false;
            }
            match line.split_whitespace().nth(1) {
                Some(token) => token.contains(header_name),
                None => false,
            }
        }
    }
}
