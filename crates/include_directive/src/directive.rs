// crates/include_directive/src/directive.rs

use once_cell::sync::Lazy;
use regex::Regex;

// `#include "path"` or `#include <path>`, whitespace allowed around `#`.
// Whatever follows the closing delimiter is ignored.
static INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#\s*include\s*(?:"([^"]+)"|<([^>]+)>)"#).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Quote,
    Angle,
}

/// A parsed `#include` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    path: String,
    delimiter: Delimiter,
}

impl IncludeDirective {
    /// Parses `line` as an include directive. Returns `None` for anything
    /// else, including commented-out directives and unterminated paths.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = INCLUDE_RE.captures(line)?;
        if let Some(path) = caps.get(1) {
            return Some(Self {
                path: path.as_str().to_string(),
                delimiter: Delimiter::Quote,
            });
        }
        caps.get(2).map(|path| Self {
            path: path.as_str().to_string(),
            delimiter: Delimiter::Angle,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Final `/`-separated component of the path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
