//! Column spec grammar.
//!
//! A column spec is either a plain column name (`NAME`) or a synthesis
//! expression of the form `customName: header[key]`, where the `customName:`
//! prefix is optional and `key` is extracted from the source column's
//! key/value content at render time. Only the labels column is a supported
//! synthesis source.

use std::sync::OnceLock;

use regex::Regex;

/// The only header name supported as a synthesis source.
pub const LABELS_COLUMN: &str = "LABELS";

static SPEC_PATTERN: OnceLock<Regex> = OnceLock::new();

fn spec_pattern() -> &'static Regex {
    SPEC_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:([^:]+):\s*)?(.*)\[(.*)\]$").expect("valid spec pattern")
    })
}

/// True when `spec` has the shape of a synthesis expression. A spec that
/// does not match is a plain column reference.
pub fn matches_grammar(spec: &str) -> bool {
    spec_pattern().is_match(spec)
}

/// Parsed synthesis expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnExpr {
    /// User-supplied display name, trimmed of surrounding whitespace.
    pub custom_name: Option<String>,
    /// Canonical name of the column the value is pulled from.
    pub header: String,
    /// Key to extract from the source column's key/value content.
    pub key: String,
}

impl ColumnExpr {
    /// Parses a spec string. Returns `None` for plain column references and
    /// for matches that fail capture extraction.
    pub fn parse(spec: &str) -> Option<Self> {
        let caps = spec_pattern().captures(spec)?;
        let custom_name = caps.get(1).map(|m| m.as_str().trim().to_string());
        let header = caps.get(2)?.as_str().to_string();
        let key = caps.get(3)?.as_str().to_string();
        Some(Self {
            custom_name,
            header,
            key,
        })
    }

    pub fn is_label_extraction(&self) -> bool {
        self.header == LABELS_COLUMN
    }
}
