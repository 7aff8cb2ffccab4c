//! Front-matter splitting and decoding
//!
//! A front-matter block is a `---` delimiter line, a body of YAML, and a
//! closing `---` delimiter line. Splitting never fails: input without a
//! well-formed block comes back untouched as content. Decoding fails only
//! on YAML syntax errors inside a correctly delimited block.

use crate::content::value::{convert_mapping, Metadata};
use crate::error::Error;

/// The delimiter marking both ends of a front-matter block
const DELIMITER: &str = "---";

/// Split raw file text into `(raw_metadata, content)`
///
/// Both halves are subslices of the input. A block opens only when the text
/// starts with `---` followed directly by a line break, and closes at the
/// first `\n---` after it. Absent or unterminated blocks yield
/// `("", raw)` unchanged.
pub fn split(raw: &str) -> (&str, &str) {
    let Some(rest) = raw.strip_prefix(DELIMITER) else {
        return ("", raw);
    };
    if !rest.starts_with('\n') && !rest.starts_with("\r\n") {
        // "---" glued to other text on the first line is content, not a block
        return ("", raw);
    }

    // The search covers the opening line break itself, so an empty block
    // ("---\n---") closes on that same break.
    let Some(end) = rest.find("\n---") else {
        return ("", raw);
    };
    let metadata = rest[..end].trim();

    let after_close = &rest[end + 1 + DELIMITER.len()..];
    let content = if let Some(stripped) = after_close.strip_prefix("\r\n") {
        stripped
    } else if let Some(stripped) = after_close.strip_prefix('\n') {
        stripped
    } else {
        // Closing delimiter glued to content: nothing to strip
        after_close
    };

    (metadata, content)
}

/// Decode raw front-matter text into an ordered metadata mapping
///
/// Empty input and YAML documents whose root is not a mapping both decode
/// to an empty mapping. Malformed YAML is an [`Error::Decode`], so callers
/// can still tell "no front-matter" from "broken front-matter".
pub fn decode(raw: &str) -> Result<Metadata, Error> {
    if raw.trim().is_empty() {
        return Ok(Metadata::new());
    }
    let doc: serde_yaml::Value = serde_yaml::from_str(raw)?;
    match doc {
        serde_yaml::Value::Mapping(map) => Ok(convert_mapping(map)),
        other => {
            tracing::debug!(
                "front-matter root is not a mapping ({}), ignoring",
                variant_name(&other)
            );
            Ok(Metadata::new())
        }
    }
}

/// Split and decode in one step, returning `(metadata, content)`
pub fn parse(raw: &str) -> Result<(Metadata, &str), Error> {
    let (raw_metadata, content) = split(raw);
    let metadata = decode(raw_metadata)?;
    Ok((metadata, content))
}

fn variant_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}
