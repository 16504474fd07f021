use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::{ExtractorError, Result};

/// Marker identifying the script block that bootstraps the page.
const DATA_MARKER: &str = "var ytInitialData";

/// Assignment prefix the object literal follows inside that block.
const ASSIGNMENT_MARKER: &str = "var ytInitialData = ";

/// Locate and deserialize the initial-data payload embedded in a page.
///
/// Only the first script block containing the marker is considered. The
/// object literal after the assignment marker is sliced out up to its
/// balancing close brace and must deserialize as a whole; there is no
/// partial or fallback dataset.
pub fn extract_initial_data(html: &str) -> Result<Value> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script").unwrap();

    let script = document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .find(|text| text.contains(DATA_MARKER))
        .ok_or(ExtractorError::PayloadNotFound)?;

    let literal = slice_object_literal(&script)?;
    Ok(serde_json::from_str(literal)?)
}

/// Slice the balanced `{...}` that follows the assignment marker.
///
/// The scan is string- and escape-aware so braces inside JSON strings do not
/// affect nesting depth.
fn slice_object_literal(script: &str) -> Result<&str> {
    let start = script
        .find(ASSIGNMENT_MARKER)
        .map(|pos| pos + ASSIGNMENT_MARKER.len())
        .ok_or(ExtractorError::PayloadNotFound)?;

    let rest = &script[start..];
    if !rest.starts_with('{') {
        return Err(ExtractorError::PayloadNotFound);
    }

    let mut depth = 0u32;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&rest[..=i]);
                }
            }
            _ => {}
        }
    }

    // Ran off the end of the script without closing the object.
    Err(ExtractorError::PayloadNotFound)
}
