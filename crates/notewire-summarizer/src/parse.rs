//! Tolerant extraction of structured data from free-form model output.

use regex::Regex;
use serde_json::{Map, Value};

use crate::links::validate_links;

/// Extract a JSON object from a model response.
///
/// Tier 1 parses the whole string; tier 2 parses the first-`{`-to-last-`}`
/// span, which covers fenced code blocks and prose-wrapped objects; tier 3 is
/// an empty map. Never fails — callers treat every field as optional.
///
/// A `key_points` array in the parsed object is passed through link
/// validation in place.
pub fn parse_model_response(raw: &str) -> Map<String, Value> {
    let mut parsed = parse_tiers(raw);

    if let Some(Value::Array(points)) = parsed.get("key_points") {
        let entries: Vec<String> = points
            .iter()
            .filter_map(|p| p.as_str().map(str::to_string))
            .collect();
        let validated = validate_links(&entries);
        parsed.insert(
            "key_points".to_string(),
            Value::Array(validated.into_iter().map(Value::String).collect()),
        );
    }

    parsed
}

fn parse_tiers(raw: &str) -> Map<String, Value> {
    // Tier 1: the whole response is the object
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        return map;
    }

    // Tier 2: first-to-last brace span, greedy
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return map;
            }
        }
    }

    Map::new()
}

/// Remove bracketed citation markers (`[1]`, `[23]`) a web-search-style model
/// leaves inline.
pub fn strip_citations(text: &str) -> String {
    let citation_pattern = Regex::new(r"\s*\[\d+\]").unwrap();
    citation_pattern.replace_all(text, "").to_string()
}

/// String field of a parsed response, if present and non-empty.
pub(crate) fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Array-of-strings field of a parsed response, or empty.
pub(crate) fn string_list(map: &Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
