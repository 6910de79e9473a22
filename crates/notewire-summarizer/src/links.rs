//! Markdown link sanitization for untrusted model output.

use regex::{Captures, Regex};

/// Schemes and prefixes a model-produced link may carry.
const ALLOWED_PREFIXES: &[&str] = &["http://", "https://", "/", "#", "mailto:"];

/// Strip markdown links whose target is not whitelisted.
///
/// `[text](javascript:...)` collapses to bare `text`; whitelisted links pass
/// through untouched. Entry count and order are preserved, and nothing but
/// link syntax is altered. This guards against link injection (`javascript:`,
/// `data:` and friends) from untrusted model output.
pub fn validate_links(points: &[String]) -> Vec<String> {
    let link_pattern = Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap();

    points
        .iter()
        .map(|point| {
            link_pattern
                .replace_all(point, |caps: &Captures| {
                    let text = &caps[1];
                    let url = caps[2].trim();
                    if ALLOWED_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
                        caps[0].to_string()
                    } else {
                        text.to_string()
                    }
                })
                .into_owned()
        })
        .collect()
}
