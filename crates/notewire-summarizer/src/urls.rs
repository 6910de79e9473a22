//! URL detection and routing

use notewire_types::UrlType;
use regex::Regex;
use std::collections::HashSet;

/// Sentence punctuation that gets swept up when a URL sits at the end of a
/// sentence.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '\'', '"'];

/// Map a URL to the backend that should handle it.
///
/// Total over arbitrary input: thread patterns win over video patterns, and
/// anything that matches neither is an article, including strings that are
/// not URLs at all.
pub fn classify(url: &str) -> UrlType {
    let thread_patterns = [
        r"^https?://(www\.)?(twitter\.com|x\.com)/\w+/status/\d+",
        r"^https?://(www\.)?(twitter\.com|x\.com)/\w+",
    ];

    let video_patterns = [
        r"^https?://(www\.)?(youtube\.com|youtu\.be)/",
        r"^https?://m\.youtube\.com/",
    ];

    for pattern in thread_patterns {
        if Regex::new(pattern).unwrap().is_match(url) {
            return UrlType::Thread;
        }
    }

    for pattern in video_patterns {
        if Regex::new(pattern).unwrap().is_match(url) {
            return UrlType::Video;
        }
    }

    UrlType::Article
}

/// First URL in free text, trailing sentence punctuation stripped.
pub fn extract_url(text: &str) -> Option<String> {
    let url_pattern = Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).unwrap();
    let matched = url_pattern.find(text)?.as_str();
    let trimmed = matched.trim_end_matches(TRAILING_PUNCTUATION);

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Embedded video references inside fetched thread content.
///
/// Recognizes canonical watch-URLs and short-links, returns them in
/// first-seen order, deduplicated by a key that ignores the scheme and a
/// leading `www.`.
pub fn find_embedded_videos(content: &str) -> Vec<String> {
    let video_pattern = Regex::new(
        r#"https?://(?:www\.|m\.)?(?:youtube\.com/watch\?v=[\w-]+[^\s<>")\]]*|youtu\.be/[\w-]+[^\s<>")\]]*)"#,
    )
    .unwrap();

    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for m in video_pattern.find_iter(content) {
        let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        let key = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.")
            .to_string();
        if seen.insert(key) {
            found.push(url.to_string());
        }
    }

    found
}
