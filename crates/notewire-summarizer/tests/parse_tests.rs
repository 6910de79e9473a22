use notewire_summarizer::{parse_model_response, strip_citations, validate_links};
use serde_json::json;

#[test]
fn test_parse_direct_json() {
    let raw = r#"{
        "title": "Test Article Title",
        "summary": "A test summary of the content.",
        "key_points": ["First point", "Second point", "Third point"],
        "author": "Test Author"
    }"#;

    let parsed = parse_model_response(raw);

    assert_eq!(parsed["title"], "Test Article Title");
    assert_eq!(parsed["author"], "Test Author");
    assert_eq!(parsed["key_points"].as_array().unwrap().len(), 3);
}

#[test]
fn test_parse_markdown_fenced_json() {
    let raw = "Here is the analysis you asked for:\n```json\n{\"title\": \"Wrapped JSON Title\", \"key_points\": [\"a\", \"b\"]}\n```\nLet me know if you need more.";

    let parsed = parse_model_response(raw);

    assert_eq!(parsed["title"], "Wrapped JSON Title");
    assert_eq!(parsed["key_points"].as_array().unwrap().len(), 2);

    // Fencing and surrounding prose change nothing about the result
    let bare = parse_model_response(
        r#"{"title": "Wrapped JSON Title", "key_points": ["a", "b"]}"#,
    );
    assert_eq!(parsed, bare);
}

#[test]
fn test_parse_prose_wrapped_json() {
    let raw = "Sure! {\"title\": \"Extractable Title\", \"summary\": \"this can still be extracted\"} Hope that helps.";

    let parsed = parse_model_response(raw);

    assert_eq!(parsed["title"], "Extractable Title");
    assert_eq!(parsed["summary"], "this can still be extracted");
}

#[test]
fn test_parse_no_json_returns_empty() {
    let raw = "This has no JSON at all, just plain text.";
    assert!(parse_model_response(raw).is_empty());
}

#[test]
fn test_parse_malformed_json_returns_empty() {
    let raw = "{\"title\": \"broken";
    assert!(parse_model_response(raw).is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let raw = r#"{"title": "T", "key_points": ["one", "two"]}"#;
    assert_eq!(parse_model_response(raw), parse_model_response(raw));
}

#[test]
fn test_parse_validates_key_point_links() {
    let raw = r#"{
        "title": "T",
        "key_points": [
            "Safe [link](https://example.com)",
            "Unsafe [click](javascript:stealCookies)"
        ]
    }"#;

    let parsed = parse_model_response(raw);
    let points = parsed["key_points"].as_array().unwrap();

    assert_eq!(points[0], json!("Safe [link](https://example.com)"));
    assert_eq!(points[1], json!("Unsafe click"));
}

#[test]
fn test_validate_links_keeps_http_https() {
    let key_points = vec![
        "Point with http link [->](http://example.com)".to_string(),
        "Point with https link [->](https://secure.example.com/page)".to_string(),
    ];
    let result = validate_links(&key_points);

    assert!(result[0].contains("[->](http://example.com)"));
    assert!(result[1].contains("[->](https://secure.example.com/page)"));
}

#[test]
fn test_validate_links_removes_invalid_schemes() {
    let key_points = vec![
        "Bad link [click](javascript:alert(1))".to_string(),
        "Data link [img](data:image/png;base64,xxx)".to_string(),
    ];
    let result = validate_links(&key_points);

    assert!(!result[0].contains("javascript:"));
    assert!(!result[1].contains("data:"));
    // Link text survives, syntax does not
    assert!(result[0].contains("Bad link"));
    assert!(result[0].contains("click"));
    assert!(result[1].contains("img"));
}

#[test]
fn test_validate_links_keeps_relative_anchor_mailto() {
    let key_points = vec![
        "Relative link [page](/other/page)".to_string(),
        "Anchor link [section](#heading)".to_string(),
        "Mailto link [email](mailto:test@example.com)".to_string(),
    ];
    let result = validate_links(&key_points);

    assert!(result[0].contains("[page](/other/page)"));
    assert!(result[1].contains("[section](#heading)"));
    assert!(result[2].contains("[email](mailto:test@example.com)"));
}

#[test]
fn test_validate_links_preserves_length_and_order() {
    let key_points = vec![
        "first [a](ftp://bad)".to_string(),
        "second".to_string(),
        "third [b](https://ok.example)".to_string(),
    ];
    let result = validate_links(&key_points);

    assert_eq!(result.len(), key_points.len());
    assert!(result[0].starts_with("first"));
    assert_eq!(result[1], "second");
    assert!(result[2].starts_with("third"));
}

#[test]
fn test_strip_citations() {
    assert_eq!(
        strip_citations("Rust is fast [1] and safe [23]."),
        "Rust is fast and safe."
    );
    assert_eq!(strip_citations("No citations here"), "No citations here");
}
