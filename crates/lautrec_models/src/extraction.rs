//! Utilities for extracting structured data from model responses.
//!
//! Model responses often contain JSON wrapped in markdown code blocks or
//! mixed with explanatory text. This module provides extraction utilities
//! that handle the common response patterns.

use lautrec_error::{ComposeError, ComposeErrorKind, LautrecResult};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// This function tries multiple extraction strategies:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced braces: { ... }
/// 3. Balanced brackets: [ ... ]
///
/// # Errors
///
/// Returns an error if no valid JSON is found in the response.
///
/// # Examples
///
/// ```
/// use lautrec_models::extract_json;
///
/// let response = "Here's the content you requested:\n\
///     \n\
///     ```json\n\
///     {\"linkedinPost\": {\"copy\": \"Big news.\"}}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("linkedinPost"));
/// ```
pub fn extract_json(response: &str) -> LautrecResult<String> {
    // Strategy 1: Extract from markdown code blocks
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    // Strategy 2: balanced structures, whichever opens first
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );

    Err(ComposeError::new(ComposeErrorKind::NoJson(format!(
        "response length {}. Hint: ensure the prompt demands JSON-only output.",
        response.len()
    )))
    .into())
}

/// Extract content from markdown code blocks.
///
/// Looks for patterns like:
/// - ```language\n...\n```
/// - ``` ... ``` (no language specified)
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{}", language);

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found - likely truncated response
        return Some(response[content_start..].trim().to_string());
    }

    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip to next newline (in case there's a language specifier)
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to the
/// matching `close`, handling nesting and string escapes correctly.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse and validate JSON, returning a specific type.
///
/// # Errors
///
/// Returns an error if the JSON string cannot be parsed into type `T`.
///
/// # Examples
///
/// ```
/// use lautrec_models::parse_json;
/// use lautrec_core::GeneratedContent;
///
/// let json = r#"{"twitterPost": {"copy": "short", "hashtags": []}}"#;
/// let content: GeneratedContent = parse_json(json).unwrap();
/// assert!(content.twitter_post.is_some());
/// ```
pub fn parse_json<T>(json_str: &str) -> LautrecResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        ComposeError::new(ComposeErrorKind::Parse(format!("{} (JSON: {}...)", e, preview))).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_from_code_block() {
        let response = r#"
Here's the content you requested:

```json
{
  "linkedinPost": { "copy": "Big news." }
}
```

Hope this helps!
"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("\"copy\": \"Big news.\""));
    }

    #[test]
    fn test_extract_json_balanced_braces() {
        let response = r#"
Sure! Here it is: {"graphicText": {"text": "Launch day"}}
"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_extract_json_array() {
        let response = r#"
Here are the items:
[
  {"copy": "one"},
  {"copy": "two"}
]
"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn test_no_json_found() {
        let response = "This is just plain text with no JSON";
        assert!(extract_json(response).is_err());
    }

    #[test]
    fn test_extract_json_with_string_escapes() {
        let response = r#"{"text": "She said \"hello\""}"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("She said"));
    }

    #[test]
    fn test_parse_json_into_content() {
        use lautrec_core::GeneratedContent;

        let json = r#"{"facebookPost": {"copy": "hi", "hashtags": ["#launch"]}}"#;
        let content: GeneratedContent = parse_json(json).unwrap();
        assert_eq!(content.facebook_post.unwrap().hashtags, ["#launch"]);
    }

    #[test]
    fn test_parse_json_reports_parse_kind() {
        use lautrec_core::GeneratedContent;
        use lautrec_error::LautrecErrorKind;

        let err = parse_json::<GeneratedContent>("{not json").unwrap_err();
        assert!(matches!(err.kind(), LautrecErrorKind::Compose(_)));
    }
}
