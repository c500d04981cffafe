//! Pulls the JSON object out of a free-form LM reply.
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no JSON object found in LM reply")]
    NoObject,
    #[error("LM reply JSON did not parse: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse the text between the first `{` and the last `}` (inclusive).
///
/// LMs often wrap the object in prose or code fences; everything outside the
/// outermost braces is ignored.
pub fn extract_first_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoObject)?;
    if end < start {
        return Err(ExtractError::NoObject);
    }
    let object = serde_json::from_str(&text[start..=end])?;
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_after_prose() {
        let payload =
            extract_first_json_object(r#"Sure! {"genre": "Jazz", "rating": 5}"#).expect("extract");
        assert_eq!(Value::Object(payload), json!({"genre": "Jazz", "rating": 5}));
    }

    #[test]
    fn object_inside_code_fence() {
        let text = "Here you go:\n```json\n{\"mood\": \"festive\", \"composers\": [\"Bach\"]}\n```\n";
        let payload = extract_first_json_object(text).expect("extract");
        assert_eq!(payload.get("mood"), Some(&json!("festive")));
        assert_eq!(payload.get("composers"), Some(&json!(["Bach"])));
    }

    #[test]
    fn nested_objects_use_outer_braces() {
        let payload =
            extract_first_json_object(r#"{"a": {"b": 1}} trailing"#).expect("extract");
        assert_eq!(Value::Object(payload), json!({"a": {"b": 1}}));
    }

    #[test]
    fn no_braces_is_no_object() {
        assert!(matches!(
            extract_first_json_object("I could not find that album."),
            Err(ExtractError::NoObject)
        ));
    }

    #[test]
    fn closing_brace_before_opening_is_no_object() {
        assert!(matches!(
            extract_first_json_object("} oops {"),
            Err(ExtractError::NoObject)
        ));
    }

    #[test]
    fn two_objects_fail_to_parse() {
        assert!(matches!(
            extract_first_json_object(r#"{"a": 1} and {"b": 2}"#),
            Err(ExtractError::Malformed(_))
        ));
    }

    #[test]
    fn truncated_object_is_malformed() {
        assert!(matches!(
            extract_first_json_object(r#"{"genre": "Jazz", "rating": }"#),
            Err(ExtractError::Malformed(_))
        ));
    }
}
