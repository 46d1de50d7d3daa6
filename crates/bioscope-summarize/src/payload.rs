//! Tagged summarization response payload.

use serde_json::Value;

/// A summarization response as received from the collaborator: either a
/// plain string or a structured object. This replaces ad hoc shape
/// probing with one explicit normalization step to a display string.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryPayload {
    Text(String),
    Structured(Value),
}

impl SummaryPayload {
    /// Classify a raw JSON value.
    ///
    /// A string becomes `Text`, as does an object exposing a string
    /// `content` field; any other shape stays `Structured` and is
    /// serialized for display as a fallback.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Object(ref map) => match map.get("content") {
                Some(Value::String(content)) => Self::Text(content.clone()),
                _ => Self::Structured(value),
            },
            other => Self::Structured(other),
        }
    }

    /// Render the payload to a user-displayable string.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Structured(v) => {
                serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload() {
        let p = SummaryPayload::from_value(json!("a summary"));
        assert_eq!(p, SummaryPayload::Text("a summary".to_string()));
        assert_eq!(p.render(), "a summary");
    }

    #[test]
    fn test_object_with_content_field() {
        let p = SummaryPayload::from_value(json!({"content": "the text", "model": "g"}));
        assert_eq!(p.render(), "the text");
    }

    #[test]
    fn test_object_with_non_string_content_is_structured() {
        let p = SummaryPayload::from_value(json!({"content": 42}));
        assert!(matches!(p, SummaryPayload::Structured(_)));
    }

    #[test]
    fn test_other_shapes_render_as_json() {
        let p = SummaryPayload::from_value(json!([1, 2, 3]));
        assert!(matches!(p, SummaryPayload::Structured(_)));
        assert!(p.render().contains('1'));
    }

    #[test]
    fn test_null_is_structured() {
        let p = SummaryPayload::from_value(Value::Null);
        assert_eq!(p.render(), "null");
    }
}
