use crate::auth::errors::GENERIC_ERROR_MESSAGE;
use serde::Deserialize;
use serde_json::Value;

/// Error payload returned by the Moivon API on failed requests.
///
/// The `error` field has no fixed shape: it may be a list of field→message
/// objects, a plain string, absent, or anything else. Decoding never
/// fails; unknown shapes fall through to [`ErrorDetail::Other`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Field validation errors, e.g. `[{"email": "Email not found"}]`.
    Fields(Vec<serde_json::Map<String, Value>>),
    /// A plain message, shown verbatim.
    Message(String),
    /// Any other JSON shape; treated as unusable.
    Other(Value),
}

impl ErrorBody {
    pub fn empty() -> Self {
        Self { error: None }
    }

    /// Derive the user-facing message.
    ///
    /// Priority: first value of the first field-error object (in wire
    /// order), then the verbatim string, then the generic fallback.
    pub fn user_message(&self) -> String {
        match &self.error {
            Some(ErrorDetail::Fields(fields)) => fields
                .first()
                .and_then(|object| object.values().next())
                .and_then(|value| value.as_str().map(str::to_string))
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            Some(ErrorDetail::Message(message)) => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ErrorBody {
        serde_json::from_str(json).expect("error body should always decode")
    }

    #[test]
    fn test_field_error_list_uses_first_value_of_first_object() {
        let body = body(r#"{"error": [{"email": "Email not found"}]}"#);
        assert_eq!(body.user_message(), "Email not found");
    }

    #[test]
    fn test_field_error_list_ignores_later_entries() {
        let body = body(
            r#"{"error": [{"password": "Password too short", "email": "ignored"}, {"email": "also ignored"}]}"#,
        );
        assert_eq!(body.user_message(), "Password too short");
    }

    #[test]
    fn test_plain_string_error_is_verbatim() {
        let body = body(r#"{"error": "Account locked"}"#);
        assert_eq!(body.user_message(), "Account locked");
    }

    #[test]
    fn test_missing_error_falls_back_to_generic() {
        let body = body(r#"{"data": null}"#);
        assert_eq!(body.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_unusable_error_shape_falls_back_to_generic() {
        let body = body(r#"{"error": {"code": 500}}"#);
        assert_eq!(body.user_message(), GENERIC_ERROR_MESSAGE);

        let body = self::body(r#"{"error": 42}"#);
        assert_eq!(body.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_empty_field_list_falls_back_to_generic() {
        let body = body(r#"{"error": []}"#);
        assert_eq!(body.user_message(), GENERIC_ERROR_MESSAGE);

        let body = self::body(r#"{"error": [{}]}"#);
        assert_eq!(body.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_non_string_first_value_falls_back_to_generic() {
        let body = body(r#"{"error": [{"email": 123}]}"#);
        assert_eq!(body.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
