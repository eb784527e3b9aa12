use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::EdgeError;

/// Merge `action` into the serialized params.
///
/// Params must be a JSON object, or serialize to `null` for calls without
/// params. `action` is inserted last and replaces any `action` field.
pub fn request_body<P: Serialize + ?Sized>(action: &str, params: &P) -> Result<Map<String, Value>, EdgeError> {
    let mut body = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(EdgeError::InvalidParams(format!(
                "params must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };
    body.insert("action".to_string(), Value::String(action.to_string()));
    Ok(body)
}

/// Turn a raw `{ data }` / `{ error }` response into `T` or the error the
/// function reported.
///
/// Only a JSON object is an envelope. An empty 2xx body means no data; an
/// `error` that is null or an empty string is ignored on 2xx.
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, EdgeError> {
    let parsed = if body.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(body))
    };

    if !status.is_success() {
        let message = match &parsed {
            Some(Ok(Value::Object(envelope))) => envelope.get("error").and_then(error_message),
            _ => None,
        }
        .unwrap_or_else(|| status_text(status));
        return Err(EdgeError::remote(status.as_u16(), message));
    }

    let mut envelope = match parsed {
        None => Map::new(),
        Some(Ok(Value::Object(envelope))) => envelope,
        Some(Ok(other)) => {
            return Err(EdgeError::Decode(serde::de::Error::custom(format!(
                "expected a response envelope object, got {}",
                json_kind(&other)
            ))))
        }
        Some(Err(e)) => return Err(EdgeError::Decode(e)),
    };

    if let Some(error) = envelope.remove("error").filter(|e| !is_blank(e)) {
        let message = error_message(&error).unwrap_or_else(|| status_text(status));
        return Err(EdgeError::remote(status.as_u16(), message));
    }

    let data = envelope.remove("data").unwrap_or(Value::Null);
    Ok(serde_json::from_value(data)?)
}

fn is_blank(error: &Value) -> bool {
    match error {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_merges_action_last() {
        let body = request_body("list", &json!({"action": "spoofed", "page": 2})).unwrap();
        assert_eq!(Value::Object(body), json!({"action": "list", "page": 2}));
    }

    #[test]
    fn unit_params_mean_action_only() {
        let body = request_body("list", &()).unwrap();
        assert_eq!(Value::Object(body), json!({"action": "list"}));
    }

    #[test]
    fn array_params_are_rejected() {
        let err = request_body("list", &json!([1, 2])).unwrap_err();
        assert!(matches!(err, EdgeError::InvalidParams(msg) if msg.contains("array")));
    }

    #[test]
    fn success_envelope_decodes_data() {
        let names: Vec<String> = decode(StatusCode::OK, r#"{"data": ["a", "b"]}"#).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn empty_success_body_decodes_as_unit() {
        let () = decode(StatusCode::NO_CONTENT, "").unwrap();
    }

    #[test]
    fn error_status_uses_body_message() {
        let err = decode::<Value>(StatusCode::BAD_REQUEST, r#"{"error": "Missing id"}"#).unwrap_err();
        assert!(matches!(err, EdgeError::Remote { status: 400, ref message } if message == "Missing id"));
    }

    #[test]
    fn error_status_falls_back_to_status_text() {
        let err = decode::<Value>(StatusCode::BAD_GATEWAY, "<html>upstream died</html>").unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = decode::<Value>(StatusCode::from_u16(599).unwrap(), "").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 599");
    }

    #[test]
    fn error_field_on_success_status_is_still_an_error() {
        let err = decode::<Value>(StatusCode::OK, r#"{"error": {"message": "quota exceeded"}}"#).unwrap_err();
        assert!(matches!(err, EdgeError::Remote { status: 200, .. }));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn array_success_body_is_not_an_envelope() {
        let err = decode::<Value>(StatusCode::OK, "[1]").unwrap_err();
        assert!(matches!(err, EdgeError::Decode(ref e) if e.to_string().contains("array")));

        let err = decode::<Value>(StatusCode::OK, r#"["a", "b"]"#).unwrap_err();
        assert!(matches!(err, EdgeError::Decode(_)));
    }

    #[test]
    fn array_error_body_falls_back_to_status_text() {
        let err = decode::<Value>(StatusCode::BAD_REQUEST, r#"["x", "boom"]"#).unwrap_err();
        assert!(matches!(err, EdgeError::Remote { status: 400, ref message } if message == "Bad Request"));
    }

    #[test]
    fn blank_error_on_success_keeps_data() {
        let value: u32 = decode(StatusCode::OK, r#"{"data": 1, "error": ""}"#).unwrap();
        assert_eq!(value, 1);
        let value: u32 = decode(StatusCode::OK, r#"{"data": 2, "error": null}"#).unwrap();
        assert_eq!(value, 2);
    }

    #[test]
    fn non_json_success_is_decode_error() {
        let err = decode::<Value>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, EdgeError::Decode(_)));
    }
}
