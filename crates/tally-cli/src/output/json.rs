use std::io;

use serde::Serialize;
use serde_json::json;
use tally_client::{ClientError, SuccessEnvelope};

const JSON_VERSION: &str = "v1";

/// Every statistics payload shares one machine-readable envelope shape.
pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let payload = json!({
        "ok": true,
        "version": JSON_VERSION,
        "command": success.command,
        "data": success.data,
    });
    serialize_json_pretty(&payload)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use tally_client::{ClientError, SuccessEnvelope};

    use super::{render_error_json, render_success_json};

    #[test]
    fn success_json_uses_universal_envelope() {
        let payload = SuccessEnvelope {
            ok: true,
            command: "stats heatmap".to_string(),
            version: "0.1.0".to_string(),
            data: json!({"total_spending": 50000, "category_count": 3}),
        };

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["command"], Value::String("stats heatmap".to_string()));
                assert_eq!(value["data"]["total_spending"], json!(50000));
            }
        }
    }

    #[test]
    fn error_json_carries_code_and_recovery_steps() {
        let error = ClientError::scope_not_found("category", "nope");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("scope_not_found".to_string())
                );
                assert!(value.get("ok").is_none());
                assert!(value["error"]["recovery_steps"].is_array());
            }
        }
    }
}
