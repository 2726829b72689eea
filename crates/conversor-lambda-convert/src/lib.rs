//! AWS Lambda function for converting distances in miles to kilometers.
//!
//! The handler consumes API Gateway / Function URL proxy events, reads the
//! `milhas` query parameter, and answers with a proxy-style response so the
//! caller sees `200` with `{"miles": .., "km": ..}` or `400` with
//! `{"message": ".."}`.

#![deny(warnings)]

use std::collections::HashMap;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use conversor_lib::convert;

/// Query-string portion of an API Gateway or Function URL proxy event.
///
/// Both the v1 (REST) and v2 (HTTP API) proxy formats carry the query
/// parameters under `queryStringParameters`; every other event field is
/// irrelevant to this handler and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertEvent {
    /// Decoded query parameters; absent when the request carried none.
    #[serde(default)]
    pub query_string_parameters: HashMap<String, String>,
}

/// Proxy-style response understood by API Gateway and Function URLs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTP status code returned to the caller.
    pub status_code: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Serialized JSON body.
    pub body: String,
}

impl ProxyResponse {
    /// Build a JSON response with the given status code and body.
    fn json(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }
}

/// Initialize tracing with JSON formatting for CloudWatch Logs.
///
/// Call once at the start of `main`, before `lambda_runtime::run()`. The log
/// level is controlled via `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_level(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
///
/// Malformed events degrade to the 400 failure shape instead of surfacing a
/// function error; the only `Err` path is response serialization, which the
/// payload types cannot hit.
pub async fn handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let request_id = event.context.request_id.clone();

    // An event without queryStringParameters behaves like a request without
    // the milhas parameter.
    let request: ConvertEvent = serde_json::from_value(event.payload).unwrap_or_default();
    let raw = request
        .query_string_parameters
        .get("milhas")
        .map(String::as_str);

    info!(
        request_id = %request_id,
        milhas = ?raw,
        "handling convert request"
    );

    handle_convert(raw)
}

/// Core handler logic separated for reuse in tests.
fn handle_convert(raw: Option<&str>) -> Result<ProxyResponse, Error> {
    match convert(raw) {
        Ok(distance) => Ok(ProxyResponse::json(200, serde_json::to_string(&distance)?)),
        Err(failure) => Ok(ProxyResponse::json(400, serde_json::to_string(&failure)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body_of(response: &ProxyResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    // ==================== Event Parsing Tests ====================

    #[test]
    fn parses_query_string_parameters() {
        let event = json!({
            "queryStringParameters": {"milhas": "10"},
            "rawPath": "/convert",
            "headers": {"accept": "application/json"}
        });
        let request: ConvertEvent = serde_json::from_value(event).unwrap();
        assert_eq!(
            request.query_string_parameters.get("milhas").map(String::as_str),
            Some("10")
        );
    }

    #[test]
    fn missing_query_string_defaults_to_empty() {
        let event = json!({"rawPath": "/convert"});
        let request: ConvertEvent = serde_json::from_value(event).unwrap();
        assert!(request.query_string_parameters.is_empty());
    }

    #[test]
    fn non_object_event_falls_back_to_default() {
        let request: ConvertEvent =
            serde_json::from_value(json!("not an event")).unwrap_or_default();
        assert!(request.query_string_parameters.is_empty());
    }

    // ==================== Handler Logic Tests ====================

    #[test]
    fn converts_ten_miles() {
        let response = handle_convert(Some("10")).unwrap();
        assert_eq!(response.status_code, 200);

        let body = body_of(&response);
        assert_eq!(body["miles"], 10.0);
        assert_eq!(body["km"], 16.0934);
    }

    #[test]
    fn rejects_zero() {
        let response = handle_convert(Some("0")).unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_of(&response)["message"],
            "A distancia informada (0) deve ser um valor numerico maior do que zero!"
        );
    }

    #[test]
    fn rejects_negative() {
        let response = handle_convert(Some("-5")).unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_of(&response)["message"],
            "A distancia informada (-5) deve ser um valor numerico maior do que zero!"
        );
    }

    #[test]
    fn rejects_missing_parameter() {
        let response = handle_convert(None).unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_of(&response)["message"],
            "A distancia informada () deve ser um valor numerico maior do que zero!"
        );
    }

    #[test]
    fn rejects_non_numeric() {
        let response = handle_convert(Some("abc")).unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_of(&response)["message"],
            "A distancia informada (abc) deve ser um valor numerico maior do que zero!"
        );
    }

    // ==================== Response Shape Tests ====================

    #[test]
    fn responses_carry_json_content_type() {
        let response = handle_convert(Some("1")).unwrap();
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn response_serializes_with_camel_case_status() {
        let response = handle_convert(Some("1")).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert!(json["body"].is_string());
    }
}
