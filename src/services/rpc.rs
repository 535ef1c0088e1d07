use serde::Serialize;
use serde_json::Value;

use crate::config::{ClientConfig, JSONRPC_VERSION};
use crate::error::{SearchError, SearchResult};
use crate::models::RpcRequest;

/// Encode a JSON-RPC envelope for `method`
pub fn encode_request<P: Serialize>(
    config: &ClientConfig,
    method: &str,
    params: Option<P>,
) -> SearchResult<Vec<u8>> {
    let request = RpcRequest {
        jsonrpc: JSONRPC_VERSION,
        id: &config.request_id,
        method,
        params,
    };

    Ok(serde_json::to_vec(&request)?)
}

/// Fail with the upstream error if the decoded body carries an `error` field,
/// otherwise hand the body back unchanged.
pub fn check_for_errors(body: Value) -> SearchResult<Value> {
    if let Some(error) = body.get("error") {
        let err = SearchError::from_rpc_error(error);
        tracing::warn!("Search4Faces API returned error: {}", err);
        return Err(err);
    }

    Ok(body)
}

/// Take the `result` member out of a successful reply
pub fn into_result(body: Value, method: &str) -> SearchResult<Value> {
    match body {
        Value::Object(mut obj) => obj
            .remove("result")
            .ok_or_else(|| SearchError::invalid_response(format!("Missing result in {} response", method))),
        _ => Err(SearchError::invalid_response(format!("{} response is not an object", method))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_is_rejected() {
        let err = check_for_errors(json!({
            "jsonrpc": "2.0",
            "id": "some-id",
            "error": {"code": -32000, "message": "Token not found"}
        }))
        .unwrap_err();

        assert_eq!(err.to_string(), "[-32000] API Exception: Token not found");
    }

    #[test]
    fn test_success_body_passes_through() {
        let body = json!({"jsonrpc": "2.0", "id": "some-id", "result": {"left": 5}});
        assert_eq!(check_for_errors(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_envelope_fields() {
        let config = ClientConfig::new("t");
        let bytes = encode_request(&config, "detectFaces", Some(json!({"image": "aGk="}))).unwrap();
        let envelope: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            envelope,
            json!({
                "jsonrpc": "2.0",
                "id": "some-id",
                "method": "detectFaces",
                "params": {"image": "aGk="}
            })
        );
    }

    #[test]
    fn test_missing_result() {
        assert!(matches!(
            into_result(json!({"jsonrpc": "2.0"}), "searchFace"),
            Err(SearchError::InvalidResponse(_))
        ));
        assert_eq!(into_result(json!({"result": 1}), "rateLimit").unwrap(), json!(1));
    }
}
