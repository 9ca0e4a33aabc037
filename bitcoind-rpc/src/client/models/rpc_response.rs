// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_response.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::{JObject, JToken};
use serde::{Deserialize, Serialize};

use crate::client::fields as typed;
use crate::error::{ClientError, ClientResult};
use crate::schema::fields;

/// One JSON-RPC response envelope.
///
/// Exactly one of `result`/`error` is meaningful, but the decoder
/// tolerates a present-but-null `result` alongside an absent `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Correlation id echoed by the node.
    pub id: JToken,

    /// Result member; JSON null when absent.
    pub result: JToken,

    /// Error member, when the node reported one.
    pub error: Option<RpcResponseError>,
}

impl RpcResponse {
    /// Decodes a response envelope. Anything that is not a single JSON
    /// object is a protocol violation.
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let obj = token
            .as_object()
            .ok_or_else(|| ClientError::protocol("response body is not a JSON object"))?;

        let id = obj.get(fields::ID).cloned().unwrap_or(JToken::Null);
        let result = obj.get(fields::RESULT).cloned().unwrap_or(JToken::Null);

        let error = match obj.get(fields::ERROR) {
            None | Some(JToken::Null) => None,
            Some(JToken::Object(map)) => Some(RpcResponseError::from_json(map)?),
            Some(other) => {
                return Err(ClientError::protocol(format!(
                    "error member has unexpected type {}",
                    other.type_name()
                )));
            }
        };

        Ok(Self { id, result, error })
    }

    /// Whether the echoed correlation id matches the request's.
    pub fn id_matches(&self, request_id: &str) -> bool {
        self.id.as_str() == Some(request_id)
    }
}

/// The node's application-level error report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Node-supplied error code, preserved verbatim.
    pub code: i32,

    /// Error message.
    pub message: String,

    /// Additional error payload.
    pub data: Option<JToken>,
}

impl RpcResponseError {
    pub fn from_json(obj: &JObject) -> ClientResult<Self> {
        let code = typed::long_field(obj, fields::CODE)? as i32;
        let message = typed::string_field(obj, fields::MESSAGE)?;
        let data = match obj.get(fields::DATA) {
            None | Some(JToken::Null) => None,
            Some(token) => Some(token.clone()),
        };
        Ok(Self {
            code,
            message,
            data,
        })
    }
}

impl From<RpcResponseError> for ClientError {
    fn from(error: RpcResponseError) -> Self {
        ClientError::Rpc {
            code: error.code,
            message: error.message,
            data: error.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_result_with_null_error_member() {
        let token = JToken::parse(r#"{"id":"X","result":125000,"error":null}"#).unwrap();
        let response = RpcResponse::from_json(&token).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.result.as_f64(), Some(125000.0));
        assert!(response.id_matches("X"));
    }

    #[test]
    fn tolerates_null_result_and_absent_error() {
        let token = JToken::parse(r#"{"id":"X","result":null}"#).unwrap();
        let response = RpcResponse::from_json(&token).unwrap();
        assert!(response.result.is_null());
        assert!(response.error.is_none());
    }

    #[test]
    fn decodes_error_envelope() {
        let token = JToken::parse(
            r#"{"id":"X","result":null,"error":{"code":-8,"message":"Block not found"}}"#,
        )
        .unwrap();
        let response = RpcResponse::from_json(&token).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -8);
        assert_eq!(error.message, "Block not found");
        assert!(error.data.is_none());
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(matches!(
            RpcResponse::from_json(&JToken::Array(vec![])),
            Err(ClientError::Protocol { .. })
        ));
    }

    #[test]
    fn rejects_scalar_error_member() {
        let token = JToken::parse(r#"{"id":"X","error":"boom"}"#).unwrap();
        assert!(matches!(
            RpcResponse::from_json(&token),
            Err(ClientError::Protocol { .. })
        ));
    }

    #[test]
    fn mismatched_id_is_detected() {
        let token = JToken::parse(r#"{"id":"other","result":1}"#).unwrap();
        let response = RpcResponse::from_json(&token).unwrap();
        assert!(!response.id_matches("X"));
    }
}
