// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_request.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::{JObject, JToken};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::schema::{self, fields};

/// One JSON-RPC request envelope.
///
/// The correlation id is a fresh v4 uuid per envelope, never reused and
/// never persisted; it exists solely to pair the request with its reply
/// inside one synchronous call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version, always "2.0".
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Method name.
    pub method: String,

    /// Positional parameters; `None` encodes as JSON null.
    pub params: Option<Vec<JToken>>,

    /// Correlation id.
    pub id: String,
}

impl RpcRequest {
    /// Builds an envelope with a fresh correlation id.
    pub fn new(method: &str, params: Option<Vec<JToken>>) -> Self {
        Self {
            json_rpc: schema::PROTOCOL_VERSION.to_string(),
            method: method.to_string(),
            params,
            id: Uuid::new_v4().to_string(),
        }
    }

    /// Converts to the wire JSON object.
    #[must_use]
    pub fn to_json(&self) -> JToken {
        let mut json = JObject::new();
        json.insert(
            fields::JSONRPC.to_string(),
            JToken::String(self.json_rpc.clone()),
        );
        json.insert(
            fields::METHOD.to_string(),
            JToken::String(self.method.clone()),
        );
        let params = match &self.params {
            Some(items) => JToken::Array(items.clone()),
            None => JToken::Null,
        };
        json.insert(fields::PARAMS.to_string(), params);
        json.insert(fields::ID.to_string(), JToken::String(self.id.clone()));
        JToken::Object(json)
    }

    /// Serializes the envelope to request-body bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_json().to_bytes()
    }

    /// Decodes a request envelope. This is the request-side decode path,
    /// distinct from response decoding.
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let obj = token
            .as_object()
            .ok_or_else(|| ClientError::protocol("request envelope is not a JSON object"))?;

        let json_rpc = obj
            .get(fields::JSONRPC)
            .and_then(JToken::as_str)
            .ok_or_else(|| ClientError::protocol("request envelope missing 'jsonrpc'"))?
            .to_string();
        let method = obj
            .get(fields::METHOD)
            .and_then(JToken::as_str)
            .ok_or_else(|| ClientError::protocol("request envelope missing 'method'"))?
            .to_string();
        let id = obj
            .get(fields::ID)
            .and_then(JToken::as_str)
            .ok_or_else(|| ClientError::protocol("request envelope missing 'id'"))?
            .to_string();

        let params = match obj.get(fields::PARAMS) {
            None | Some(JToken::Null) => None,
            Some(JToken::Array(items)) => Some(items.clone()),
            Some(other) => {
                return Err(ClientError::type_mismatch(
                    fields::PARAMS,
                    "array",
                    other.type_name(),
                ));
            }
        };

        Ok(Self {
            json_rpc,
            method,
            params,
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::methods;

    #[test]
    fn envelope_shape_with_null_params() {
        let request = RpcRequest::new(methods::GET_BLOCK_COUNT, None);
        let json = request.to_json();
        assert_eq!(json.get("jsonrpc").unwrap().as_str(), Some("2.0"));
        assert_eq!(
            json.get("method").unwrap().as_str(),
            Some("getblockcount")
        );
        assert!(json.get("params").unwrap().is_null());
        assert_eq!(json.get("id").unwrap().as_str(), Some(request.id.as_str()));
    }

    #[test]
    fn fresh_id_per_envelope() {
        let first = RpcRequest::new(methods::GET_INFO, None);
        let second = RpcRequest::new(methods::GET_INFO, None);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn round_trip_recovers_method_and_params() {
        let request = RpcRequest::new(
            methods::GET_BLOCK,
            Some(vec![JToken::String("00000000abc".into())]),
        );
        let decoded = RpcRequest::from_json(&request.to_json()).unwrap();
        assert_eq!(decoded.method, request.method);
        assert_eq!(decoded.params, request.params);
        assert_eq!(decoded.id, request.id);
        assert_eq!(decoded.json_rpc, request.json_rpc);
    }

    #[test]
    fn round_trip_preserves_null_params() {
        let request = RpcRequest::new(methods::GET_BLOCK_COUNT, None);
        let decoded = RpcRequest::from_json(&request.to_json()).unwrap();
        assert!(decoded.params.is_none());
    }

    #[test]
    fn decode_rejects_non_object() {
        assert!(matches!(
            RpcRequest::from_json(&JToken::String("x".into())),
            Err(ClientError::Protocol { .. })
        ));
    }
}
