// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_script.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::{JObject, JToken};
use serde::{Deserialize, Serialize};

use crate::client::fields;
use crate::error::{ClientError, ClientResult};
use crate::schema::fields as names;

/// A decoded script: `scriptSig` on inputs, or the structured form of a
/// `scriptPubKey` on outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcScript {
    /// Script assembly.
    pub asm: String,

    /// Script bytes, hex-encoded.
    pub hex: String,

    /// Required signature count.
    pub req_sigs: i64,

    /// Script classification, e.g. "pubkeyhash".
    pub script_type: String,

    /// Addresses the script pays to.
    pub addresses: Vec<String>,
}

impl RpcScript {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "script")? else {
            return Ok(Self::default());
        };
        Self::from_object(obj)
    }

    pub(crate) fn from_object(obj: &JObject) -> ClientResult<Self> {
        Ok(Self {
            asm: fields::string_field(obj, names::ASM)?,
            hex: fields::string_field(obj, names::HEX)?,
            req_sigs: fields::long_field(obj, names::REQ_SIGS)?,
            script_type: fields::string_field(obj, names::TYPE)?,
            addresses: fields::string_array_field(obj, names::ADDRESSES)?,
        })
    }
}

/// A transaction output's public-key script.
///
/// Depending on the node version the field arrives either as a plain hex
/// string or as a decoded object, so the variant is decided by the
/// runtime JSON type, not by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpcScriptPubKey {
    /// Raw hex script, as older nodes emit.
    Raw(String),

    /// Fully decoded script.
    Structured(RpcScript),
}

impl Default for RpcScriptPubKey {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl RpcScriptPubKey {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        match token {
            JToken::Null => Ok(Self::default()),
            JToken::String(raw) => Ok(Self::Raw(raw.clone())),
            JToken::Object(obj) => Ok(Self::Structured(RpcScript::from_object(obj)?)),
            other => Err(ClientError::type_mismatch(
                names::SCRIPT_PUB_KEY,
                "string or object",
                other.type_name(),
            )),
        }
    }
}
