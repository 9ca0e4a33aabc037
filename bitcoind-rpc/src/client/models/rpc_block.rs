// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// rpc_block.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use bitcoind_json::JToken;
use serde::{Deserialize, Serialize};

use crate::client::fields;
use crate::error::ClientResult;
use crate::schema::fields as names;

/// A verbose `getblock` result.
///
/// Also the payload delivered for block notifications; a degraded
/// notification carries only `hash`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcBlock {
    /// Block hash.
    pub hash: String,

    /// Confirmations; 0 when unknown.
    pub confirmations: i64,

    /// Serialized block size in bytes.
    pub size: i64,

    /// Height in the main chain.
    pub height: i64,

    /// Block version.
    pub version: i64,

    /// Merkle root hash.
    pub merkle_root: String,

    /// Transaction ids in block order.
    pub tx: Vec<String>,

    /// Block timestamp.
    pub time: i64,

    /// Nonce.
    pub nonce: i64,

    /// Compact difficulty target.
    pub bits: String,

    /// Difficulty as reported by the node.
    pub difficulty: f64,

    /// Hash of the previous block.
    pub previous_block_hash: String,

    /// Hash of the next block, empty at the tip.
    pub next_block_hash: String,
}

impl RpcBlock {
    pub fn from_json(token: &JToken) -> ClientResult<Self> {
        let Some(obj) = fields::expect_object(token, "block")? else {
            return Ok(Self::default());
        };
        Ok(Self {
            hash: fields::string_field(obj, names::HASH)?,
            confirmations: fields::long_field(obj, names::CONFIRMATIONS)?,
            size: fields::long_field(obj, names::SIZE)?,
            height: fields::long_field(obj, names::HEIGHT)?,
            version: fields::long_field(obj, names::VERSION)?,
            merkle_root: fields::string_field(obj, names::MERKLE_ROOT)?,
            tx: fields::string_array_field(obj, names::TX)?,
            time: fields::long_field(obj, names::TIME)?,
            nonce: fields::long_field(obj, names::NONCE)?,
            bits: fields::string_field(obj, names::BITS)?,
            difficulty: fields::double_field(obj, names::DIFFICULTY)?,
            previous_block_hash: fields::string_field(obj, names::PREVIOUS_BLOCK_HASH)?,
            next_block_hash: fields::string_field(obj, names::NEXT_BLOCK_HASH)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    const SAMPLE: &str = r#"{
        "hash": "00000000839a8e6886ab5951d76f411475428afc90947ee320161bbf18eb6048",
        "confirmations": 125123,
        "size": 215,
        "height": 1,
        "version": 1,
        "merkleroot": "0e3e2357e806b6cdb1f70b54c3a3a17b6714ee1f0e68bebb44a74b1efd512098",
        "tx": ["0e3e2357e806b6cdb1f70b54c3a3a17b6714ee1f0e68bebb44a74b1efd512098"],
        "time": 1231469665,
        "nonce": 2573394689,
        "bits": "1d00ffff",
        "difficulty": 1.0,
        "previousblockhash": "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
        "nextblockhash": "000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd"
    }"#;

    #[test]
    fn decodes_verbose_block() {
        let block = RpcBlock::from_json(&JToken::parse(SAMPLE).unwrap()).unwrap();
        assert_eq!(block.height, 1);
        assert_eq!(block.tx.len(), 1);
        assert_eq!(block.bits, "1d00ffff");
        assert_eq!(block.difficulty, 1.0);
        assert_eq!(
            block.next_block_hash,
            "000000006a625f06636b8bb6ac7b960a8d03705d1ace08b1a19da3fdcc99ddbd"
        );
    }

    #[test]
    fn null_decodes_to_zero_value() {
        let block = RpcBlock::from_json(&JToken::Null).unwrap();
        assert_eq!(block, RpcBlock::default());
    }

    #[test]
    fn tip_block_has_empty_next_hash() {
        let token = JToken::parse(r#"{"hash":"aa","height":9}"#).unwrap();
        let block = RpcBlock::from_json(&token).unwrap();
        assert_eq!(block.next_block_hash, "");
        assert_eq!(block.confirmations, 0);
    }

    #[test]
    fn non_object_is_a_mismatch() {
        assert!(matches!(
            RpcBlock::from_json(&JToken::String("00ff".into())),
            Err(ClientError::TypeMismatch { .. })
        ));
    }
}
