//! The mapper contract, enforced across every domain record: JSON null
//! decodes to the zero-value record, and a value of the wrong JSON type
//! fails with a type mismatch instead of being coerced.

use bitcoind_json::JToken;
use bitcoind_rpc::models::{
    RpcAccount, RpcAddedNode, RpcAddedNodeAddress, RpcAddress, RpcBlock, RpcBlockTemplate,
    RpcCoinbase, RpcLastBlock, RpcMiningInfo, RpcNodeInfo, RpcOutputSetInfo, RpcPeer,
    RpcRawTransaction, RpcScript, RpcScriptPubKey, RpcTemplateTransaction, RpcTransaction,
    RpcTransactionDetail, RpcTransactionInput, RpcTransactionOutput, RpcWork,
};
use bitcoind_rpc::{ClientError, ClientResult};

fn assert_mapper_contract<T>(map: fn(&JToken) -> ClientResult<T>)
where
    T: Default + PartialEq + std::fmt::Debug,
{
    assert_eq!(map(&JToken::Null).unwrap(), T::default());
    assert!(matches!(
        map(&JToken::Number(3.0)),
        Err(ClientError::TypeMismatch { .. })
    ));
    assert!(matches!(
        map(&JToken::Boolean(true)),
        Err(ClientError::TypeMismatch { .. })
    ));
}

#[test]
fn every_record_mapper_honors_the_contract() {
    assert_mapper_contract(RpcAccount::from_json);
    assert_mapper_contract(RpcAddress::from_json);
    assert_mapper_contract(RpcBlock::from_json);
    assert_mapper_contract(RpcPeer::from_json);
    assert_mapper_contract(RpcMiningInfo::from_json);
    assert_mapper_contract(RpcNodeInfo::from_json);
    assert_mapper_contract(RpcTransaction::from_json);
    assert_mapper_contract(RpcTransactionDetail::from_json);
    assert_mapper_contract(RpcRawTransaction::from_json);
    assert_mapper_contract(RpcTransactionInput::from_json);
    assert_mapper_contract(RpcTransactionOutput::from_json);
    assert_mapper_contract(RpcScript::from_json);
    assert_mapper_contract(RpcOutputSetInfo::from_json);
    assert_mapper_contract(RpcLastBlock::from_json);
    assert_mapper_contract(RpcWork::from_json);
    assert_mapper_contract(RpcBlockTemplate::from_json);
    assert_mapper_contract(RpcTemplateTransaction::from_json);
    assert_mapper_contract(RpcCoinbase::from_json);
    assert_mapper_contract(RpcAddedNode::from_json);
    assert_mapper_contract(RpcAddedNodeAddress::from_json);
}

#[test]
fn script_pub_key_accepts_both_wire_shapes() {
    // The tagged union takes strings and objects; everything else is a
    // mismatch, and null falls back to the empty raw form.
    assert_eq!(
        RpcScriptPubKey::from_json(&JToken::Null).unwrap(),
        RpcScriptPubKey::default()
    );
    assert!(matches!(
        RpcScriptPubKey::from_json(&JToken::Number(3.0)),
        Err(ClientError::TypeMismatch { .. })
    ));
    assert!(matches!(
        RpcScriptPubKey::from_json(&JToken::String("76a9".into())).unwrap(),
        RpcScriptPubKey::Raw(_)
    ));
}

#[test]
fn absent_nested_collections_decode_empty() {
    let block = RpcBlock::from_json(&JToken::parse(r#"{"hash":"aa"}"#).unwrap()).unwrap();
    assert!(block.tx.is_empty());

    let tx = RpcTransaction::from_json(&JToken::parse(r#"{"txid":"bb"}"#).unwrap()).unwrap();
    assert!(tx.details.is_empty());

    let raw = RpcRawTransaction::from_json(&JToken::parse(r#"{"txid":"cc"}"#).unwrap()).unwrap();
    assert!(raw.vin.is_empty());
    assert!(raw.vout.is_empty());
}
