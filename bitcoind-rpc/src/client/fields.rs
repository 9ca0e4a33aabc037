// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// fields.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed extraction helpers shared by every domain mapper.
//!
//! The node omits fields freely between versions, so an absent or null
//! member decodes to its documented default (0, empty string, `false`,
//! empty list). A member that is present but of the wrong JSON type is a
//! protocol-version mismatch and fails with
//! [`ClientError::TypeMismatch`]. That split is deliberate: omitted
//! fields stay ergonomic while shape bugs surface immediately.

use bitcoind_json::{JObject, JToken};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{ClientError, ClientResult};

const EMPTY: &[JToken] = &[];

/// String member: absent/null ⇒ empty string.
pub fn string_field(obj: &JObject, key: &str) -> ClientResult<String> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(String::new()),
        Some(JToken::String(text)) => Ok(text.clone()),
        Some(other) => Err(ClientError::type_mismatch(key, "string", other.type_name())),
    }
}

/// Integer member: absent/null ⇒ 0.
pub fn long_field(obj: &JObject, key: &str) -> ClientResult<i64> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(0),
        Some(JToken::Number(value)) => Ok(*value as i64),
        Some(other) => Err(ClientError::type_mismatch(key, "number", other.type_name())),
    }
}

/// Floating-point member (difficulty and friends): absent/null ⇒ 0.0.
pub fn double_field(obj: &JObject, key: &str) -> ClientResult<f64> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(0.0),
        Some(JToken::Number(value)) => Ok(*value),
        Some(other) => Err(ClientError::type_mismatch(key, "number", other.type_name())),
    }
}

/// Coin-amount member: absent/null ⇒ zero.
pub fn decimal_field(obj: &JObject, key: &str) -> ClientResult<Decimal> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(Decimal::ZERO),
        Some(JToken::Number(value)) => Decimal::from_f64(*value)
            .ok_or_else(|| ClientError::type_mismatch(key, "decimal number", "number")),
        Some(other) => Err(ClientError::type_mismatch(key, "number", other.type_name())),
    }
}

/// Boolean member: absent/null ⇒ `false`.
pub fn bool_field(obj: &JObject, key: &str) -> ClientResult<bool> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(false),
        Some(JToken::Boolean(value)) => Ok(*value),
        Some(other) => Err(ClientError::type_mismatch(key, "boolean", other.type_name())),
    }
}

/// Array member: absent/null ⇒ empty slice.
pub fn array_field<'a>(obj: &'a JObject, key: &str) -> ClientResult<&'a [JToken]> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(EMPTY),
        Some(JToken::Array(items)) => Ok(items),
        Some(other) => Err(ClientError::type_mismatch(key, "array", other.type_name())),
    }
}

/// Object member: absent/null ⇒ `None`, so the caller substitutes the
/// nested record's zero value.
pub fn object_field<'a>(obj: &'a JObject, key: &str) -> ClientResult<Option<&'a JObject>> {
    match obj.get(key) {
        None | Some(JToken::Null) => Ok(None),
        Some(JToken::Object(map)) => Ok(Some(map)),
        Some(other) => Err(ClientError::type_mismatch(key, "object", other.type_name())),
    }
}

/// Entry point for object-shaped mappers: null ⇒ `None` (zero-value
/// record), anything but an object fails.
pub fn expect_object<'a>(token: &'a JToken, context: &str) -> ClientResult<Option<&'a JObject>> {
    match token {
        JToken::Null => Ok(None),
        JToken::Object(map) => Ok(Some(map)),
        other => Err(ClientError::type_mismatch(context, "object", other.type_name())),
    }
}

/// Entry point for array-shaped mappers: null ⇒ `None` (empty list).
pub fn expect_array<'a>(token: &'a JToken, context: &str) -> ClientResult<Option<&'a [JToken]>> {
    match token {
        JToken::Null => Ok(None),
        JToken::Array(items) => Ok(Some(items)),
        other => Err(ClientError::type_mismatch(context, "array", other.type_name())),
    }
}

/// String array member, used for address lists and tx id lists.
pub fn string_array_field(obj: &JObject, key: &str) -> ClientResult<Vec<String>> {
    let mut out = Vec::new();
    for item in array_field(obj, key)? {
        match item {
            JToken::String(text) => out.push(text.clone()),
            other => {
                return Err(ClientError::type_mismatch(key, "string", other.type_name()));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(text: &str) -> JObject {
        match JToken::parse(text).unwrap() {
            JToken::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn absent_members_default() {
        let map = obj("{}");
        assert_eq!(string_field(&map, "name").unwrap(), "");
        assert_eq!(long_field(&map, "height").unwrap(), 0);
        assert_eq!(decimal_field(&map, "amount").unwrap(), Decimal::ZERO);
        assert!(!bool_field(&map, "testnet").unwrap());
        assert!(array_field(&map, "tx").unwrap().is_empty());
        assert!(object_field(&map, "script").unwrap().is_none());
    }

    #[test]
    fn null_members_default() {
        let map = obj(r#"{"name":null,"height":null,"tx":null}"#);
        assert_eq!(string_field(&map, "name").unwrap(), "");
        assert_eq!(long_field(&map, "height").unwrap(), 0);
        assert!(array_field(&map, "tx").unwrap().is_empty());
    }

    #[test]
    fn wrong_type_is_a_mismatch() {
        let map = obj(r#"{"height":"tall","name":12,"flag":"yes"}"#);
        assert!(matches!(
            long_field(&map, "height"),
            Err(ClientError::TypeMismatch { .. })
        ));
        assert!(matches!(
            string_field(&map, "name"),
            Err(ClientError::TypeMismatch { .. })
        ));
        assert!(matches!(
            bool_field(&map, "flag"),
            Err(ClientError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn mismatch_message_names_the_member() {
        let map = obj(r#"{"confirmations":"many"}"#);
        let err = long_field(&map, "confirmations").unwrap_err();
        assert!(err.to_string().contains("confirmations"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn string_array_rejects_mixed_entries() {
        let map = obj(r#"{"tx":["ab",3]}"#);
        assert!(matches!(
            string_array_field(&map, "tx"),
            Err(ClientError::TypeMismatch { .. })
        ));
    }
}
