// Copyright (C) 2015-2025 The Bitcoind-RS Project.
//
// enrich.rs file belongs to the bitcoind-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::sync::Arc;

use crate::client::models::{RpcBlock, RpcTransaction};
use crate::client::RpcClient;
use crate::error::ClientResult;
use crate::notify::NotificationHandler;

/// Builds a notification handler that resolves each raw identifier into
/// a full record before delivery.
///
/// Enrichment is a strategy, not a subclass: `resolve` performs the RPC
/// lookup and `degrade` builds the identifier-only fallback record. When
/// resolution fails (including an unreachable RPC endpoint) the degraded
/// record is delivered instead, so the sink sees exactly one record per
/// raw notification, never zero.
pub fn enriched_handler<T, R, D, S>(
    client: Arc<RpcClient>,
    resolve: R,
    degrade: D,
    sink: S,
) -> NotificationHandler
where
    T: 'static,
    R: Fn(&RpcClient, &str) -> ClientResult<T> + Send + Sync + 'static,
    D: Fn(&str) -> T + Send + Sync + 'static,
    S: Fn(T) + Send + Sync + 'static,
{
    Arc::new(move |payload: &str| {
        let record = match resolve(&client, payload) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(
                    identifier = payload,
                    %err,
                    "enrichment failed, delivering degraded record"
                );
                degrade(payload)
            }
        };
        sink(record);
    })
}

/// Handler for `blocknotify` lines: resolves each block hash via
/// `getblock`; on failure delivers a block record carrying only the hash.
pub fn block_notification_handler<S>(client: Arc<RpcClient>, sink: S) -> NotificationHandler
where
    S: Fn(RpcBlock) + Send + Sync + 'static,
{
    enriched_handler(
        client,
        |client, hash| client.get_block(hash),
        |hash| RpcBlock {
            hash: hash.to_string(),
            ..RpcBlock::default()
        },
        sink,
    )
}

/// Handler for `walletnotify` lines: resolves each transaction id via
/// `gettransaction`; on failure delivers a transaction record carrying
/// only the id.
pub fn transaction_notification_handler<S>(client: Arc<RpcClient>, sink: S) -> NotificationHandler
where
    S: Fn(RpcTransaction) + Send + Sync + 'static,
{
    enriched_handler(
        client,
        |client, tx_id| client.get_transaction(tx_id),
        |tx_id| RpcTransaction {
            tx_id: tx_id.to_string(),
            ..RpcTransaction::default()
        },
        sink,
    )
}
