// Copyright (C) 2025 The Hubs-RS Project.
//
// fetcher.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::address::{Address, ObjectId};
use crate::error::{HubError, HubResult};
use crate::raw::RawRegistry;
use hubs_rpc_client::{RpcClient, RpcObjectOptions, RpcObjectResponse};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Coins requested per `suix_getCoins` page
pub const COIN_PAGE_LIMIT: u32 = 50;

/// Pages followed before giving up on a balance
pub const MAX_COIN_PAGES: usize = 100;

/// Side-effect-free reads of registry and token state
#[derive(Debug, Clone)]
pub struct RegistryFetcher {
    rpc_client: Arc<RpcClient>,
}

impl RegistryFetcher {
    pub fn new(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    pub fn rpc_client(&self) -> &Arc<RpcClient> {
        &self.rpc_client
    }

    /// Fetches and strictly decodes the shared registry object.
    ///
    /// Transport failures are [`HubError::Network`]; a result that arrives
    /// but does not have the registry's shape is [`HubError::Decode`].
    pub async fn fetch_registry(&self, registry_id: &ObjectId) -> HubResult<RawRegistry> {
        let id = registry_id.to_string();
        let result = self
            .rpc_client
            .rpc_send_async(
                "sui_getObject",
                vec![json!(id), json!(RpcObjectOptions::with_content())],
            )
            .await?;
        let response: RpcObjectResponse = serde_json::from_value(result).map_err(|e| {
            warn!(
                target: "hubs::fetcher",
                registry = %id,
                error = %e,
                "unexpected registry shape"
            );
            HubError::decode(format!("registry {id} has an unexpected shape: {e}"))
        })?;

        if let Some(error) = &response.error {
            warn!(
                target: "hubs::fetcher",
                registry = %id,
                %error,
                "registry object unavailable"
            );
            return Err(HubError::decode(format!("registry {id} unavailable: {error}")));
        }
        let version = response.data.as_ref().and_then(|data| data.version);
        let fields = response.move_fields().ok_or_else(|| {
            HubError::decode(format!("registry {id} has no Move object content"))
        })?;

        let raw = RawRegistry::from_fields(*registry_id, version, fields).map_err(|e| {
            warn!(
                target: "hubs::fetcher",
                registry = %id,
                error = %e,
                "registry decode failed"
            );
            e
        })?;
        debug!(
            target: "hubs::fetcher",
            registry = %id,
            hubs = raw.hubs.len(),
            ?version,
            "registry fetched"
        );
        Ok(raw)
    }

    /// Sums every coin of `coin_type` held by `owner`, following pages.
    pub async fn fetch_token_balance(&self, owner: &Address, coin_type: &str) -> HubResult<u64> {
        let owner_text = owner.to_string();
        let mut cursor: Option<String> = None;
        let mut total: u64 = 0;

        for _ in 0..MAX_COIN_PAGES {
            let page = self
                .rpc_client
                .get_coins(&owner_text, coin_type, cursor.as_deref(), Some(COIN_PAGE_LIMIT))
                .await?;

            for coin in &page.data {
                total = total.checked_add(coin.balance).ok_or_else(|| {
                    HubError::decode(format!("balance of {owner_text} overflows u64"))
                })?;
            }

            match page.next_cursor {
                Some(next) if page.has_next_page => cursor = Some(next),
                _ => {
                    debug!(
                        target: "hubs::fetcher",
                        owner = %owner_text,
                        coin_type,
                        total,
                        "balance fetched"
                    );
                    return Ok(total);
                }
            }
        }

        Err(HubError::decode(format!(
            "coins of {owner_text} span more than {MAX_COIN_PAGES} pages"
        )))
    }
}
