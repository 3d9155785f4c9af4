// Copyright (C) 2025 The Hubs-RS Project.
//
// rpc_coin.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// One page of `suix_getCoins`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcCoinPage {
    #[serde(default)]
    pub data: Vec<RpcCoin>,

    #[serde(default)]
    pub next_cursor: Option<String>,

    #[serde(default)]
    pub has_next_page: bool,
}

/// A single coin object owned by an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcCoin {
    #[serde(default)]
    pub coin_type: String,

    #[serde(default)]
    pub coin_object_id: String,

    #[serde(with = "super::u64_string")]
    pub balance: u64,

    #[serde(default)]
    pub previous_transaction: Option<String>,
}
