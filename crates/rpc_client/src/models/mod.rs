// Copyright (C) 2025 The Hubs-RS Project.
//
// mod.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! RPC Models
//!
//! Data models for the JSON-RPC requests and responses exchanged with the
//! ledger node.

mod rpc_coin;
mod rpc_object;
mod rpc_request;
mod rpc_transaction_block;

pub use rpc_coin::{RpcCoin, RpcCoinPage};
pub use rpc_object::{
    RpcMoveObject, RpcObjectData, RpcObjectOptions, RpcObjectResponse, RpcParsedData,
};
pub use rpc_request::{RpcRequest, RpcResponse, RpcResponseError};
pub use rpc_transaction_block::{
    RpcEvent, RpcExecutionStatus, RpcTransactionBlock, RpcTransactionBlockOptions,
    RpcTransactionEffects,
};

/// Ledger nodes render 64-bit integers as JSON strings; accept both forms.
pub(crate) mod u64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Number(n) => Ok(n),
            StringOrNumber::String(s) => s
                .parse::<u64>()
                .map_err(|_| de::Error::custom(format!("invalid u64 string: {s}"))),
        }
    }

    pub mod option {
        use super::StringOrNumber;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<u64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.serialize_some(&v.to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u64>, D::Error> {
            match Option::<StringOrNumber>::deserialize(deserializer)? {
                None => Ok(None),
                Some(StringOrNumber::Number(n)) => Ok(Some(n)),
                Some(StringOrNumber::String(s)) => s
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|_| de::Error::custom(format!("invalid u64 string: {s}"))),
            }
        }
    }
}
