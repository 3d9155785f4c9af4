// Copyright (C) 2025 The Hubs-RS Project.
//
// rpc_object.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which parts of an object the node should render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcObjectOptions {
    pub show_type: bool,
    pub show_owner: bool,
    pub show_previous_transaction: bool,
    pub show_display: bool,
    pub show_content: bool,
    pub show_bcs: bool,
    pub show_storage_rebate: bool,
}

impl RpcObjectOptions {
    /// Type and parsed Move content, which is all the registry decode needs
    pub fn with_content() -> Self {
        Self {
            show_type: true,
            show_content: true,
            ..Self::default()
        }
    }
}

/// Result of `sui_getObject`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcObjectResponse {
    #[serde(default)]
    pub data: Option<RpcObjectData>,

    /// Present instead of `data` when the object is deleted or unknown
    #[serde(default)]
    pub error: Option<Value>,
}

/// Object payload of a `sui_getObject` result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcObjectData {
    pub object_id: String,

    #[serde(default, with = "super::u64_string::option")]
    pub version: Option<u64>,

    #[serde(default)]
    pub digest: Option<String>,

    #[serde(rename = "type", default)]
    pub object_type: Option<String>,

    #[serde(default)]
    pub content: Option<RpcParsedData>,
}

/// Parsed object content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum RpcParsedData {
    MoveObject(RpcMoveObject),
    Package {
        #[serde(default)]
        disassembled: Value,
    },
}

/// Parsed Move struct; `fields` keeps the node's JSON rendering untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcMoveObject {
    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default)]
    pub has_public_transfer: bool,

    pub fields: Value,
}

impl RpcObjectResponse {
    /// Move struct fields if this response carries a Move object
    pub fn move_fields(&self) -> Option<&Value> {
        match self.data.as_ref()?.content.as_ref()? {
            RpcParsedData::MoveObject(object) => Some(&object.fields),
            RpcParsedData::Package { .. } => None,
        }
    }
}
