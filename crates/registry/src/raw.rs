// Copyright (C) 2025 The Hubs-RS Project.
//
// raw.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Registry object as stored on the ledger.
//!
//! The node renders Move structs as JSON: nested structs are wrapped in
//! `{"type", "fields"}`, `vector<u8>` is an array of numbers, 64-bit
//! integers are usually strings. Everything here is decoded strictly so no
//! untyped JSON leaves the fetcher.

use crate::address::{Address, ObjectId};
use crate::error::{HubError, HubResult};
use serde_json::{Map, Value};

/// Undecoded registry fields, still in ledger units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRegistry {
    pub object_id: ObjectId,
    pub version: Option<u64>,
    pub hubs: Vec<RawHub>,
    pub min_propose: u64,
    pub min_vote: u64,
    pub voting_start: u64,
    pub voting_end: u64,
    pub owner: Option<Address>,
}

/// Undecoded hub fields; byte fields are still UTF-8 bytes and coordinates
/// are still scaled integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHub {
    pub object_id: ObjectId,
    pub hub_id: u64,
    pub name: Vec<u8>,
    pub city: Vec<u8>,
    pub contact: Vec<u8>,
    pub community_image: Vec<u8>,
    pub latitude: u64,
    pub longitude: u64,
    pub funding_goal: u64,
    pub funds_raised: u64,
    pub vote_count: u64,
    pub voters: Vec<String>,
    pub community_wallet: Option<Address>,
}

impl RawRegistry {
    /// Decodes the Move fields of the registry object.
    ///
    /// A missing `hubs` member is a [`HubError::Decode`], never an empty
    /// registry.
    pub fn from_fields(
        object_id: ObjectId,
        version: Option<u64>,
        fields: &Value,
    ) -> HubResult<Self> {
        let fields = struct_fields(fields, "registry")?;

        let hubs = match fields.get("hubs") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| RawHub::from_value(item).map_err(|e| at_hub(index, e)))
                .collect::<HubResult<Vec<_>>>()?,
            Some(other) => {
                return Err(HubError::decode(format!(
                    "registry field `hubs` is not an array: {other}"
                )))
            }
            None => return Err(HubError::decode("registry content has no `hubs` field")),
        };

        Ok(Self {
            object_id,
            version,
            hubs,
            min_propose: optional_u64(fields, "min_propose")?.unwrap_or(0),
            min_vote: optional_u64(fields, "min_vote")?.unwrap_or(0),
            voting_start: optional_u64(fields, "voting_start")?.unwrap_or(0),
            voting_end: optional_u64(fields, "voting_end")?.unwrap_or(0),
            owner: optional_address(fields, "owner")?,
        })
    }
}

impl RawHub {
    /// Decodes one element of the registry's `hubs` vector.
    pub fn from_value(value: &Value) -> HubResult<Self> {
        let fields = struct_fields(value, "hub")?;

        Ok(Self {
            object_id: uid(fields)?,
            hub_id: required_u64(fields, "hub_id")?,
            name: required_bytes(fields, "name")?,
            city: required_bytes(fields, "city")?,
            contact: required_bytes(fields, "contact")?,
            community_image: match fields.get("community_image") {
                None | Some(Value::Null) => Vec::new(),
                Some(value) => bytes(value, "community_image")?,
            },
            latitude: required_u64(fields, "latitude")?,
            longitude: required_u64(fields, "longitude")?,
            funding_goal: required_u64(fields, "funding_goal")?,
            funds_raised: required_u64(fields, "funds_raised")?,
            vote_count: required_u64(fields, "vote_count")?,
            voters: voters(fields)?,
            community_wallet: optional_address(fields, "community_wallet")?,
        })
    }
}

fn at_hub(index: usize, err: HubError) -> HubError {
    match err {
        HubError::Decode(message) => HubError::Decode(format!("hubs[{index}]: {message}")),
        other => other,
    }
}

/// Unwraps `{"type", "fields"}` when present and returns the field map.
fn struct_fields<'a>(value: &'a Value, what: &str) -> HubResult<&'a Map<String, Value>> {
    let object = value
        .as_object()
        .ok_or_else(|| HubError::decode(format!("{what} is not a JSON object")))?;
    match object.get("fields") {
        Some(Value::Object(fields)) => Ok(fields),
        Some(_) => Err(HubError::decode(format!("{what} `fields` is not an object"))),
        None => Ok(object),
    }
}

fn uid(fields: &Map<String, Value>) -> HubResult<ObjectId> {
    let id = fields
        .get("id")
        .ok_or_else(|| HubError::decode("missing field `id`"))?;
    // UID renders as {"id": "0x.."}; accept a bare string as well
    let text = match id {
        Value::String(text) => text.as_str(),
        Value::Object(inner) => inner
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| HubError::decode("field `id` has no inner `id` string"))?,
        other => return Err(HubError::decode(format!("field `id` has unexpected shape: {other}"))),
    };
    parse_address(text, "id")
}

fn u64_value(value: &Value, name: &str) -> HubResult<u64> {
    match value {
        Value::String(text) => text
            .parse::<u64>()
            .map_err(|_| HubError::decode(format!("field `{name}` is not a u64: \"{text}\""))),
        Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| HubError::decode(format!("field `{name}` is not a u64: {number}"))),
        other => Err(HubError::decode(format!("field `{name}` is not a u64: {other}"))),
    }
}

fn required_u64(fields: &Map<String, Value>, name: &str) -> HubResult<u64> {
    match fields.get(name) {
        Some(value) => u64_value(value, name),
        None => Err(HubError::decode(format!("missing field `{name}`"))),
    }
}

fn optional_u64(fields: &Map<String, Value>, name: &str) -> HubResult<Option<u64>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => u64_value(value, name).map(Some),
    }
}

/// `vector<u8>` arrives as an array of numbers; a Move `String` arrives as
/// JSON text.
fn bytes(value: &Value, name: &str) -> HubResult<Vec<u8>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|byte| u8::try_from(byte).ok())
                    .ok_or_else(|| {
                        HubError::decode(format!("field `{name}` holds a non-byte: {item}"))
                    })
            })
            .collect(),
        Value::String(text) => Ok(text.as_bytes().to_vec()),
        other => Err(HubError::decode(format!("field `{name}` is not a byte vector: {other}"))),
    }
}

fn required_bytes(fields: &Map<String, Value>, name: &str) -> HubResult<Vec<u8>> {
    match fields.get(name) {
        Some(value) => bytes(value, name),
        None => Err(HubError::decode(format!("missing field `{name}`"))),
    }
}

fn parse_address(text: &str, name: &str) -> HubResult<Address> {
    text.parse::<Address>()
        .map_err(|_| HubError::decode(format!("field `{name}` is not an address: \"{text}\"")))
}

/// Accepts a plain address, `null`, or a Move `Option` rendered as
/// `{"vec": [..]}`.
fn optional_address(fields: &Map<String, Value>, name: &str) -> HubResult<Option<Address>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => parse_address(text, name).map(Some),
        Some(Value::Object(inner)) => match inner.get("vec").and_then(Value::as_array) {
            Some(items) => match items.first() {
                None => Ok(None),
                Some(Value::String(text)) => parse_address(text, name).map(Some),
                Some(other) => Err(HubError::decode(format!(
                    "field `{name}` holds a non-address: {other}"
                ))),
            },
            None => Err(HubError::decode(format!("field `{name}` has unexpected shape"))),
        },
        Some(other) => Err(HubError::decode(format!(
            "field `{name}` is not an address: {other}"
        ))),
    }
}

fn voters(fields: &Map<String, Value>) -> HubResult<Vec<String>> {
    match fields.get("voters") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        HubError::decode(format!("field `voters` holds a non-address: {item}"))
                    })
            })
            .collect(),
        Some(other) => Err(HubError::decode(format!("field `voters` is not an array: {other}"))),
    }
}
