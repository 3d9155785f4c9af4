// Copyright (C) 2025 The Hubs-RS Project.
//
// address.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::HubError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of an account address or object id in bytes
pub const ADDRESS_LENGTH: usize = 32;

/// 32-byte account address.
///
/// Parsed from `0x`-prefixed hex of up to 64 digits, case-insensitive;
/// short forms such as `0x2` are left-padded with zeros.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

/// Object ids share the address representation
pub type ObjectId = Address;

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Compares two textual addresses the way the ledger does: ignoring hex
    /// case and zero padding. Unparseable text falls back to a
    /// case-insensitive string compare.
    pub fn textually_equal(a: &str, b: &str) -> bool {
        match (a.parse::<Address>(), b.parse::<Address>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => a.trim().eq_ignore_ascii_case(b.trim()),
        }
    }
}

impl FromStr for Address {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| HubError::validation(format!("address `{s}` must start with 0x")))?;

        if digits.is_empty() || digits.len() > ADDRESS_LENGTH * 2 {
            return Err(HubError::validation(format!(
                "address `{s}` must have 1 to {} hex digits",
                ADDRESS_LENGTH * 2
            )));
        }

        let padded = format!("{:0>width$}", digits, width = ADDRESS_LENGTH * 2);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| HubError::validation(format!("address `{s}` is not hex: {e}")))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
