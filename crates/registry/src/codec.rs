// Copyright (C) 2025 The Hubs-RS Project.
//
// codec.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Field codec module.
//!
//! Text, fixed-point and binary (BCS) conversions between ledger fields and
//! Rust values. Text decoding is total; everything that produces bytes for a
//! call argument fails loudly instead of guessing.

use crate::address::{Address, ADDRESS_LENGTH};
use crate::error::{HubError, HubResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Scale used for latitude and longitude on the ledger
pub const COORDINATE_SCALE: u64 = 1_000_000;

/// Longest sequence the canonical encoding allows
pub const MAX_SEQUENCE_LENGTH: u64 = (1 << 31) - 1;

/// Decodes UTF-8 bytes; malformed or empty input yields an empty string.
pub fn decode_text(bytes: &[u8]) -> String {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Encodes text as UTF-8 bytes.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Divides a scaled integer back into its decimal value.
pub fn decode_fixed_point(value: impl Into<i128>, scale: u64) -> f64 {
    value.into() as f64 / scale as f64
}

/// Multiplies a decimal value by `scale` and rounds to the nearest integer.
///
/// Fails for NaN, infinities, a zero scale, and results outside `i64`.
pub fn encode_fixed_point(value: f64, scale: u64) -> HubResult<i64> {
    if !value.is_finite() {
        return Err(HubError::Encoding(format!(
            "{value} is not a finite number"
        )));
    }
    if scale == 0 {
        return Err(HubError::Encoding("fixed-point scale must be positive".into()));
    }

    let scaled = (value * scale as f64).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return Err(HubError::Encoding(format!(
            "{value} scaled by {scale} does not fit in 64 bits"
        )));
    }
    Ok(scaled as i64)
}

/// Parses decimal text exactly into a scaled integer.
///
/// Unlike [`encode_fixed_point`] no binary float is involved, so
/// `"51.5074"` always becomes `51_507_400`. Text with more fractional digits
/// than the scale can carry is rejected rather than truncated.
pub fn parse_fixed_point(text: &str, scale: u64) -> HubResult<i64> {
    let trimmed = text.trim();
    let decimal = Decimal::from_str(trimmed)
        .map_err(|e| HubError::Encoding(format!("`{trimmed}` is not a decimal number: {e}")))?;
    if scale == 0 {
        return Err(HubError::Encoding("fixed-point scale must be positive".into()));
    }

    let scaled = decimal
        .checked_mul(Decimal::from(scale))
        .ok_or_else(|| HubError::Encoding(format!("`{trimmed}` overflows when scaled")))?;
    if !scaled.fract().is_zero() {
        return Err(HubError::Encoding(format!(
            "`{trimmed}` has more precision than 1/{scale}"
        )));
    }
    scaled
        .trunc()
        .to_i64()
        .ok_or_else(|| HubError::Encoding(format!("`{trimmed}` does not fit in 64 bits")))
}

/// Canonical binary writer for pure call arguments.
#[derive(Debug, Default, Clone)]
pub struct BcsWriter {
    buffer: Vec<u8>,
}

impl BcsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    /// Writes a `u64` as 8 little-endian bytes.
    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Writes an unsigned LEB128 integer (sequence length prefix).
    pub fn write_uleb128(&mut self, mut value: u64) -> &mut Self {
        loop {
            let byte = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                self.buffer.push(byte);
                return self;
            }
            self.buffer.push(byte | 0x80);
        }
    }

    /// Writes a `vector<u8>`: length prefix followed by the bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_uleb128(bytes.len() as u64);
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Writes an address as its 32 raw bytes.
    pub fn write_address(&mut self, address: &Address) -> &mut Self {
        self.buffer.extend_from_slice(address.as_bytes());
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Reader for the canonical binary encoding.
#[derive(Debug)]
pub struct BcsReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BcsReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn take(&mut self, count: usize) -> HubResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(HubError::decode(format!(
                "unexpected end of input: need {count} bytes at offset {}, have {}",
                self.position,
                self.remaining()
            )));
        }
        let slice = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> HubResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u64(&mut self) -> HubResult<u64> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(bytes))
    }

    /// Reads an unsigned LEB128 integer, rejecting non-canonical and
    /// overlong encodings.
    pub fn read_uleb128(&mut self) -> HubResult<u64> {
        let mut value: u64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.read_u8()?;
            let digit = u64::from(byte & 0x7F);
            if shift == 63 && digit > 1 {
                return Err(HubError::decode("uleb128 value overflows u64"));
            }
            value |= digit << shift;
            if byte & 0x80 == 0 {
                if shift > 0 && digit == 0 {
                    return Err(HubError::decode("non-canonical uleb128 encoding"));
                }
                return Ok(value);
            }
            shift += 7;
            if shift > 63 {
                return Err(HubError::decode("uleb128 value overflows u64"));
            }
        }
    }

    /// Reads a length-prefixed `vector<u8>`.
    pub fn read_bytes(&mut self) -> HubResult<Vec<u8>> {
        let length = self.read_uleb128()?;
        if length > MAX_SEQUENCE_LENGTH {
            return Err(HubError::decode(format!("sequence length {length} too large")));
        }
        let length = usize::try_from(length)
            .map_err(|_| HubError::decode(format!("sequence length {length} too large")))?;
        Ok(self.take(length)?.to_vec())
    }

    pub fn read_address(&mut self) -> HubResult<Address> {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(self.take(ADDRESS_LENGTH)?);
        Ok(Address::new(bytes))
    }

    /// Succeeds only when every byte has been consumed.
    pub fn finish(self) -> HubResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(HubError::decode(format!("{n} trailing bytes"))),
        }
    }
}
