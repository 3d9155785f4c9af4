// Copyright (C) 2025 The Hubs-RS Project.
//
// transaction.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction builder module.
//!
//! Turns typed arguments into unsigned Move calls against the hub registry
//! package. Every builder validates its input first and fails with
//! [`HubError::Validation`] without touching the network; the contract still
//! has the final word.

use crate::address::{Address, ObjectId};
use crate::codec::{
    encode_fixed_point, encode_text, parse_fixed_point, BcsWriter, COORDINATE_SCALE,
};
use crate::error::{HubError, HubResult};
use crate::hub::HubId;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hubs_config::ContractConfig;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// State-mutating entry points of the registry module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    NewRegistry,
    ProposeHub,
    VoteForHub,
    FundHub,
    SetFundingDetails,
    SetGlobalVotingWindow,
    FinalizeVoting,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 7] = [
        EntryPoint::NewRegistry,
        EntryPoint::ProposeHub,
        EntryPoint::VoteForHub,
        EntryPoint::FundHub,
        EntryPoint::SetFundingDetails,
        EntryPoint::SetGlobalVotingWindow,
        EntryPoint::FinalizeVoting,
    ];

    /// Move function name
    pub fn function_name(&self) -> &'static str {
        match self {
            EntryPoint::NewRegistry => "new_registry",
            EntryPoint::ProposeHub => "propose_hub",
            EntryPoint::VoteForHub => "vote_for_hub",
            EntryPoint::FundHub => "fund_hub",
            EntryPoint::SetFundingDetails => "set_funding_details",
            EntryPoint::SetGlobalVotingWindow => "set_global_voting_window",
            EntryPoint::FinalizeVoting => "finalize_voting",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

impl FromStr for EntryPoint {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        EntryPoint::ALL
            .into_iter()
            .find(|entry| entry.function_name() == wanted)
            .ok_or_else(|| HubError::validation(format!("unknown entry point `{s}`")))
    }
}

/// Fully qualified `package::module::function`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTarget {
    pub package: Address,
    pub module: String,
    pub function: String,
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

/// One argument of a Move call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    /// Shared or owned object, resolved by the signer
    Object(ObjectId),
    /// Canonically encoded pure value
    Pure(Vec<u8>),
}

impl CallArg {
    pub fn pure_u64(value: u64) -> Self {
        let mut writer = BcsWriter::new();
        writer.write_u64(value);
        CallArg::Pure(writer.into_bytes())
    }

    pub fn pure_bytes(bytes: &[u8]) -> Self {
        let mut writer = BcsWriter::new();
        writer.write_bytes(bytes);
        CallArg::Pure(writer.into_bytes())
    }

    pub fn pure_address(address: &Address) -> Self {
        let mut writer = BcsWriter::new();
        writer.write_address(address);
        CallArg::Pure(writer.into_bytes())
    }

    fn to_json(&self) -> Value {
        match self {
            CallArg::Object(id) => json!({ "object": id.to_string() }),
            CallArg::Pure(bytes) => json!({ "pure": BASE64.encode(bytes) }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
    pub target: MoveTarget,
    pub arguments: Vec<CallArg>,
}

/// Unsigned transaction handed to the signer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPayload {
    pub entry_point: EntryPoint,
    pub call: MoveCall,
    pub gas_budget: u64,
    /// Hub the call acts on, if any
    pub hub_id: Option<HubId>,
}

impl TransactionPayload {
    /// Wallet-facing JSON form of the call
    pub fn to_json(&self) -> Value {
        json!({
            "kind": "moveCall",
            "target": self.call.target.to_string(),
            "arguments": self.call.arguments.iter().map(CallArg::to_json).collect::<Vec<_>>(),
            "gasBudget": self.gas_budget.to_string(),
        })
    }

    /// Key identifying the user action this payload performs; at most one
    /// submission per key is in flight.
    pub fn action_key(&self) -> String {
        match self.hub_id {
            Some(hub_id) => format!("{}:{}", self.entry_point, hub_id),
            None => self.entry_point.to_string(),
        }
    }
}

/// A latitude or longitude already scaled by [`COORDINATE_SCALE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coordinate(i64);

impl Coordinate {
    /// From decimal text such as `"51.5074"`, without float rounding
    pub fn parse(text: &str) -> HubResult<Self> {
        parse_fixed_point(text, COORDINATE_SCALE).map(Coordinate)
    }

    pub fn from_degrees(degrees: f64) -> HubResult<Self> {
        encode_fixed_point(degrees, COORDINATE_SCALE).map(Coordinate)
    }

    pub fn scaled(&self) -> i64 {
        self.0
    }
}

impl FromStr for Coordinate {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

/// User input for a hub proposal
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalForm {
    pub name: String,
    pub city: String,
    pub contact: String,
    /// URL of an already uploaded image, may be empty
    pub community_image: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

/// Builds unsigned calls for one deployed registry
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    package: Address,
    module: String,
    registry: ObjectId,
    gas_budget: u64,
}

impl TransactionBuilder {
    pub fn new(contract: &ContractConfig) -> HubResult<Self> {
        let package = contract
            .package_id
            .parse()
            .map_err(|e| HubError::validation(format!("contract.package_id: {e}")))?;
        let registry = contract
            .registry_id
            .parse()
            .map_err(|e| HubError::validation(format!("contract.registry_id: {e}")))?;
        let module = contract.module_name.trim();
        if module.is_empty() {
            return Err(HubError::validation("contract.module_name must not be empty"));
        }

        Ok(Self {
            package,
            module: module.to_string(),
            registry,
            gas_budget: contract.gas_budget,
        })
    }

    pub fn registry_id(&self) -> &ObjectId {
        &self.registry
    }

    fn payload(
        &self,
        entry_point: EntryPoint,
        hub_id: Option<HubId>,
        arguments: Vec<CallArg>,
    ) -> TransactionPayload {
        TransactionPayload {
            entry_point,
            call: MoveCall {
                target: MoveTarget {
                    package: self.package,
                    module: self.module.clone(),
                    function: entry_point.function_name().to_string(),
                },
                arguments,
            },
            gas_budget: self.gas_budget,
            hub_id,
        }
    }

    pub fn new_registry(&self, min_propose: u64, min_vote: u64) -> HubResult<TransactionPayload> {
        require_positive(min_propose, "min_propose")?;
        require_positive(min_vote, "min_vote")?;

        Ok(self.payload(
            EntryPoint::NewRegistry,
            None,
            vec![CallArg::pure_u64(min_propose), CallArg::pure_u64(min_vote)],
        ))
    }

    /// Text fields are encoded exactly as given; blank ones are rejected.
    pub fn propose_hub(
        &self,
        form: &ProposalForm,
        caller_balance: u64,
    ) -> HubResult<TransactionPayload> {
        require_text(&form.name, "name")?;
        require_text(&form.city, "city")?;
        require_text(&form.contact, "contact")?;
        let latitude = require_unsigned(form.latitude, "latitude")?;
        let longitude = require_unsigned(form.longitude, "longitude")?;
        require_positive(caller_balance, "caller balance")?;

        Ok(self.payload(
            EntryPoint::ProposeHub,
            None,
            vec![
                CallArg::Object(self.registry),
                CallArg::pure_bytes(&encode_text(&form.name)),
                CallArg::pure_bytes(&encode_text(&form.city)),
                CallArg::pure_u64(latitude),
                CallArg::pure_u64(longitude),
                CallArg::pure_bytes(&encode_text(&form.contact)),
                CallArg::pure_u64(caller_balance),
                CallArg::pure_bytes(&encode_text(&form.community_image)),
            ],
        ))
    }

    pub fn vote_for_hub(
        &self,
        hub_id: HubId,
        caller_balance: u64,
    ) -> HubResult<TransactionPayload> {
        Ok(self.payload(
            EntryPoint::VoteForHub,
            Some(hub_id),
            vec![
                CallArg::Object(self.registry),
                CallArg::pure_u64(hub_id.0),
                CallArg::pure_u64(caller_balance),
            ],
        ))
    }

    pub fn fund_hub(&self, hub_id: HubId, amount: u64) -> HubResult<TransactionPayload> {
        require_positive(amount, "fund amount")?;

        Ok(self.payload(
            EntryPoint::FundHub,
            Some(hub_id),
            vec![
                CallArg::Object(self.registry),
                CallArg::pure_u64(hub_id.0),
                CallArg::pure_u64(amount),
            ],
        ))
    }

    pub fn set_funding_details(
        &self,
        hub_id: HubId,
        funding_goal: u64,
        community_wallet: &str,
    ) -> HubResult<TransactionPayload> {
        require_positive(funding_goal, "funding goal")?;
        let wallet: Address = require_text(community_wallet, "community wallet")?
            .parse()
            .map_err(|e| HubError::validation(format!("community wallet: {e}")))?;

        Ok(self.payload(
            EntryPoint::SetFundingDetails,
            Some(hub_id),
            vec![
                CallArg::Object(self.registry),
                CallArg::pure_u64(hub_id.0),
                CallArg::pure_u64(funding_goal),
                CallArg::pure_address(&wallet),
            ],
        ))
    }

    pub fn set_global_voting_window(&self, start: u64, end: u64) -> HubResult<TransactionPayload> {
        if start >= end {
            return Err(HubError::validation(format!(
                "voting window start {start} must be before end {end}"
            )));
        }

        Ok(self.payload(
            EntryPoint::SetGlobalVotingWindow,
            None,
            vec![
                CallArg::Object(self.registry),
                CallArg::pure_u64(start),
                CallArg::pure_u64(end),
            ],
        ))
    }

    pub fn finalize_voting(&self) -> HubResult<TransactionPayload> {
        Ok(self.payload(
            EntryPoint::FinalizeVoting,
            None,
            vec![CallArg::Object(self.registry)],
        ))
    }
}

fn require_positive(value: u64, name: &str) -> HubResult<()> {
    if value == 0 {
        return Err(HubError::validation(format!("{name} must be greater than zero")));
    }
    Ok(())
}

fn require_text<'a>(value: &'a str, name: &str) -> HubResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HubError::validation(format!("{name} must not be empty")));
    }
    Ok(trimmed)
}

fn require_unsigned(coordinate: Coordinate, name: &str) -> HubResult<u64> {
    u64::try_from(coordinate.scaled())
        .map_err(|_| HubError::validation(format!("{name} must not be negative")))
}
