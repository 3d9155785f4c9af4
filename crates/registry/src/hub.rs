// Copyright (C) 2025 The Hubs-RS Project.
//
// hub.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed hub entity and the state derived from it.

use crate::address::{Address, ObjectId};
use crate::codec::{decode_fixed_point, decode_text, COORDINATE_SCALE};
use crate::error::{HubError, HubResult};
use crate::raw::RawHub;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registry-scoped hub number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HubId(pub u64);

impl fmt::Display for HubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for HubId {
    fn from(value: u64) -> Self {
        HubId(value)
    }
}

impl FromStr for HubId {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(HubError::validation(format!("hub id must not be negative: {trimmed}")));
        }
        trimmed
            .parse::<u64>()
            .map(HubId)
            .map_err(|_| HubError::validation(format!("hub id is not a number: `{trimmed}`")))
    }
}

/// Funding state of a hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubStatus {
    /// Accepting funds toward a set goal
    Active,
    /// Goal reached
    Funded,
    /// No funding goal set yet
    Pending,
}

impl fmt::Display for HubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubStatus::Active => write!(f, "Active"),
            HubStatus::Funded => write!(f, "Funded"),
            HubStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A community hub as held by the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hub {
    pub id: ObjectId,
    pub hub_id: HubId,
    pub name: String,
    pub city: String,
    pub contact: String,
    pub community_image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_raw: u64,
    pub longitude_raw: u64,
    pub funding_goal: u64,
    pub funds_raised: u64,
    pub vote_count: u64,
    pub voters: Vec<String>,
    pub community_wallet: Option<Address>,
}

/// Builds a [`Hub`] from its raw ledger fields. Never fails: undecodable
/// text becomes an empty string.
pub fn build_hub(raw: &RawHub) -> Hub {
    Hub {
        id: raw.object_id,
        hub_id: HubId(raw.hub_id),
        name: decode_text(&raw.name),
        city: decode_text(&raw.city),
        contact: decode_text(&raw.contact),
        community_image: decode_text(&raw.community_image),
        latitude: decode_fixed_point(raw.latitude, COORDINATE_SCALE),
        longitude: decode_fixed_point(raw.longitude, COORDINATE_SCALE),
        latitude_raw: raw.latitude,
        longitude_raw: raw.longitude,
        funding_goal: raw.funding_goal,
        funds_raised: raw.funds_raised,
        vote_count: raw.vote_count,
        voters: raw.voters.clone(),
        community_wallet: raw.community_wallet,
    }
}

/// Hubs with at least one vote, in registry order
pub fn voted_hubs(hubs: &[Hub]) -> Vec<&Hub> {
    hubs.iter().filter(|hub| hub.vote_count > 0).collect()
}

impl Hub {
    pub fn status(&self) -> HubStatus {
        if self.funding_goal == 0 {
            HubStatus::Pending
        } else if self.funds_raised >= self.funding_goal {
            HubStatus::Funded
        } else {
            HubStatus::Active
        }
    }

    /// `round(funds_raised / funding_goal * 100)`, half up, or 0 without a
    /// goal. Not clamped: an over-funded hub reports more than 100.
    pub fn progress_percentage(&self) -> u64 {
        if self.funding_goal == 0 {
            return 0;
        }
        let raised = u128::from(self.funds_raised);
        let goal = u128::from(self.funding_goal);
        let percent = (raised * 200 + goal) / (goal * 2);
        u64::try_from(percent).unwrap_or(u64::MAX)
    }

    pub fn remaining_funding(&self) -> u64 {
        self.funding_goal.saturating_sub(self.funds_raised)
    }

    pub fn is_fully_funded(&self) -> bool {
        self.status() == HubStatus::Funded
    }

    /// Whether `address` is among the voters, ignoring hex case and padding
    pub fn has_voted(&self, address: &str) -> bool {
        self.voters
            .iter()
            .any(|voter| Address::textually_equal(voter, address))
    }

    /// Checks the conditions the contract enforces on a vote.
    pub fn ensure_can_vote(&self, voter: &str, balance: u64, min_vote: u64) -> HubResult<()> {
        if self.has_voted(voter) {
            return Err(HubError::AlreadyVoted(self.hub_id));
        }
        if balance < min_vote {
            return Err(HubError::InsufficientBalance {
                required: min_vote,
                available: balance,
            });
        }
        Ok(())
    }

    /// Checks a funding amount against the goal.
    pub fn ensure_can_fund(&self, amount: u64) -> HubResult<()> {
        match self.status() {
            HubStatus::Funded => Err(HubError::FundingCapReached(self.hub_id)),
            HubStatus::Pending => Err(HubError::validation(format!(
                "hub {} has no funding goal yet",
                self.hub_id
            ))),
            HubStatus::Active if amount == 0 => {
                Err(HubError::validation("fund amount must be greater than zero"))
            }
            HubStatus::Active if amount > self.remaining_funding() => {
                Err(HubError::validation(format!(
                    "fund amount {amount} exceeds the remaining goal of {}",
                    self.remaining_funding()
                )))
            }
            HubStatus::Active => Ok(()),
        }
    }
}
