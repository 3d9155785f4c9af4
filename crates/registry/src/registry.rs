// Copyright (C) 2025 The Hubs-RS Project.
//
// registry.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::address::{Address, ObjectId};
use crate::hub::{self, build_hub, Hub, HubId};
use crate::raw::RawRegistry;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Global voting window, in ledger clock milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VotingWindow {
    pub start: u64,
    pub end: u64,
}

impl VotingWindow {
    /// The owner has set a window at least once
    pub fn is_configured(&self) -> bool {
        self.end > 0
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether `now` falls in `[start, end)`. The contract checks against
    /// the ledger clock, so this is advisory.
    pub fn is_open_at(&self, now: u64) -> bool {
        self.is_well_formed() && self.start <= now && now < self.end
    }

    /// [`is_open_at`](Self::is_open_at) against the local wall clock
    pub fn is_open_now(&self) -> bool {
        u64::try_from(Utc::now().timestamp_millis())
            .map(|now| self.is_open_at(now))
            .unwrap_or(false)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.start)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.end)
    }
}

fn to_datetime(millis: u64) -> Option<DateTime<Utc>> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Decoded registry snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registry {
    pub id: ObjectId,
    pub version: Option<u64>,
    pub hubs: Vec<Hub>,
    pub min_propose: u64,
    pub min_vote: u64,
    pub voting_window: VotingWindow,
    pub owner: Option<Address>,
}

impl Registry {
    pub fn from_raw(raw: RawRegistry) -> Self {
        Self {
            id: raw.object_id,
            version: raw.version,
            hubs: raw.hubs.iter().map(build_hub).collect(),
            min_propose: raw.min_propose,
            min_vote: raw.min_vote,
            voting_window: VotingWindow {
                start: raw.voting_start,
                end: raw.voting_end,
            },
            owner: raw.owner,
        }
    }

    pub fn find_hub(&self, hub_id: HubId) -> Option<&Hub> {
        self.hubs.iter().find(|hub| hub.hub_id == hub_id)
    }

    pub fn voted_hubs(&self) -> Vec<&Hub> {
        hub::voted_hubs(&self.hubs)
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner.as_ref() == Some(address)
    }
}
