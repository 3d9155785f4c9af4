// Copyright (C) 2025 The Hubs-RS Project.
//
// view.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::registry::Registry;
use parking_lot::Mutex;

/// Issued by [`RegistryView::begin_refresh`]; only the newest ticket may
/// store a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RefreshTicket {
    generation: u64,
}

#[derive(Debug, Default)]
struct ViewState {
    generation: u64,
    closed: bool,
    registry: Option<Registry>,
}

/// Latest registry snapshot shown to a consumer.
///
/// Fetches that complete after a newer refresh started, after
/// [`invalidate`](Self::invalidate), or after [`close`](Self::close) are
/// discarded.
#[derive(Debug, Default)]
pub struct RegistryView {
    state: Mutex<ViewState>,
}

impl RegistryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_refresh(&self) -> RefreshTicket {
        let mut state = self.state.lock();
        state.generation += 1;
        RefreshTicket {
            generation: state.generation,
        }
    }

    /// Stores `registry` if `ticket` is still current. Returns whether it
    /// was stored.
    pub fn apply(&self, ticket: RefreshTicket, registry: Registry) -> bool {
        let mut state = self.state.lock();
        if state.closed || ticket.generation != state.generation {
            return false;
        }
        state.registry = Some(registry);
        true
    }

    /// Makes every outstanding ticket stale; the stored snapshot stays.
    pub fn invalidate(&self) {
        self.state.lock().generation += 1;
    }

    /// Stops accepting results for good.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.generation += 1;
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    pub fn current(&self) -> Option<Registry> {
        self.state.lock().registry.clone()
    }
}
