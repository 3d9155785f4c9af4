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

//! Subcommand implementations. Each returns the text to print so the
//! binary stays a thin dispatcher.

pub mod build;
pub mod query;

pub use build::build_payload;
pub use query::{render_balance, render_hubs, HubSummary};
