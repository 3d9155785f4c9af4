// Copyright (C) 2025 The Hubs-RS Project.
//
// lib.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Hubs CLI Library
//!
//! This crate provides the command-line interface for reading the hub
//! registry and preparing unsigned registry calls.

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod args;
pub mod commands;
pub mod config;

pub use args::CliArgs;
