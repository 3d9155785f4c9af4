// Copyright (C) 2025 The Hubs-RS Project.
//
// query.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use hubs_registry::{Hub, HubId, HubStatus, VotingWindow};
use serde::Serialize;

/// Row printed for one hub
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubSummary {
    pub hub_id: HubId,
    pub name: String,
    pub city: String,
    pub status: HubStatus,
    pub progress: u64,
    pub votes: u64,
    pub funds_raised: u64,
    pub funding_goal: u64,
}

impl From<&Hub> for HubSummary {
    fn from(hub: &Hub) -> Self {
        Self {
            hub_id: hub.hub_id,
            name: if hub.name.is_empty() {
                "Unnamed".to_string()
            } else {
                hub.name.clone()
            },
            city: hub.city.clone(),
            status: hub.status(),
            progress: hub.progress_percentage(),
            votes: hub.vote_count,
            funds_raised: hub.funds_raised,
            funding_goal: hub.funding_goal,
        }
    }
}

pub fn render_hubs<'a>(
    hubs: impl IntoIterator<Item = &'a Hub>,
    window: &VotingWindow,
    json: bool,
) -> serde_json::Result<String> {
    let rows: Vec<HubSummary> = hubs.into_iter().map(HubSummary::from).collect();
    if json {
        return serde_json::to_string_pretty(&rows);
    }

    let mut out = String::new();
    out.push_str(&format!("voting window: {}\n", describe_window(window)));
    if rows.is_empty() {
        out.push_str("no hubs\n");
        return Ok(out);
    }
    out.push_str(&format!(
        "{:>4}  {:<24} {:<16} {:<8} {:>5} {:>6}  {}\n",
        "ID", "NAME", "CITY", "STATUS", "VOTES", "FUNDED", "RAISED/GOAL"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:<24} {:<16} {:<8} {:>5} {:>5}%  {}/{}\n",
            row.hub_id,
            row.name,
            row.city,
            row.status,
            row.votes,
            row.progress,
            row.funds_raised,
            row.funding_goal
        ));
    }
    Ok(out)
}

fn describe_window(window: &VotingWindow) -> String {
    if !window.is_configured() {
        return "not set".to_string();
    }
    match (window.start_time(), window.end_time()) {
        (Some(start), Some(end)) => format!(
            "{} to {}{}",
            start.to_rfc3339(),
            end.to_rfc3339(),
            if window.is_open_now() { " (open)" } else { "" }
        ),
        _ => format!("{}..{}", window.start, window.end),
    }
}

pub fn render_balance(address: &str, coin_type: &str, balance: u64, json: bool) -> String {
    if json {
        serde_json::json!({
            "address": address,
            "coinType": coin_type,
            "balance": balance.to_string(),
        })
        .to_string()
    } else {
        format!("{address}: {balance} ({coin_type})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubs_registry::{build_hub, Address, RawHub};

    fn hub(name: &str, goal: u64, raised: u64) -> Hub {
        build_hub(&RawHub {
            object_id: Address::ZERO,
            hub_id: 7,
            name: name.as_bytes().to_vec(),
            city: b"Nairobi".to_vec(),
            contact: b"c".to_vec(),
            community_image: Vec::new(),
            latitude: 0,
            longitude: 0,
            funding_goal: goal,
            funds_raised: raised,
            vote_count: 2,
            voters: vec!["0x1".into(), "0x2".into()],
            community_wallet: None,
        })
    }

    #[test]
    fn text_table_lists_hubs() {
        let hubs = vec![hub("Kibera Lab", 1000, 500)];
        let out = render_hubs(&hubs, &VotingWindow::default(), false).unwrap();
        assert!(out.contains("voting window: not set"));
        assert!(out.contains("Kibera Lab"));
        assert!(out.contains("50%"));
        assert!(out.contains("Active"));
    }

    #[test]
    fn json_rows_and_unnamed_hubs() {
        let hubs = vec![hub("", 0, 0)];
        let out = render_hubs(&hubs, &VotingWindow::default(), true).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows[0]["name"], "Unnamed");
        assert_eq!(rows[0]["status"], "Pending");
        assert_eq!(rows[0]["hub_id"], 7);
    }

    #[test]
    fn balance_output() {
        assert_eq!(render_balance("0x1", "0x5::t::T", 9, false), "0x1: 9 (0x5::t::T)");
        assert!(render_balance("0x1", "0x5::t::T", 9, true).contains("\"balance\":\"9\""));
    }
}
