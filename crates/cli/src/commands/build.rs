// Copyright (C) 2025 The Hubs-RS Project.
//
// build.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::args::BuildCommand;
use hubs_registry::{HubResult, ProposalForm, TransactionBuilder, TransactionPayload};

/// Maps a `build` subcommand onto the matching builder call.
pub fn build_payload(
    builder: &TransactionBuilder,
    command: &BuildCommand,
) -> HubResult<TransactionPayload> {
    match command {
        BuildCommand::NewRegistry {
            min_propose,
            min_vote,
        } => builder.new_registry(*min_propose, *min_vote),
        BuildCommand::ProposeHub {
            name,
            city,
            contact,
            latitude,
            longitude,
            image,
            caller_balance,
        } => {
            let form = ProposalForm {
                name: name.clone(),
                city: city.clone(),
                contact: contact.clone(),
                community_image: image.clone(),
                latitude: *latitude,
                longitude: *longitude,
            };
            builder.propose_hub(&form, *caller_balance)
        }
        BuildCommand::VoteForHub {
            hub_id,
            caller_balance,
        } => builder.vote_for_hub(*hub_id, *caller_balance),
        BuildCommand::FundHub { hub_id, amount } => builder.fund_hub(*hub_id, *amount),
        BuildCommand::SetFundingDetails {
            hub_id,
            funding_goal,
            wallet,
        } => builder.set_funding_details(*hub_id, *funding_goal, wallet),
        BuildCommand::SetVotingWindow { start, end } => {
            builder.set_global_voting_window(*start, *end)
        }
        BuildCommand::FinalizeVoting => builder.finalize_voting(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CliArgs, Command};
    use clap::Parser;
    use hubs_config::ContractConfig;
    use hubs_registry::HubError;

    fn builder() -> TransactionBuilder {
        TransactionBuilder::new(&ContractConfig {
            package_id: "0x2a".into(),
            module_name: "hub_registry".into(),
            registry_id: "0x3b".into(),
            ..ContractConfig::default()
        })
        .unwrap()
    }

    fn build(argv: &[&str]) -> HubResult<TransactionPayload> {
        let mut full = vec!["hubs-cli", "build"];
        full.extend_from_slice(argv);
        match CliArgs::try_parse_from(full).unwrap().command {
            Command::Build(command) => build_payload(&builder(), &command),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn propose_from_flags() {
        let payload = build(&[
            "propose-hub",
            "--name",
            "Thames Makers",
            "--city",
            "London",
            "--contact",
            "hello@example.org",
            "--latitude",
            "51.5074",
            "--longitude",
            "0.1278",
            "--caller-balance",
            "250",
        ])
        .unwrap();

        assert_eq!(payload.call.target.function, "propose_hub");
        let json = payload.to_json();
        assert_eq!(json["arguments"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn negative_coordinate_is_rejected_by_builder() {
        let err = build(&[
            "propose-hub",
            "--name",
            "Harbour",
            "--city",
            "Sydney",
            "--contact",
            "c",
            "--latitude",
            "-33.8688",
            "--longitude",
            "151.2093",
            "--caller-balance",
            "250",
        ])
        .unwrap_err();
        assert!(matches!(err, HubError::Validation(_)));
    }

    #[test]
    fn negative_hub_id_fails_to_parse() {
        let result =
            CliArgs::try_parse_from(["hubs-cli", "build", "fund-hub", "-1", "--amount", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn window_and_finalize() {
        assert!(build(&["set-voting-window", "--start", "5", "--end", "4"]).is_err());
        let payload = build(&["set-voting-window", "--start", "4", "--end", "5"]).unwrap();
        assert_eq!(payload.call.arguments.len(), 3);
        assert_eq!(build(&["finalize-voting"]).unwrap().call.arguments.len(), 1);
    }
}
