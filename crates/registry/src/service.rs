// Copyright (C) 2025 The Hubs-RS Project.
//
// service.rs file belongs to the hubs-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! High level client for one deployed registry.
//!
//! Each mutation reads what it needs (concurrently when there is more than
//! one read), runs the local guards, builds the payload, submits it, and
//! then re-fetches the registry instead of patching local state.

use crate::address::{Address, ObjectId};
use crate::error::{HubError, HubResult};
use crate::fetcher::RegistryFetcher;
use crate::hub::{Hub, HubId};
use crate::registry::Registry;
use crate::signer::TransactionSigner;
use crate::submitter::{SubmissionReceipt, TransactionSubmitter};
use crate::transaction::{ProposalForm, TransactionBuilder, TransactionPayload};
use crate::view::RegistryView;
use hubs_config::HubsConfig;
use hubs_rpc_client::RpcClient;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a confirmed mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub receipt: SubmissionReceipt,
    /// Registry as re-read after the mutation; `None` when that read failed
    pub registry: Option<Registry>,
}

impl MutationOutcome {
    pub fn digest(&self) -> &str {
        &self.receipt.digest
    }
}

/// Reads and mutates one registry through a node and an external signer
#[derive(Debug, Clone)]
pub struct HubRegistryClient {
    fetcher: RegistryFetcher,
    builder: TransactionBuilder,
    submitter: TransactionSubmitter,
    registry_id: ObjectId,
    coin_type: String,
}

impl HubRegistryClient {
    pub fn new(rpc_client: Arc<RpcClient>, config: &HubsConfig) -> HubResult<Self> {
        let builder = TransactionBuilder::new(&config.contract)?;
        let registry_id = *builder.registry_id();

        Ok(Self {
            fetcher: RegistryFetcher::new(Arc::clone(&rpc_client)),
            submitter: TransactionSubmitter::new(rpc_client, config.submission.clone()),
            builder,
            registry_id,
            coin_type: config.contract.token_coin_type.clone(),
        })
    }

    pub fn registry_id(&self) -> &ObjectId {
        &self.registry_id
    }

    pub fn builder(&self) -> &TransactionBuilder {
        &self.builder
    }

    pub fn submitter(&self) -> &TransactionSubmitter {
        &self.submitter
    }

    pub async fn registry(&self) -> HubResult<Registry> {
        let raw = self.fetcher.fetch_registry(&self.registry_id).await?;
        Ok(Registry::from_raw(raw))
    }

    /// Hubs with at least one vote, in registry order
    pub async fn voted_hubs(&self) -> HubResult<Vec<Hub>> {
        let registry = self.registry().await?;
        Ok(registry.voted_hubs().into_iter().cloned().collect())
    }

    /// Balance of the configured token held by `owner`
    pub async fn token_balance(&self, owner: &Address) -> HubResult<u64> {
        self.fetcher.fetch_token_balance(owner, &self.coin_type).await
    }

    /// Fetches the registry into `view` unless the view moved on meanwhile.
    /// Returns whether the result was applied.
    pub async fn refresh_view(&self, view: &RegistryView) -> HubResult<bool> {
        let ticket = view.begin_refresh();
        let registry = self.registry().await?;
        let applied = view.apply(ticket, registry);
        if !applied {
            debug!(target: "hubs::client", "discarded stale registry refresh");
        }
        Ok(applied)
    }

    async fn registry_and_balance(&self, owner: &Address) -> HubResult<(Registry, u64)> {
        futures::try_join!(self.registry(), self.token_balance(owner))
    }

    fn find_hub(registry: &Registry, hub_id: HubId) -> HubResult<&Hub> {
        registry
            .find_hub(hub_id)
            .ok_or(HubError::HubNotFound(hub_id))
    }

    /// Submits `payload` and re-reads the registry on success.
    async fn submit_and_reconcile(
        &self,
        payload: TransactionPayload,
        signer: &dyn TransactionSigner,
    ) -> HubResult<MutationOutcome> {
        let receipt = self.submitter.submit(&payload, signer).await?;

        let registry = match self.registry().await {
            Ok(registry) => Some(registry),
            Err(err) => {
                warn!(
                    target: "hubs::client",
                    digest = %receipt.digest,
                    error = %err,
                    "registry re-fetch failed after confirmed mutation"
                );
                None
            }
        };
        info!(
            target: "hubs::client",
            action = %payload.action_key(),
            digest = %receipt.digest,
            reconciled = registry.is_some(),
            "mutation complete"
        );

        Ok(MutationOutcome { receipt, registry })
    }

    /// Creates a new registry object. The configured registry is not
    /// re-read since the new object has its own id.
    pub async fn create_registry(
        &self,
        signer: &dyn TransactionSigner,
        min_propose: u64,
        min_vote: u64,
    ) -> HubResult<MutationOutcome> {
        let payload = self.builder.new_registry(min_propose, min_vote)?;
        let receipt = self.submitter.submit(&payload, signer).await?;
        info!(target: "hubs::client", digest = %receipt.digest, "registry created");
        Ok(MutationOutcome {
            receipt,
            registry: None,
        })
    }

    pub async fn propose_hub(
        &self,
        signer: &dyn TransactionSigner,
        form: &ProposalForm,
    ) -> HubResult<MutationOutcome> {
        let (registry, balance) = self.registry_and_balance(&signer.address()).await?;
        if balance < registry.min_propose {
            return Err(HubError::InsufficientBalance {
                required: registry.min_propose,
                available: balance,
            });
        }

        let payload = self.builder.propose_hub(form, balance)?;
        self.submit_and_reconcile(payload, signer).await
    }

    pub async fn vote(
        &self,
        signer: &dyn TransactionSigner,
        hub_id: HubId,
    ) -> HubResult<MutationOutcome> {
        let voter = signer.address();
        let (registry, balance) = self.registry_and_balance(&voter).await?;
        Self::find_hub(&registry, hub_id)?.ensure_can_vote(
            &voter.to_string(),
            balance,
            registry.min_vote,
        )?;

        let payload = self.builder.vote_for_hub(hub_id, balance)?;
        self.submit_and_reconcile(payload, signer).await
    }

    pub async fn fund(
        &self,
        signer: &dyn TransactionSigner,
        hub_id: HubId,
        amount: u64,
    ) -> HubResult<MutationOutcome> {
        let payload = self.builder.fund_hub(hub_id, amount)?;
        let registry = self.registry().await?;
        Self::find_hub(&registry, hub_id)?.ensure_can_fund(amount)?;

        self.submit_and_reconcile(payload, signer).await
    }

    pub async fn set_funding_details(
        &self,
        signer: &dyn TransactionSigner,
        hub_id: HubId,
        funding_goal: u64,
        community_wallet: &str,
    ) -> HubResult<MutationOutcome> {
        let payload = self
            .builder
            .set_funding_details(hub_id, funding_goal, community_wallet)?;
        let registry = self.registry().await?;
        Self::find_hub(&registry, hub_id)?;

        self.submit_and_reconcile(payload, signer).await
    }

    pub async fn set_voting_window(
        &self,
        signer: &dyn TransactionSigner,
        start: u64,
        end: u64,
    ) -> HubResult<MutationOutcome> {
        let payload = self.builder.set_global_voting_window(start, end)?;
        self.submit_and_reconcile(payload, signer).await
    }

    /// Closes voting; the winner is available through
    /// [`SubmissionReceipt::winner_hub_id`].
    pub async fn finalize_voting(
        &self,
        signer: &dyn TransactionSigner,
    ) -> HubResult<MutationOutcome> {
        let payload = self.builder.finalize_voting()?;
        let outcome = self.submit_and_reconcile(payload, signer).await?;
        match outcome.receipt.winner_hub_id() {
            Some(winner) => info!(target: "hubs::client", %winner, "voting finalized"),
            None => warn!(
                target: "hubs::client",
                digest = %outcome.digest(),
                "finalize emitted no winner"
            ),
        }
        Ok(outcome)
    }
}
