use alloy::{
    primitives::{Address, B256, Bytes, FixedBytes, TxHash, U256, aliases::U48},
    providers::DynProvider,
};
use anyhow::{Error, anyhow};
use tracing::info;

use super::{
    bindings::{
        codec_optimized::CodecOptimized::{self, CodecOptimizedInstance},
        compose_verifier::ComposeVerifier::{self, ComposeVerifierInstance},
        inbox::{
            IInbox::{self, IInboxInstance},
            InboxHelper::{self, InboxHelperInstance},
        },
    },
    config::{ContractAddresses, EthereumL1Config},
};

/// Typed access to the Shasta contracts deployed on L1.
///
/// All calls go straight through the bound contract instances; RPC failures
/// surface unchanged apart from context about which contract was involved.
pub struct ExecutionLayer {
    provider: DynProvider,
    contract_addresses: ContractAddresses,
    inbox: IInboxInstance<DynProvider>,
    inbox_helper: InboxHelperInstance<DynProvider>,
    codec: CodecOptimizedInstance<DynProvider>,
    compose_verifier: ComposeVerifierInstance<DynProvider>,
}

impl ExecutionLayer {
    pub fn new(provider: DynProvider, contract_addresses: ContractAddresses) -> Self {
        info!(
            "Shasta inbox: {}, codec: {}, compose verifier: {}",
            contract_addresses.inbox, contract_addresses.codec, contract_addresses.compose_verifier,
        );
        let inbox = IInbox::new(contract_addresses.inbox, provider.clone());
        let inbox_helper = InboxHelper::new(contract_addresses.inbox_helper, provider.clone());
        let codec = CodecOptimized::new(contract_addresses.codec, provider.clone());
        let compose_verifier =
            ComposeVerifier::new(contract_addresses.compose_verifier, provider.clone());
        Self {
            provider,
            contract_addresses,
            inbox,
            inbox_helper,
            codec,
            compose_verifier,
        }
    }

    pub fn from_config(config: EthereumL1Config, provider: DynProvider) -> Self {
        Self::new(provider, config.contract_addresses)
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn contract_addresses(&self) -> &ContractAddresses {
        &self.contract_addresses
    }

    /// The bound inbox contract.
    pub fn inbox(&self) -> &IInboxInstance<DynProvider> {
        &self.inbox
    }

    /// The bound inbox helper, for the encode/decode/hash surface not
    /// wrapped below.
    pub fn inbox_helper(&self) -> &InboxHelperInstance<DynProvider> {
        &self.inbox_helper
    }

    /// The bound compose verifier contract.
    pub fn compose_verifier(&self) -> &ComposeVerifierInstance<DynProvider> {
        &self.compose_verifier
    }

    /// The bound optimized codec contract.
    pub fn codec(&self) -> &CodecOptimizedInstance<DynProvider> {
        &self.codec
    }

    pub async fn get_config(&self) -> Result<IInbox::Config, Error> {
        self.inbox
            .getConfig()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getConfig for Inbox: {e}"))
    }

    pub async fn get_proposal_hash(&self, proposal_id: U48) -> Result<B256, Error> {
        self.inbox
            .getProposalHash(proposal_id)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getProposalHash for Inbox: {e}"))
    }

    /// Returns the finalization deadline and the 26-byte transition record
    /// hash stored for the given proposal and parent transition.
    pub async fn get_transition_record_hash(
        &self,
        proposal_id: U48,
        parent_transition_hash: B256,
    ) -> Result<(U48, FixedBytes<26>), Error> {
        let record = self
            .inbox
            .getTransitionRecordHash(proposal_id, parent_transition_hash)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getTransitionRecordHash for Inbox: {e}"))?;
        Ok((record.finalizationDeadline_, record.recordHash_))
    }

    pub async fn get_bond_balance(&self, account: Address) -> Result<U256, Error> {
        self.inbox
            .bondBalance(account)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call bondBalance for Inbox: {e}"))
    }

    /// Builds the calldata for a propose transaction without submitting it.
    pub fn propose_calldata(&self, lookahead: Bytes, data: Bytes) -> Bytes {
        self.inbox.propose(lookahead, data).calldata().clone()
    }

    /// Submits a propose transaction through the provider's wallet and
    /// returns its hash without waiting for inclusion.
    pub async fn propose(&self, lookahead: Bytes, data: Bytes) -> Result<TxHash, Error> {
        let pending = self
            .inbox
            .propose(lookahead, data)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send propose transaction: {e}"))?;
        Ok(*pending.tx_hash())
    }

    /// Builds the calldata for a prove transaction without submitting it.
    pub fn prove_calldata(&self, data: Bytes, proof: Bytes) -> Bytes {
        self.inbox.prove(data, proof).calldata().clone()
    }

    /// Submits a prove transaction through the provider's wallet and returns
    /// its hash without waiting for inclusion.
    pub async fn prove(&self, data: Bytes, proof: Bytes) -> Result<TxHash, Error> {
        let pending = self
            .inbox
            .prove(data, proof)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send prove transaction: {e}"))?;
        Ok(*pending.tx_hash())
    }

    /// Encodes a propose input through the helper contract. The local codec
    /// in [`crate::codec`] produces the same bytes without the RPC call.
    pub async fn encode_propose_input_onchain(
        &self,
        input: IInbox::ProposeInput,
    ) -> Result<Bytes, Error> {
        self.inbox_helper
            .encodeProposeInputOptimized(input)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call encodeProposeInputOptimized: {e}"))
    }

    /// Decodes a proposed event payload through the helper contract.
    pub async fn decode_proposed_event_onchain(
        &self,
        data: Bytes,
    ) -> Result<IInbox::ProposedEventPayload, Error> {
        self.inbox_helper
            .decodeProposedEventOptimized(data)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call decodeProposedEventOptimized: {e}"))
    }

    /// Decodes a proved event payload through the helper contract.
    pub async fn decode_proved_event_onchain(
        &self,
        data: Bytes,
    ) -> Result<IInbox::ProvedEventPayload, Error> {
        self.inbox_helper
            .decodeProvedEventOptimized(data)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call decodeProvedEventOptimized: {e}"))
    }

    pub async fn get_verifier_address(&self, verifier_id: u8) -> Result<Address, Error> {
        self.compose_verifier
            .getVerifierAddress(verifier_id)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getVerifierAddress: {e}"))
    }

    /// Runs the composed proof verification as a read call. A clean return
    /// means the proof is acceptable; verifier rejections surface as revert
    /// errors.
    pub async fn verify_proof(
        &self,
        proposal_age: U256,
        commitment_hash: B256,
        proof: Bytes,
    ) -> Result<(), Error> {
        self.compose_verifier
            .verifyProof(proposal_age, commitment_hash, proof)
            .call()
            .await
            .map_err(|e| anyhow!("Proof verification failed: {e}"))?;
        Ok(())
    }
}
