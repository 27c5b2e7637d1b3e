use alloy::{
    primitives::{Address, Bytes, TxHash, U256, aliases::U48},
    providers::DynProvider,
    rpc::types::Log,
};
use anyhow::{Error, anyhow};
use tracing::info;

use super::bindings::ShastaAnchor::{
    self, Anchored, BlockParams, BlockState, ProposalParams, ProposalState, ShastaAnchorInstance,
};

/// Typed access to the anchor contract deployed on L2.
pub struct L2ExecutionLayer {
    provider: DynProvider,
    anchor: ShastaAnchorInstance<DynProvider>,
}

impl L2ExecutionLayer {
    pub fn new(provider: DynProvider, anchor_address: Address) -> Self {
        info!("Shasta anchor: {}", anchor_address);
        let anchor = ShastaAnchor::new(anchor_address, provider.clone());
        Self { provider, anchor }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// The bound anchor contract, for the surface not wrapped below.
    pub fn anchor(&self) -> &ShastaAnchorInstance<DynProvider> {
        &self.anchor
    }

    pub async fn get_block_state(&self) -> Result<BlockState, Error> {
        self.anchor
            .getBlockState()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getBlockState for Anchor: {e}"))
    }

    pub async fn get_proposal_state(&self) -> Result<ProposalState, Error> {
        self.anchor
            .getProposalState()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getProposalState for Anchor: {e}"))
    }

    pub async fn l1_chain_id(&self) -> Result<u64, Error> {
        self.anchor
            .l1ChainId()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call l1ChainId for Anchor: {e}"))
    }

    pub async fn liveness_bond(&self) -> Result<U256, Error> {
        self.anchor
            .livenessBond()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call livenessBond for Anchor: {e}"))
    }

    pub async fn provability_bond(&self) -> Result<U256, Error> {
        self.anchor
            .provabilityBond()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call provabilityBond for Anchor: {e}"))
    }

    /// The fixed gas budget reserved for the anchor transaction in each L2
    /// block.
    pub async fn anchor_gas_limit(&self) -> Result<u64, Error> {
        self.anchor
            .ANCHOR_GAS_LIMIT()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call ANCHOR_GAS_LIMIT for Anchor: {e}"))
    }

    /// The protocol account that must send anchor transactions.
    pub async fn golden_touch_address(&self) -> Result<Address, Error> {
        self.anchor
            .GOLDEN_TOUCH_ADDRESS()
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call GOLDEN_TOUCH_ADDRESS for Anchor: {e}"))
    }

    /// Resolves the designated prover for a proposal from raw prover
    /// authentication bytes.
    pub async fn get_designated_prover(
        &self,
        proposal_id: U48,
        proposer: Address,
        prover_auth: Bytes,
        current_designated_prover: Address,
    ) -> Result<(bool, Address, U256), Error> {
        let result = self
            .anchor
            .getDesignatedProver(proposal_id, proposer, prover_auth, current_designated_prover)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call getDesignatedProver for Anchor: {e}"))?;
        Ok((
            result.isLowBondProposal_,
            result.designatedProver_,
            result.provingFeeToTransfer_,
        ))
    }

    /// Validates prover authentication and recovers the signer.
    pub async fn validate_prover_auth(
        &self,
        proposal_id: U48,
        proposer: Address,
        prover_auth: Bytes,
    ) -> Result<(Address, U256), Error> {
        let result = self
            .anchor
            .validateProverAuth(proposal_id, proposer, prover_auth)
            .call()
            .await
            .map_err(|e| anyhow!("Failed to call validateProverAuth for Anchor: {e}"))?;
        Ok((result.signer_, result.provingFee_))
    }

    /// Builds the calldata for an anchorV4 transaction without submitting it.
    /// Anchor transactions are assembled and signed out of band by the
    /// golden touch account, so only the calldata is needed here.
    pub fn anchor_v4_calldata(
        &self,
        proposal_params: ProposalParams,
        block_params: BlockParams,
    ) -> Bytes {
        self.anchor
            .anchorV4(proposal_params, block_params)
            .calldata()
            .clone()
    }

    /// Submits an anchorV4 transaction through the provider's wallet and
    /// returns its hash without waiting for inclusion.
    pub async fn anchor_v4(
        &self,
        proposal_params: ProposalParams,
        block_params: BlockParams,
    ) -> Result<TxHash, Error> {
        let pending = self
            .anchor
            .anchorV4(proposal_params, block_params)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send anchorV4 transaction: {e}"))?;
        Ok(*pending.tx_hash())
    }

    /// Decodes an `Anchored` log emitted by the anchor contract.
    pub fn decode_anchored_log(&self, log: &Log) -> Result<Anchored, Error> {
        let event = log
            .log_decode::<Anchored>()
            .map_err(|e| anyhow!("Failed to decode Anchored log: {e}"))?;
        Ok(event.inner.data.clone())
    }
}
