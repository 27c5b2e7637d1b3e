//! Seeded random payload generation for codec tests.

use alloy::primitives::{
    Address, B256,
    aliases::{U24, U48},
};
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

use super::BondType;
use crate::l1::bindings::inbox::{
    ICheckpointStore::Checkpoint,
    IInbox::{
        CoreState, Derivation, Proposal, ProposeInput, ProposedEventPayload, ProveInput,
        ProvedEventPayload, Transition, TransitionMetadata, TransitionRecord,
    },
    LibBlobs::{BlobReference, BlobSlice},
    LibBonds::BondInstruction,
};

pub(crate) struct PayloadFactory {
    rng: StdRng,
}

impl PayloadFactory {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn u48(&mut self) -> U48 {
        U48::from(self.rng.next_u64() & ((1 << 48) - 1))
    }

    fn u24(&mut self) -> U24 {
        U24::from(self.rng.next_u32() & ((1 << 24) - 1))
    }

    fn b256(&mut self) -> B256 {
        let mut buf = [0u8; 32];
        self.rng.fill_bytes(&mut buf);
        B256::from(buf)
    }

    fn address(&mut self) -> Address {
        let mut buf = [0u8; 20];
        self.rng.fill_bytes(&mut buf);
        Address::from_slice(&buf)
    }

    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        Checkpoint {
            blockNumber: self.u48(),
            blockHash: self.b256(),
            stateRoot: self.b256(),
        }
    }

    fn blob_slice(&mut self) -> BlobSlice {
        let blob_count = self.rng.random_range(0..=3);
        BlobSlice {
            blobHashes: (0..blob_count).map(|_| self.b256()).collect(),
            offset: self.u24(),
            timestamp: self.u48(),
        }
    }

    pub(crate) fn bond_instruction(&mut self) -> BondInstruction {
        BondInstruction {
            proposalId: self.u48(),
            bondType: self.rng.random_range(0..=BondType::MAX),
            payer: self.address(),
            payee: self.address(),
        }
    }

    pub(crate) fn core_state(&mut self) -> CoreState {
        CoreState {
            nextProposalId: self.u48(),
            nextProposalBlockId: self.u48(),
            lastFinalizedProposalId: self.u48(),
            lastFinalizedTransitionHash: self.b256(),
            bondInstructionsHash: self.b256(),
        }
    }

    pub(crate) fn proposal(&mut self) -> Proposal {
        Proposal {
            id: self.u48(),
            timestamp: self.u48(),
            endOfSubmissionWindowTimestamp: self.u48(),
            proposer: self.address(),
            coreStateHash: self.b256(),
            derivationHash: self.b256(),
        }
    }

    pub(crate) fn derivation(&mut self) -> Derivation {
        Derivation {
            originBlockNumber: self.u48(),
            originBlockHash: self.b256(),
            isForcedInclusion: self.rng.random_bool(0.5),
            basefeeSharingPctg: self.rng.random(),
            blobSlice: self.blob_slice(),
        }
    }

    pub(crate) fn transition(&mut self) -> Transition {
        Transition {
            proposalHash: self.b256(),
            parentTransitionHash: self.b256(),
            checkpoint: self.checkpoint(),
        }
    }

    pub(crate) fn transition_metadata(&mut self) -> TransitionMetadata {
        TransitionMetadata {
            designatedProver: self.address(),
            actualProver: self.address(),
        }
    }

    pub(crate) fn transition_record(&mut self) -> TransitionRecord {
        let bond_count = self.rng.random_range(0..=4);
        TransitionRecord {
            span: self.rng.random(),
            bondInstructions: (0..bond_count).map(|_| self.bond_instruction()).collect(),
            transitionHash: self.b256(),
            checkpointHash: self.b256(),
        }
    }

    pub(crate) fn proposed_event_payload(&mut self) -> ProposedEventPayload {
        ProposedEventPayload {
            proposal: self.proposal(),
            derivation: self.derivation(),
            coreState: self.core_state(),
        }
    }

    pub(crate) fn proved_event_payload(&mut self) -> ProvedEventPayload {
        ProvedEventPayload {
            proposalId: self.u48(),
            transition: self.transition(),
            transitionRecord: self.transition_record(),
            metadata: self.transition_metadata(),
        }
    }

    pub(crate) fn propose_input(&mut self) -> ProposeInput {
        let proposal_count = self.rng.random_range(1..=2);
        let record_count = self.rng.random_range(0..=3);
        ProposeInput {
            deadline: self.u48(),
            coreState: self.core_state(),
            parentProposals: (0..proposal_count).map(|_| self.proposal()).collect(),
            blobReference: BlobReference {
                blobStartIndex: self.rng.random(),
                numBlobs: self.rng.random(),
                offset: self.u24(),
            },
            transitionRecords: (0..record_count).map(|_| self.transition_record()).collect(),
            checkpoint: self.checkpoint(),
            numForcedInclusions: self.rng.random(),
        }
    }

    pub(crate) fn prove_input(&mut self) -> ProveInput {
        let count = self.rng.random_range(1..=4);
        ProveInput {
            proposals: (0..count).map(|_| self.proposal()).collect(),
            transitions: (0..count).map(|_| self.transition()).collect(),
            metadata: (0..count).map(|_| self.transition_metadata()).collect(),
        }
    }
}
