//! Struct hashing helpers.
//!
//! Two schemes exist on chain and both are mirrored here: the standard one
//! hashes the ABI encoding of a struct, the optimized one hashes packed
//! 32-byte words the way the gas-optimized hashing library does. The two
//! schemes produce different digests for the same value.

use alloy::{
    primitives::{Address, B256, FixedBytes, U256, aliases::U48, keccak256},
    sol_types::SolValue,
};

use crate::l1::bindings::inbox::{
    ICheckpointStore::Checkpoint,
    IInbox::{CoreState, Derivation, Proposal, Transition, TransitionRecord},
    LibBlobs::BlobSlice,
    LibBonds::BondInstruction,
};

// Standard scheme: keccak256(abi.encode(value)).

pub fn hash_checkpoint(checkpoint: &Checkpoint) -> B256 {
    keccak256(checkpoint.abi_encode())
}

pub fn hash_core_state(core_state: &CoreState) -> B256 {
    keccak256(core_state.abi_encode())
}

pub fn hash_derivation(derivation: &Derivation) -> B256 {
    keccak256(derivation.abi_encode())
}

pub fn hash_proposal(proposal: &Proposal) -> B256 {
    keccak256(proposal.abi_encode())
}

pub fn hash_transition(transition: &Transition) -> B256 {
    keccak256(transition.abi_encode())
}

pub fn hash_transitions_array(transitions: &[Transition]) -> B256 {
    keccak256(transitions.to_vec().abi_encode())
}

/// The transition record hash is truncated to 26 bytes on chain to fit the
/// ring buffer slot next to the finalization deadline.
pub fn hash_transition_record(record: &TransitionRecord) -> FixedBytes<26> {
    truncate26(keccak256(record.abi_encode()))
}

// Optimized scheme: word-concatenation keccaks over packed fields.

pub fn hash_checkpoint_optimized(checkpoint: &Checkpoint) -> B256 {
    efficient_hash(&[
        u48_word(checkpoint.blockNumber),
        checkpoint.blockHash,
        checkpoint.stateRoot,
    ])
}

pub fn hash_core_state_optimized(core_state: &CoreState) -> B256 {
    efficient_hash(&[
        u48_word(core_state.nextProposalId),
        u48_word(core_state.nextProposalBlockId),
        u48_word(core_state.lastFinalizedProposalId),
        core_state.lastFinalizedTransitionHash,
        core_state.bondInstructionsHash,
    ])
}

pub fn hash_proposal_optimized(proposal: &Proposal) -> B256 {
    // id, timestamp and endOfSubmissionWindowTimestamp are 48-bit values
    // packed back to back into the first 18 bytes of one word.
    let packed = (u48_u256(proposal.id) << 208)
        | (u48_u256(proposal.timestamp) << 160)
        | (u48_u256(proposal.endOfSubmissionWindowTimestamp) << 112);
    efficient_hash(&[
        B256::from(packed),
        address_word(&proposal.proposer),
        proposal.coreStateHash,
        proposal.derivationHash,
    ])
}

pub fn hash_derivation_optimized(derivation: &Derivation) -> B256 {
    // originBlockNumber (48 bits), isForcedInclusion (8 bits) and
    // basefeeSharingPctg (8 bits) occupy the first 8 bytes of one word.
    let packed = (u48_u256(derivation.originBlockNumber) << 16)
        | (U256::from(u8::from(derivation.isForcedInclusion)) << 8)
        | U256::from(derivation.basefeeSharingPctg);
    efficient_hash(&[
        B256::from(packed << 192),
        derivation.originBlockHash,
        hash_blob_slice(&derivation.blobSlice),
    ])
}

pub fn hash_transition_optimized(transition: &Transition) -> B256 {
    efficient_hash(&[
        transition.proposalHash,
        transition.parentTransitionHash,
        hash_checkpoint_optimized(&transition.checkpoint),
    ])
}

pub fn hash_transitions_array_optimized(transitions: &[Transition]) -> B256 {
    if transitions.is_empty() {
        return empty_bytes_hash();
    }
    let mut buffer = Vec::with_capacity(32 + transitions.len() * 32);
    buffer.extend_from_slice(len_word(transitions.len()).as_slice());
    for transition in transitions {
        buffer.extend_from_slice(hash_transition_optimized(transition).as_slice());
    }
    keccak256(&buffer)
}

pub fn hash_transition_record_optimized(record: &TransitionRecord) -> FixedBytes<26> {
    let full = efficient_hash(&[
        B256::from(U256::from(record.span)),
        hash_bond_instructions_array(&record.bondInstructions),
        record.transitionHash,
        record.checkpointHash,
    ]);
    truncate26(full)
}

/// Composite key under which a transition record is stored in the inbox.
pub fn compose_transition_key(proposal_id: U48, parent_transition_hash: B256) -> B256 {
    efficient_hash(&[u48_word(proposal_id), parent_transition_hash])
}

/// Folds a bond instruction into the running bond instructions hash.
/// Instructions with a zero proposal id or a `NONE` bond type leave the
/// accumulator unchanged.
pub fn aggregate_bond_instruction(
    bond_instructions_hash: B256,
    instruction: &BondInstruction,
) -> B256 {
    if instruction.proposalId == U48::ZERO || instruction.bondType == 0 {
        bond_instructions_hash
    } else {
        keccak256((bond_instructions_hash, instruction.clone()).abi_encode())
    }
}

fn hash_blob_slice(blob_slice: &BlobSlice) -> B256 {
    let blob_hashes_hash = if blob_slice.blobHashes.is_empty() {
        empty_bytes_hash()
    } else {
        let mut buffer = Vec::with_capacity(32 + blob_slice.blobHashes.len() * 32);
        buffer.extend_from_slice(len_word(blob_slice.blobHashes.len()).as_slice());
        for hash in &blob_slice.blobHashes {
            buffer.extend_from_slice(hash.as_slice());
        }
        keccak256(&buffer)
    };

    efficient_hash(&[
        blob_hashes_hash,
        B256::from(U256::from(blob_slice.offset.to::<u32>())),
        u48_word(blob_slice.timestamp),
    ])
}

fn hash_bond_instructions_array(instructions: &[BondInstruction]) -> B256 {
    if instructions.is_empty() {
        return empty_bytes_hash();
    }
    let mut buffer = Vec::with_capacity(32 + instructions.len() * 32);
    buffer.extend_from_slice(len_word(instructions.len()).as_slice());
    for instruction in instructions {
        buffer.extend_from_slice(hash_bond_instruction(instruction).as_slice());
    }
    keccak256(&buffer)
}

fn hash_bond_instruction(instruction: &BondInstruction) -> B256 {
    efficient_hash(&[
        u48_word(instruction.proposalId),
        B256::from(U256::from(instruction.bondType)),
        address_word(&instruction.payer),
        address_word(&instruction.payee),
    ])
}

fn efficient_hash(words: &[B256]) -> B256 {
    let mut buffer = Vec::with_capacity(words.len() * 32);
    for word in words {
        buffer.extend_from_slice(word.as_slice());
    }
    keccak256(&buffer)
}

fn empty_bytes_hash() -> B256 {
    keccak256([])
}

fn u48_u256(value: U48) -> U256 {
    U256::from(value.to::<u64>())
}

fn u48_word(value: U48) -> B256 {
    B256::from(u48_u256(value))
}

fn address_word(address: &Address) -> B256 {
    B256::left_padding_from(address.as_slice())
}

fn len_word(len: usize) -> B256 {
    B256::from(U256::from(len))
}

fn truncate26(hash: B256) -> FixedBytes<26> {
    FixedBytes::<26>::from_slice(&hash.as_slice()[..26])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_factory::PayloadFactory;
    use alloy::primitives::aliases::U24;

    #[test]
    fn empty_transitions_array_hashes_to_empty_bytes() {
        assert_eq!(hash_transitions_array_optimized(&[]), keccak256([]));
    }

    #[test]
    fn optimized_checkpoint_hash_matches_manual_word_layout() {
        let mut factory = PayloadFactory::new(0xA5A5);
        let checkpoint = factory.checkpoint();

        let mut buffer = [0u8; 96];
        buffer[..32]
            .copy_from_slice(U256::from(checkpoint.blockNumber.to::<u64>()).to_be_bytes::<32>().as_slice());
        buffer[32..64].copy_from_slice(checkpoint.blockHash.as_slice());
        buffer[64..].copy_from_slice(checkpoint.stateRoot.as_slice());

        assert_eq!(hash_checkpoint_optimized(&checkpoint), keccak256(buffer));
    }

    #[test]
    fn standard_and_optimized_schemes_differ() {
        let mut factory = PayloadFactory::new(0xD1FF);
        let checkpoint = factory.checkpoint();
        assert_ne!(
            hash_checkpoint(&checkpoint),
            hash_checkpoint_optimized(&checkpoint)
        );

        let transition = factory.transition();
        assert_ne!(
            hash_transition(&transition),
            hash_transition_optimized(&transition)
        );
    }

    #[test]
    fn transition_record_hash_is_truncated_keccak() {
        let mut factory = PayloadFactory::new(0x26_26);
        let record = factory.transition_record();
        let full = keccak256(record.abi_encode());
        assert_eq!(
            hash_transition_record(&record).as_slice(),
            &full.as_slice()[..26]
        );
    }

    #[test]
    fn transitions_array_hash_is_order_sensitive() {
        let mut factory = PayloadFactory::new(0x04DE);
        let a = factory.transition();
        let b = factory.transition();
        assert_ne!(
            hash_transitions_array_optimized(&[a.clone(), b.clone()]),
            hash_transitions_array_optimized(&[b, a])
        );
    }

    #[test]
    fn aggregate_skips_non_effective_instructions() {
        let mut factory = PayloadFactory::new(0xB0BD);
        let acc = B256::repeat_byte(0x42);

        let mut skipped = factory.bond_instruction();
        skipped.proposalId = U48::ZERO;
        assert_eq!(aggregate_bond_instruction(acc, &skipped), acc);

        let mut none_type = factory.bond_instruction();
        none_type.bondType = 0;
        assert_eq!(aggregate_bond_instruction(acc, &none_type), acc);

        let mut effective = factory.bond_instruction();
        effective.proposalId = U48::from(1u64);
        effective.bondType = 1;
        assert_ne!(aggregate_bond_instruction(acc, &effective), acc);
    }

    #[test]
    fn blob_slice_offset_feeds_the_derivation_hash() {
        let mut factory = PayloadFactory::new(0xB10B);
        let mut derivation = factory.derivation();
        let base = hash_derivation_optimized(&derivation);
        derivation.blobSlice.offset = derivation.blobSlice.offset ^ U24::from(1u32);
        assert_ne!(hash_derivation_optimized(&derivation), base);
    }
}
