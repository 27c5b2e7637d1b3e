//! Compact encoding of the `Proposed` and `Proved` event payloads.

use super::{
    BondType, Result,
    pack::{Packer, Unpacker, u16_len, u24_len},
};
use crate::l1::bindings::inbox::{
    ICheckpointStore::Checkpoint,
    IInbox::{
        CoreState, Derivation, Proposal, ProposedEventPayload, ProvedEventPayload, Transition,
        TransitionMetadata, TransitionRecord,
    },
    LibBlobs::BlobSlice,
    LibBonds::BondInstruction,
};

/// Wire size of a proposed event payload without any blob hashes.
pub const PROPOSED_EVENT_FIXED_BYTES: usize = 236;
/// Wire size of a proved event payload without any bond instructions.
pub const PROVED_EVENT_FIXED_BYTES: usize = 247;
/// Wire size of a single bond instruction.
pub const BOND_INSTRUCTION_BYTES: usize = 47;

pub fn calculate_proposed_event_size(blob_hashes_count: usize) -> usize {
    PROPOSED_EVENT_FIXED_BYTES + blob_hashes_count * 32
}

pub fn calculate_proved_event_size(bond_instructions_count: usize) -> usize {
    PROVED_EVENT_FIXED_BYTES + bond_instructions_count * BOND_INSTRUCTION_BYTES
}

/// Encodes a proposed event payload into its compact wire format.
pub fn encode_proposed_event(payload: &ProposedEventPayload) -> Result<Vec<u8>> {
    let size = calculate_proposed_event_size(payload.derivation.blobSlice.blobHashes.len());
    let mut packer = Packer::with_capacity(size);

    packer.pack_u48(payload.proposal.id);
    packer.pack_address(&payload.proposal.proposer);
    packer.pack_u48(payload.proposal.timestamp);
    packer.pack_u48(payload.proposal.endOfSubmissionWindowTimestamp);

    packer.pack_u48(payload.derivation.originBlockNumber);
    packer.pack_b256(&payload.derivation.originBlockHash);
    packer.pack_bool(payload.derivation.isForcedInclusion);
    packer.pack_u8(payload.derivation.basefeeSharingPctg);

    let blob_hashes_len = u24_len(payload.derivation.blobSlice.blobHashes.len())?;
    packer.pack_u24(blob_hashes_len);
    for hash in &payload.derivation.blobSlice.blobHashes {
        packer.pack_b256(hash);
    }
    packer.pack_u24(payload.derivation.blobSlice.offset);
    packer.pack_u48(payload.derivation.blobSlice.timestamp);

    packer.pack_b256(&payload.proposal.coreStateHash);
    packer.pack_b256(&payload.proposal.derivationHash);

    pack_core_state(&mut packer, &payload.coreState);

    debug_assert_eq!(packer.len(), size);
    Ok(packer.finish())
}

/// Decodes a compactly encoded proposed event payload emitted by the inbox.
pub fn decode_proposed_event(data: &[u8]) -> Result<ProposedEventPayload> {
    let mut unpacker = Unpacker::new(data);

    let id = unpacker.read_u48()?;
    let proposer = unpacker.read_address()?;
    let timestamp = unpacker.read_u48()?;
    let end_of_submission_window_timestamp = unpacker.read_u48()?;

    let origin_block_number = unpacker.read_u48()?;
    let origin_block_hash = unpacker.read_b256()?;
    let is_forced_inclusion = unpacker.read_bool()?;
    let basefee_sharing_pctg = unpacker.read_u8()?;

    let blob_hashes_len = unpacker.read_u24()?.to::<usize>();
    let mut blob_hashes = Vec::with_capacity(blob_hashes_len);
    for _ in 0..blob_hashes_len {
        blob_hashes.push(unpacker.read_b256()?);
    }
    let blob_offset = unpacker.read_u24()?;
    let blob_timestamp = unpacker.read_u48()?;

    let core_state_hash = unpacker.read_b256()?;
    let derivation_hash = unpacker.read_b256()?;

    let core_state = unpack_core_state(&mut unpacker)?;

    unpacker.finish()?;

    Ok(ProposedEventPayload {
        proposal: Proposal {
            id,
            timestamp,
            endOfSubmissionWindowTimestamp: end_of_submission_window_timestamp,
            proposer,
            coreStateHash: core_state_hash,
            derivationHash: derivation_hash,
        },
        derivation: Derivation {
            originBlockNumber: origin_block_number,
            originBlockHash: origin_block_hash,
            isForcedInclusion: is_forced_inclusion,
            basefeeSharingPctg: basefee_sharing_pctg,
            blobSlice: BlobSlice {
                blobHashes: blob_hashes,
                offset: blob_offset,
                timestamp: blob_timestamp,
            },
        },
        coreState: core_state,
    })
}

/// Encodes a proved event payload into its compact wire format.
pub fn encode_proved_event(payload: &ProvedEventPayload) -> Result<Vec<u8>> {
    let size = calculate_proved_event_size(payload.transitionRecord.bondInstructions.len());
    let mut packer = Packer::with_capacity(size);

    packer.pack_u48(payload.proposalId);

    pack_transition(&mut packer, &payload.transition);

    packer.pack_u8(payload.transitionRecord.span);
    packer.pack_b256(&payload.transitionRecord.transitionHash);
    packer.pack_b256(&payload.transitionRecord.checkpointHash);

    packer.pack_address(&payload.metadata.designatedProver);
    packer.pack_address(&payload.metadata.actualProver);

    let bond_instructions_len = u16_len(payload.transitionRecord.bondInstructions.len())?;
    packer.pack_u16(bond_instructions_len);
    for instruction in &payload.transitionRecord.bondInstructions {
        pack_bond_instruction(&mut packer, instruction);
    }

    debug_assert_eq!(packer.len(), size);
    Ok(packer.finish())
}

/// Decodes a compactly encoded proved event payload emitted by the inbox.
/// Bond types above the on-chain maximum are rejected.
pub fn decode_proved_event(data: &[u8]) -> Result<ProvedEventPayload> {
    let mut unpacker = Unpacker::new(data);

    let proposal_id = unpacker.read_u48()?;

    let transition = unpack_transition(&mut unpacker)?;

    let span = unpacker.read_u8()?;
    let transition_hash = unpacker.read_b256()?;
    let checkpoint_hash = unpacker.read_b256()?;

    let metadata = TransitionMetadata {
        designatedProver: unpacker.read_address()?,
        actualProver: unpacker.read_address()?,
    };

    let bond_instructions_len = usize::from(unpacker.read_u16()?);
    let mut bond_instructions = Vec::with_capacity(bond_instructions_len);
    for _ in 0..bond_instructions_len {
        bond_instructions.push(unpack_bond_instruction(&mut unpacker, true)?);
    }

    unpacker.finish()?;

    Ok(ProvedEventPayload {
        proposalId: proposal_id,
        transition,
        transitionRecord: TransitionRecord {
            span,
            bondInstructions: bond_instructions,
            transitionHash: transition_hash,
            checkpointHash: checkpoint_hash,
        },
        metadata,
    })
}

pub(super) fn pack_core_state(packer: &mut Packer, core_state: &CoreState) {
    packer.pack_u48(core_state.nextProposalId);
    packer.pack_u48(core_state.nextProposalBlockId);
    packer.pack_u48(core_state.lastFinalizedProposalId);
    packer.pack_b256(&core_state.lastFinalizedTransitionHash);
    packer.pack_b256(&core_state.bondInstructionsHash);
}

pub(super) fn unpack_core_state(unpacker: &mut Unpacker<'_>) -> Result<CoreState> {
    Ok(CoreState {
        nextProposalId: unpacker.read_u48()?,
        nextProposalBlockId: unpacker.read_u48()?,
        lastFinalizedProposalId: unpacker.read_u48()?,
        lastFinalizedTransitionHash: unpacker.read_b256()?,
        bondInstructionsHash: unpacker.read_b256()?,
    })
}

pub(super) fn pack_transition(packer: &mut Packer, transition: &Transition) {
    packer.pack_b256(&transition.proposalHash);
    packer.pack_b256(&transition.parentTransitionHash);
    pack_checkpoint(packer, &transition.checkpoint);
}

pub(super) fn unpack_transition(unpacker: &mut Unpacker<'_>) -> Result<Transition> {
    Ok(Transition {
        proposalHash: unpacker.read_b256()?,
        parentTransitionHash: unpacker.read_b256()?,
        checkpoint: unpack_checkpoint(unpacker)?,
    })
}

pub(super) fn pack_checkpoint(packer: &mut Packer, checkpoint: &Checkpoint) {
    packer.pack_u48(checkpoint.blockNumber);
    packer.pack_b256(&checkpoint.blockHash);
    packer.pack_b256(&checkpoint.stateRoot);
}

pub(super) fn unpack_checkpoint(unpacker: &mut Unpacker<'_>) -> Result<Checkpoint> {
    Ok(Checkpoint {
        blockNumber: unpacker.read_u48()?,
        blockHash: unpacker.read_b256()?,
        stateRoot: unpacker.read_b256()?,
    })
}

pub(super) fn pack_bond_instruction(packer: &mut Packer, instruction: &BondInstruction) {
    packer.pack_u48(instruction.proposalId);
    packer.pack_u8(instruction.bondType);
    packer.pack_address(&instruction.payer);
    packer.pack_address(&instruction.payee);
}

/// Reads a bond instruction, optionally enforcing the on-chain bond-type bound.
pub(super) fn unpack_bond_instruction(
    unpacker: &mut Unpacker<'_>,
    enforce_type: bool,
) -> Result<BondInstruction> {
    let proposal_id = unpacker.read_u48()?;
    let bond_type = unpacker.read_u8()?;
    if enforce_type {
        BondType::try_from(bond_type)?;
    }
    Ok(BondInstruction {
        proposalId: proposal_id,
        bondType: bond_type,
        payer: unpacker.read_address()?,
        payee: unpacker.read_address()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;
    use crate::codec::test_factory::PayloadFactory;
    use alloy::primitives::{Address, B256, aliases::U48};

    #[test]
    fn proposed_event_round_trips() {
        let mut factory = PayloadFactory::new(0xC0DE_C0DE);
        for _ in 0..12 {
            let payload = factory.proposed_event_payload();
            let encoded = encode_proposed_event(&payload).unwrap();
            assert_eq!(
                encoded.len(),
                calculate_proposed_event_size(payload.derivation.blobSlice.blobHashes.len())
            );
            let decoded = decode_proposed_event(&encoded).unwrap();
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn proved_event_round_trips() {
        let mut factory = PayloadFactory::new(0xBAD_5EED);
        for _ in 0..12 {
            let payload = factory.proved_event_payload();
            let encoded = encode_proved_event(&payload).unwrap();
            assert_eq!(
                encoded.len(),
                calculate_proved_event_size(payload.transitionRecord.bondInstructions.len())
            );
            let decoded = decode_proved_event(&encoded).unwrap();
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn proposed_event_layout_is_pinned() {
        let mut payload = ProposedEventPayload::default();
        payload.proposal.id = U48::from(0x0102_0304_0506u64);
        payload.proposal.proposer = Address::repeat_byte(0xAA);

        let encoded = encode_proposed_event(&payload).unwrap();
        assert_eq!(encoded.len(), PROPOSED_EVENT_FIXED_BYTES);
        assert_eq!(&encoded[0..6], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(&encoded[6..26], Address::repeat_byte(0xAA).as_slice());
        // No blob hashes: the u24 length at offset 78 is zero.
        assert_eq!(&encoded[78..81], &[0x00, 0x00, 0x00]);
    }

    #[test]
    fn proved_event_rejects_invalid_bond_type() {
        let mut payload = ProvedEventPayload::default();
        payload.transitionRecord.bondInstructions.push(BondInstruction {
            proposalId: U48::from(7u64),
            bondType: 9,
            payer: Address::repeat_byte(0x01),
            payee: Address::repeat_byte(0x02),
        });
        let encoded = encode_proved_event(&payload).unwrap();
        assert_eq!(
            decode_proved_event(&encoded),
            Err(CodecError::InvalidBondType(9))
        );
    }

    #[test]
    fn truncated_proved_event_fails() {
        let payload = ProvedEventPayload::default();
        let encoded = encode_proved_event(&payload).unwrap();
        assert!(decode_proved_event(&encoded[..encoded.len() - 1]).is_err());
    }

    #[test]
    fn trailing_bytes_fail_decoding() {
        let payload = ProposedEventPayload::default();
        let mut encoded = encode_proposed_event(&payload).unwrap();
        encoded.push(0x00);
        assert_eq!(
            decode_proposed_event(&encoded),
            Err(CodecError::TrailingBytes(1))
        );
    }

    #[test]
    fn blob_hashes_are_preserved_in_order() {
        let mut payload = ProposedEventPayload::default();
        payload.derivation.blobSlice.blobHashes =
            vec![B256::repeat_byte(0x01), B256::repeat_byte(0x02)];
        let encoded = encode_proposed_event(&payload).unwrap();
        assert_eq!(encoded.len(), calculate_proposed_event_size(2));
        let decoded = decode_proposed_event(&encoded).unwrap();
        assert_eq!(
            decoded.derivation.blobSlice.blobHashes,
            payload.derivation.blobSlice.blobHashes
        );
    }
}
