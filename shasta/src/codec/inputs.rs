//! Compact encoding of the `propose` and `prove` call inputs.

use alloy::primitives::{B256, aliases::U48};

use super::{
    CodecError, Result,
    events::{
        pack_bond_instruction, pack_checkpoint, pack_core_state, unpack_bond_instruction,
        unpack_checkpoint, unpack_core_state,
    },
    pack::{Packer, Unpacker, u24_len},
};
use crate::l1::bindings::inbox::{
    ICheckpointStore::Checkpoint,
    IInbox::{Proposal, ProposeInput, ProveInput, TransitionMetadata, TransitionRecord},
};

/// Wire size of a propose input with no proposals, records or checkpoint.
pub const PROPOSE_INPUT_FIXED_BYTES: usize = 103;
/// Extra wire size of a non-empty checkpoint.
pub const CHECKPOINT_BYTES: usize = 70;
/// Wire size of a single proposal.
pub const PROPOSAL_BYTES: usize = 102;
/// Wire size of a transition record without its bond instructions.
pub const TRANSITION_RECORD_FIXED_BYTES: usize = 68;
/// Wire size of a single (proposal, transition, metadata) prove item.
pub const PROVE_ITEM_BYTES: usize = 276;

pub fn calculate_propose_input_size(input: &ProposeInput) -> usize {
    let mut size = PROPOSE_INPUT_FIXED_BYTES;
    if !is_empty_checkpoint(&input.checkpoint) {
        size += CHECKPOINT_BYTES;
    }
    size += input.parentProposals.len() * PROPOSAL_BYTES;
    for record in &input.transitionRecords {
        size += TRANSITION_RECORD_FIXED_BYTES
            + record.bondInstructions.len() * super::events::BOND_INSTRUCTION_BYTES;
    }
    size
}

pub fn calculate_prove_input_size(input: &ProveInput) -> usize {
    6 + input.proposals.len() * PROVE_ITEM_BYTES
}

/// Encodes a propose input into its compact wire format. An all-zero
/// checkpoint is collapsed into a single flag byte.
pub fn encode_propose_input(input: &ProposeInput) -> Result<Vec<u8>> {
    let size = calculate_propose_input_size(input);
    let mut packer = Packer::with_capacity(size);

    packer.pack_u48(input.deadline);
    pack_core_state(&mut packer, &input.coreState);

    let proposals_len = u24_len(input.parentProposals.len())?;
    packer.pack_u24(proposals_len);
    for proposal in &input.parentProposals {
        pack_proposal_timestamp_first(&mut packer, proposal);
    }

    packer.pack_u16(input.blobReference.blobStartIndex);
    packer.pack_u16(input.blobReference.numBlobs);
    packer.pack_u24(input.blobReference.offset);

    let records_len = u24_len(input.transitionRecords.len())?;
    packer.pack_u24(records_len);
    for record in &input.transitionRecords {
        pack_transition_record(&mut packer, record)?;
    }

    if is_empty_checkpoint(&input.checkpoint) {
        packer.pack_u8(0);
    } else {
        packer.pack_u8(1);
        pack_checkpoint(&mut packer, &input.checkpoint);
    }

    packer.pack_u8(input.numForcedInclusions);

    debug_assert_eq!(packer.len(), size);
    Ok(packer.finish())
}

/// Decodes a compactly encoded propose input.
pub fn decode_propose_input(data: &[u8]) -> Result<ProposeInput> {
    let mut unpacker = Unpacker::new(data);

    let deadline = unpacker.read_u48()?;
    let core_state = unpack_core_state(&mut unpacker)?;

    let proposals_len = unpacker.read_u24()?.to::<usize>();
    let mut parent_proposals = Vec::with_capacity(proposals_len);
    for _ in 0..proposals_len {
        parent_proposals.push(unpack_proposal_timestamp_first(&mut unpacker)?);
    }

    let blob_reference = crate::l1::bindings::inbox::LibBlobs::BlobReference {
        blobStartIndex: unpacker.read_u16()?,
        numBlobs: unpacker.read_u16()?,
        offset: unpacker.read_u24()?,
    };

    let records_len = unpacker.read_u24()?.to::<usize>();
    let mut transition_records = Vec::with_capacity(records_len);
    for _ in 0..records_len {
        transition_records.push(unpack_transition_record(&mut unpacker)?);
    }

    let checkpoint = if unpacker.read_u8()? == 1 {
        unpack_checkpoint(&mut unpacker)?
    } else {
        Checkpoint::default()
    };

    let num_forced_inclusions = unpacker.read_u8()?;

    unpacker.finish()?;

    Ok(ProposeInput {
        deadline,
        coreState: core_state,
        parentProposals: parent_proposals,
        blobReference: blob_reference,
        transitionRecords: transition_records,
        checkpoint,
        numForcedInclusions: num_forced_inclusions,
    })
}

/// Encodes a prove input into its compact wire format. The proposal,
/// transition and metadata arrays must have matching lengths.
pub fn encode_prove_input(input: &ProveInput) -> Result<Vec<u8>> {
    if input.proposals.len() != input.transitions.len() {
        return Err(CodecError::ProposalTransitionLengthMismatch {
            proposals: input.proposals.len(),
            transitions: input.transitions.len(),
        });
    }
    if input.metadata.len() != input.transitions.len() {
        return Err(CodecError::MetadataLengthMismatch {
            metadata: input.metadata.len(),
            transitions: input.transitions.len(),
        });
    }

    let size = calculate_prove_input_size(input);
    let mut packer = Packer::with_capacity(size);

    let proposals_len = u24_len(input.proposals.len())?;
    packer.pack_u24(proposals_len);
    for proposal in &input.proposals {
        pack_proposal_proposer_first(&mut packer, proposal);
    }

    packer.pack_u24(proposals_len);
    for transition in &input.transitions {
        super::events::pack_transition(&mut packer, transition);
    }

    // Metadata reuses the transitions length on the wire.
    for metadata in &input.metadata {
        packer.pack_address(&metadata.designatedProver);
        packer.pack_address(&metadata.actualProver);
    }

    debug_assert_eq!(packer.len(), size);
    Ok(packer.finish())
}

/// Decodes a compactly encoded prove input.
pub fn decode_prove_input(data: &[u8]) -> Result<ProveInput> {
    let mut unpacker = Unpacker::new(data);

    let proposals_len = unpacker.read_u24()?.to::<usize>();
    let mut proposals = Vec::with_capacity(proposals_len);
    for _ in 0..proposals_len {
        proposals.push(unpack_proposal_proposer_first(&mut unpacker)?);
    }

    let transitions_len = unpacker.read_u24()?.to::<usize>();
    if transitions_len != proposals_len {
        return Err(CodecError::ProposalTransitionLengthMismatch {
            proposals: proposals_len,
            transitions: transitions_len,
        });
    }
    let mut transitions = Vec::with_capacity(transitions_len);
    for _ in 0..transitions_len {
        transitions.push(super::events::unpack_transition(&mut unpacker)?);
    }

    let mut metadata = Vec::with_capacity(transitions_len);
    for _ in 0..transitions_len {
        metadata.push(TransitionMetadata {
            designatedProver: unpacker.read_address()?,
            actualProver: unpacker.read_address()?,
        });
    }

    unpacker.finish()?;

    Ok(ProveInput {
        proposals,
        transitions,
        metadata,
    })
}

fn is_empty_checkpoint(checkpoint: &Checkpoint) -> bool {
    checkpoint.blockNumber == U48::ZERO
        && checkpoint.blockHash == B256::ZERO
        && checkpoint.stateRoot == B256::ZERO
}

// The propose input stores proposals with the timestamp right after the id,
// while the prove input stores the proposer first.

fn pack_proposal_timestamp_first(packer: &mut Packer, proposal: &Proposal) {
    packer.pack_u48(proposal.id);
    packer.pack_u48(proposal.timestamp);
    packer.pack_u48(proposal.endOfSubmissionWindowTimestamp);
    packer.pack_address(&proposal.proposer);
    packer.pack_b256(&proposal.coreStateHash);
    packer.pack_b256(&proposal.derivationHash);
}

fn unpack_proposal_timestamp_first(unpacker: &mut Unpacker<'_>) -> Result<Proposal> {
    Ok(Proposal {
        id: unpacker.read_u48()?,
        timestamp: unpacker.read_u48()?,
        endOfSubmissionWindowTimestamp: unpacker.read_u48()?,
        proposer: unpacker.read_address()?,
        coreStateHash: unpacker.read_b256()?,
        derivationHash: unpacker.read_b256()?,
    })
}

fn pack_proposal_proposer_first(packer: &mut Packer, proposal: &Proposal) {
    packer.pack_u48(proposal.id);
    packer.pack_address(&proposal.proposer);
    packer.pack_u48(proposal.timestamp);
    packer.pack_u48(proposal.endOfSubmissionWindowTimestamp);
    packer.pack_b256(&proposal.coreStateHash);
    packer.pack_b256(&proposal.derivationHash);
}

fn unpack_proposal_proposer_first(unpacker: &mut Unpacker<'_>) -> Result<Proposal> {
    Ok(Proposal {
        id: unpacker.read_u48()?,
        proposer: unpacker.read_address()?,
        timestamp: unpacker.read_u48()?,
        endOfSubmissionWindowTimestamp: unpacker.read_u48()?,
        coreStateHash: unpacker.read_b256()?,
        derivationHash: unpacker.read_b256()?,
    })
}

fn pack_transition_record(packer: &mut Packer, record: &TransitionRecord) -> Result<()> {
    packer.pack_u8(record.span);
    let bonds_len = u24_len(record.bondInstructions.len())?;
    packer.pack_u24(bonds_len);
    for instruction in &record.bondInstructions {
        pack_bond_instruction(packer, instruction);
    }
    packer.pack_b256(&record.transitionHash);
    packer.pack_b256(&record.checkpointHash);
    Ok(())
}

fn unpack_transition_record(unpacker: &mut Unpacker<'_>) -> Result<TransitionRecord> {
    let span = unpacker.read_u8()?;
    let bonds_len = unpacker.read_u24()?.to::<usize>();
    let mut bond_instructions = Vec::with_capacity(bonds_len);
    for _ in 0..bonds_len {
        bond_instructions.push(unpack_bond_instruction(unpacker, false)?);
    }
    Ok(TransitionRecord {
        span,
        bondInstructions: bond_instructions,
        transitionHash: unpacker.read_b256()?,
        checkpointHash: unpacker.read_b256()?,
    })
}
