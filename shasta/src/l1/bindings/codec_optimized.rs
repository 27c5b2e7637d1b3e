//! Bindings for the optimized inbox codec contract. This contract binds a
//! newer generation of the inbox struct layouts than [`super::inbox`], so its
//! types live in their own namespace.

use alloy::sol;

sol!(

library LibBlobs {
    struct BlobReference {
        uint16 blobStartIndex;
        uint16 numBlobs;
        uint24 offset;
    }

    struct BlobSlice {
        bytes32[] blobHashes;
        uint24 offset;
        uint48 timestamp;
    }
}


library LibBonds {
    struct BondInstruction {
        uint48 proposalId;
        uint8 bondType;
        address payer;
        address payee;
    }
}


interface ICheckpointStore {
    struct Checkpoint {
        uint48 blockNumber;
        bytes32 blockHash;
        bytes32 stateRoot;
    }
}


interface IInbox {
    /// @notice Represents a source of derivation data within a Derivation
    struct DerivationSource {
        /// @notice Whether this source is from a forced inclusion.
        bool isForcedInclusion;
        /// @notice Blobs that contain the source's manifest data.
        LibBlobs.BlobSlice blobSlice;
    }

    struct Derivation {
        /// @notice The L1 block number when the proposal was accepted.
        uint48 originBlockNumber;
        /// @notice The hash of the origin block.
        bytes32 originBlockHash;
        /// @notice The percentage of base fee paid to coinbase.
        uint8 basefeeSharingPctg;
        /// @notice Array of derivation sources, each regular or forced inclusion.
        DerivationSource[] sources;
    }

    struct Proposal {
        uint48 id;
        uint48 timestamp;
        uint48 endOfSubmissionWindowTimestamp;
        address proposer;
        bytes32 derivationHash;
    }

    struct CoreState {
        uint48 nextProposalId;
        uint48 lastProposalBlockId;
        uint48 lastFinalizedProposalId;
        uint48 lastFinalizedTimestamp;
        uint48 lastCheckpointTimestamp;
        bytes32 lastFinalizedTransitionHash;
    }

    struct Transition {
        bytes32 proposalHash;
        bytes32 parentTransitionHash;
        ICheckpointStore.Checkpoint checkpoint;
        address designatedProver;
        address actualProver;
    }

    struct ProposeInput {
        uint48 deadline;
        LibBlobs.BlobReference blobReference;
        uint8 numForcedInclusions;
    }

    struct ProveInput {
        Proposal[] proposals;
        Transition[] transitions;
        ICheckpointStore.Checkpoint checkpoint;
    }

    struct ProposedEventPayload {
        Proposal proposal;
        Derivation derivation;
    }

    struct ProvedEventPayload {
        uint48 proposalId;
        Transition transition;
        LibBonds.BondInstruction bondInstruction;
        bytes32 bondSignal;
    }
}


#[sol(rpc)]
contract CodecOptimized {
    error InvalidBondType();
    error LengthExceedsUint16();
    error ProposalTransitionLengthMismatch();

    function decodeProposeInput(bytes calldata _data) external pure returns (IInbox.ProposeInput memory input_);
    function decodeProposedEvent(bytes calldata _data) external pure returns (IInbox.ProposedEventPayload memory payload_);
    function decodeProveInput(bytes calldata _data) external pure returns (IInbox.ProveInput memory input_);
    function decodeProvedEvent(bytes calldata _data) external pure returns (IInbox.ProvedEventPayload memory payload_);
    function encodeProposeInput(IInbox.ProposeInput memory _input) external pure returns (bytes memory encoded_);
    function encodeProposedEvent(IInbox.ProposedEventPayload memory _payload) external pure returns (bytes memory encoded_);
    function encodeProveInput(IInbox.ProveInput memory _input) external pure returns (bytes memory encoded_);
    function encodeProvedEvent(IInbox.ProvedEventPayload memory _payload) external pure returns (bytes memory encoded_);

    function hashCheckpoint(ICheckpointStore.Checkpoint memory _checkpoint) external pure returns (bytes32);
    function hashCoreState(IInbox.CoreState memory _coreState) external pure returns (bytes32);
    function hashDerivation(IInbox.Derivation memory _derivation) external pure returns (bytes32);
    function hashProposal(IInbox.Proposal memory _proposal) external pure returns (bytes32);
    function hashTransition(IInbox.Transition memory _transition) external pure returns (bytes32);
    function hashTransitions(IInbox.Transition[] memory _transitions) external pure returns (bytes32);
}

);
