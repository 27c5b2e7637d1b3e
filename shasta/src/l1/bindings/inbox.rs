use alloy::sol;

sol!(

#[sol(all_derives)]
library LibBlobs {
    /// @notice Represents a segment of data stored in consecutive blobs of
    /// the proposing transaction.
    struct BlobReference {
        /// @notice The starting index of the blob.
        uint16 blobStartIndex;
        /// @notice The number of blobs.
        uint16 numBlobs;
        /// @notice The field-element offset within the blob data.
        uint24 offset;
    }

    /// @notice Represents a frame of data that is stored in multiple blobs.
    struct BlobSlice {
        /// @notice The blobs containing the proposal's content.
        bytes32[] blobHashes;
        /// @notice The byte offset of the proposal's content in the containing blobs.
        uint24 offset;
        /// @notice The timestamp when the frame was created.
        uint48 timestamp;
    }
}


#[sol(all_derives)]
library LibBonds {
    /// @notice A stake transfer obligation between a payer and a payee tied
    /// to a proposal. The bond type is 0 (none), 1 (provability) or 2
    /// (liveness).
    struct BondInstruction {
        uint48 proposalId;
        uint8 bondType;
        address payer;
        address payee;
    }
}


#[sol(rpc, all_derives)]
interface ICheckpointStore {
    /// @notice Represents a synced checkpoint
    struct Checkpoint {
        uint48 blockNumber;
        /// @notice The block hash for the end (last) L2 block in this proposal.
        bytes32 blockHash;
        /// @notice The state root for the end (last) L2 block in this proposal.
        bytes32 stateRoot;
    }

    /// @notice Emitted when a checkpoint is saved
    event CheckpointSaved(uint48 indexed blockNumber, bytes32 blockHash, bytes32 stateRoot);

    /// @notice Gets a checkpoint by offset. Offset 0 is the last checkpoint,
    /// 1 the second last, etc.
    function getCheckpoint(uint48 _offset) external view returns (Checkpoint memory);

    /// @notice Gets the latest checkpoint number
    function getLatestCheckpointBlockNumber() external view returns (uint48);

    /// @notice Gets the number of checkpoints
    function getNumberOfCheckpoints() external view returns (uint48);
}


#[sol(rpc, all_derives)]
interface IInbox {
    /// @notice Configuration struct for Inbox constructor parameters
    struct Config {
        /// @notice The codec used for encoding and hashing
        address codec;
        /// @notice The token used for bonds
        address bondToken;
        /// @notice The proof verifier contract
        address proofVerifier;
        /// @notice The proposer checker contract
        address proposerChecker;
        /// @notice The proving window in seconds
        uint48 provingWindow;
        /// @notice The extended proving window in seconds
        uint48 extendedProvingWindow;
        /// @notice The maximum number of finalized proposals in one block
        uint256 maxFinalizationCount;
        /// @notice The finalization grace period in seconds
        uint48 finalizationGracePeriod;
        /// @notice The ring buffer size for storing proposal hashes
        uint256 ringBufferSize;
        /// @notice The percentage of basefee paid to coinbase
        uint8 basefeeSharingPctg;
        /// @notice The minimum number of forced inclusions the proposer must
        /// process when they are due
        uint256 minForcedInclusionCount;
        /// @notice The delay for forced inclusions measured in seconds
        uint16 forcedInclusionDelay;
        /// @notice The fee for forced inclusions in Gwei
        uint64 forcedInclusionFeeInGwei;
        /// @notice The maximum number of checkpoints to store in ring buffer
        uint16 maxCheckpointHistory;
    }

    /// @notice Represents the core state of the inbox.
    struct CoreState {
        /// @notice The next proposal ID to be assigned.
        uint48 nextProposalId;
        /// @notice The next proposal block ID to be assigned.
        uint48 nextProposalBlockId;
        /// @notice The ID of the last finalized proposal.
        uint48 lastFinalizedProposalId;
        /// @notice The hash of the last finalized transition.
        bytes32 lastFinalizedTransitionHash;
        /// @notice The hash of all bond instructions.
        bytes32 bondInstructionsHash;
    }

    /// @notice Contains derivation data for a proposal that is not needed
    /// during proving.
    /// @dev This data is hashed and stored in the Proposal struct to reduce
    /// calldata size.
    struct Derivation {
        /// @notice The L1 block number when the proposal was accepted.
        uint48 originBlockNumber;
        /// @notice The hash of the origin block.
        bytes32 originBlockHash;
        /// @notice Whether the proposal originates from a forced inclusion.
        bool isForcedInclusion;
        /// @notice The percentage of base fee paid to coinbase.
        uint8 basefeeSharingPctg;
        /// @notice Blobs that contain the proposal's manifest data.
        LibBlobs.BlobSlice blobSlice;
    }

    /// @notice Represents a proposal for L2 blocks.
    struct Proposal {
        /// @notice Unique identifier for the proposal.
        uint48 id;
        /// @notice The L1 block timestamp when the proposal was accepted.
        uint48 timestamp;
        /// @notice The timestamp of the last slot where the current preconfer can propose.
        uint48 endOfSubmissionWindowTimestamp;
        /// @notice Address of the proposer.
        address proposer;
        /// @notice The hash of the core state after this proposal.
        bytes32 coreStateHash;
        /// @notice Hash of the Derivation struct containing additional proposal data.
        bytes32 derivationHash;
    }

    /// @notice Represents a transition about the state transition of a proposal.
    /// @dev Prover information lives in TransitionMetadata for out-of-order
    /// proving support.
    struct Transition {
        /// @notice The proposal's hash.
        bytes32 proposalHash;
        /// @notice The parent transition's hash, linking the transition to the
        /// transition chain that finalizes the corresponding proposal.
        bytes32 parentTransitionHash;
        /// @notice The end block header containing number, hash, and state root.
        ICheckpointStore.Checkpoint checkpoint;
    }

    /// @notice Metadata about the proving of a transition
    struct TransitionMetadata {
        /// @notice The designated prover for this transition.
        address designatedProver;
        /// @notice The actual prover who submitted the proof.
        address actualProver;
    }

    /// @notice Represents a record of a transition with additional metadata.
    struct TransitionRecord {
        /// @notice The span indicating how many proposals this transition record covers.
        uint8 span;
        /// @notice The bond instructions.
        LibBonds.BondInstruction[] bondInstructions;
        /// @notice The hash of the last transition in the span.
        bytes32 transitionHash;
        /// @notice The hash of the last checkpoint in the span.
        bytes32 checkpointHash;
    }

    /// @notice Input data for the propose function
    struct ProposeInput {
        /// @notice The deadline timestamp for transaction inclusion (0 = no deadline).
        uint48 deadline;
        /// @notice The current core state before this proposal.
        CoreState coreState;
        /// @notice Array of existing proposals for validation (1-2 elements).
        Proposal[] parentProposals;
        /// @notice Blob reference for proposal data.
        LibBlobs.BlobReference blobReference;
        /// @notice Array of transition records for finalization.
        TransitionRecord[] transitionRecords;
        /// @notice The checkpoint for finalization.
        ICheckpointStore.Checkpoint checkpoint;
        /// @notice The number of forced inclusions that the proposer wants to process.
        uint8 numForcedInclusions;
    }

    /// @notice Input data for the prove function
    struct ProveInput {
        /// @notice Array of proposals to prove.
        Proposal[] proposals;
        /// @notice Array of transitions containing proof details.
        Transition[] transitions;
        /// @notice Array of metadata for prover information.
        /// @dev Must have same length as transitions array.
        TransitionMetadata[] metadata;
    }

    /// @notice Payload data emitted in the Proposed event
    struct ProposedEventPayload {
        /// @notice The proposal that was created.
        Proposal proposal;
        /// @notice The derivation data for the proposal.
        Derivation derivation;
        /// @notice The core state after the proposal.
        CoreState coreState;
    }

    /// @notice Payload data emitted in the Proved event
    struct ProvedEventPayload {
        /// @notice The proposal ID that was proven.
        uint48 proposalId;
        /// @notice The transition that was proven.
        Transition transition;
        /// @notice The transition record containing additional metadata.
        TransitionRecord transitionRecord;
        /// @notice The metadata containing prover information.
        TransitionMetadata metadata;
    }

    /// @notice Emitted when a new proposal is proposed.
    /// @param data The encoded ProposedEventPayload
    event Proposed(bytes data);

    /// @notice Emitted when a proof is submitted
    /// @param data The encoded ProvedEventPayload
    event Proved(bytes data);

    /// @notice Emitted when bond instructions are issued
    /// @param instructions The bond instructions that need to be performed.
    event BondInstructed(LibBonds.BondInstruction[] instructions);

    /// @notice Proposes new proposals of L2 blocks.
    /// @param _lookahead The data to post a new lookahead (currently unused).
    /// @param _data The encoded ProposeInput struct.
    function propose(bytes calldata _lookahead, bytes calldata _data) external;

    /// @notice Proves a transition about some properties of a proposal,
    /// including its state transition.
    /// @param _data The encoded ProveInput struct.
    /// @param _proof Validity proof for the transitions.
    function prove(bytes calldata _data, bytes calldata _proof) external;

    /// @notice Returns the proposal hash stored at the proposal's ring buffer slot.
    function getProposalHash(uint48 _proposalId) external view returns (bytes32 proposalHash_);

    /// @notice Returns the transition record hash for a given proposal ID and
    /// parent transition hash.
    /// @return finalizationDeadline_ The timestamp when finalization is enforced.
    /// @return recordHash_ The hash of the transition record.
    function getTransitionRecordHash(
        uint48 _proposalId,
        bytes32 _parentTransitionHash
    )
        external
        view
        returns (uint48 finalizationDeadline_, bytes26 recordHash_);

    /// @notice Returns the configuration parameters of the Inbox contract
    function getConfig() external view returns (Config memory config_);

    /// @notice Returns the bond balance deposited for an account.
    function bondBalance(address _account) external view returns (uint256);
}


#[sol(rpc)]
interface InboxHelper {
    // abi.encode based codecs

    function encodeProposeInput(IInbox.ProposeInput memory _input) external pure returns (bytes memory);
    function decodeProposeInput(bytes calldata _data) external pure returns (IInbox.ProposeInput memory input_);
    function encodeProposedEvent(IInbox.ProposedEventPayload memory _payload) external pure returns (bytes memory);
    function decodeProposedEvent(bytes calldata _data) external pure returns (IInbox.ProposedEventPayload memory payload_);
    function encodeProveInput(IInbox.ProveInput memory _input) external pure returns (bytes memory);
    function decodeProveInput(bytes calldata _data) external pure returns (IInbox.ProveInput memory input_);
    function encodeProvedEvent(IInbox.ProvedEventPayload memory _payload) external pure returns (bytes memory);
    function decodeProvedEvent(bytes calldata _data) external pure returns (IInbox.ProvedEventPayload memory payload_);

    function hashCheckpoint(ICheckpointStore.Checkpoint memory _checkpoint) external pure returns (bytes32);
    function hashCoreState(IInbox.CoreState memory _coreState) external pure returns (bytes32);
    function hashDerivation(IInbox.Derivation memory _derivation) external pure returns (bytes32);
    function hashProposal(IInbox.Proposal memory _proposal) external pure returns (bytes32);
    function hashTransition(IInbox.Transition memory _transition) external pure returns (bytes32);
    function hashTransitionRecord(IInbox.TransitionRecord memory _transitionRecord) external pure returns (bytes26);
    function hashTransitionsArray(IInbox.Transition[] memory _transitions) external pure returns (bytes32);

    // compact (gas optimized) codecs

    function encodeProposeInputOptimized(IInbox.ProposeInput memory _input) external pure returns (bytes memory);
    function decodeProposeInputOptimized(bytes calldata _data) external pure returns (IInbox.ProposeInput memory input_);
    function encodeProposedEventOptimized(IInbox.ProposedEventPayload memory _payload) external pure returns (bytes memory);
    function decodeProposedEventOptimized(bytes calldata _data) external pure returns (IInbox.ProposedEventPayload memory payload_);
    function encodeProveInputOptimized(IInbox.ProveInput memory _input) external pure returns (bytes memory);
    function decodeProveInputOptimized(bytes calldata _data) external pure returns (IInbox.ProveInput memory input_);
    function encodeProvedEventOptimized(IInbox.ProvedEventPayload memory _payload) external pure returns (bytes memory);
    function decodeProvedEventOptimized(bytes calldata _data) external pure returns (IInbox.ProvedEventPayload memory payload_);

    function hashCheckpointOptimized(ICheckpointStore.Checkpoint memory _checkpoint) external pure returns (bytes32);
    function hashCoreStateOptimized(IInbox.CoreState memory _coreState) external pure returns (bytes32);
    function hashDerivationOptimized(IInbox.Derivation memory _derivation) external pure returns (bytes32);
    function hashProposalOptimized(IInbox.Proposal memory _proposal) external pure returns (bytes32);
    function hashTransitionOptimized(IInbox.Transition memory _transition) external pure returns (bytes32);
    function hashTransitionRecordOptimized(IInbox.TransitionRecord memory _transitionRecord) external pure returns (bytes26);
    function hashTransitionsArrayOptimized(IInbox.Transition[] memory _transitions) external pure returns (bytes32);
}

);
