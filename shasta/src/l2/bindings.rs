use alloy::sol;

sol!(

#[sol(all_derives)]
library LibBonds {
    struct BondInstruction {
        uint48 proposalId;
        uint8 bondType;
        address payer;
        address payee;
    }
}


#[sol(rpc, all_derives)]
contract ShastaAnchor {
    /// @notice Prover authentication signed off-chain and carried in the
    /// proposal manifest.
    struct ProverAuth {
        uint48 proposalId;
        address proposer;
        uint256 provingFee;
        bytes signature;
    }

    /// @notice Per-proposal parameters for the anchor transaction.
    struct ProposalParams {
        uint48 proposalId;
        address proposer;
        bytes proverAuth;
        bytes32 bondInstructionsHash;
        LibBonds.BondInstruction[] bondInstructions;
    }

    /// @notice Per-block parameters for the anchor transaction.
    struct BlockParams {
        uint16 blockIndex;
        uint48 anchorBlockNumber;
        bytes32 anchorBlockHash;
        bytes32 anchorStateRoot;
    }

    struct BlockState {
        uint48 anchorBlockNumber;
        bytes32 ancestorsHash;
    }

    struct ProposalState {
        bytes32 bondInstructionsHash;
        address designatedProver;
        bool isLowBondProposal;
    }

    event Anchored(
        bytes32 bondInstructionsHash,
        address designatedProver,
        bool isLowBondProposal,
        uint48 anchorBlockNumber,
        bytes32 ancestorsHash
    );

    event OwnershipTransferStarted(address indexed previousOwner, address indexed newOwner);

    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);

    event Withdrawn(address token, address to, uint256 amount);

    error AncestorsHashMismatch();
    error BondInstructionsHashMismatch();
    error ETH_TRANSFER_FAILED();
    error InvalidAddress();
    error InvalidAnchorBlockNumber();
    error InvalidBlockIndex();
    error InvalidL1ChainId();
    error InvalidL2ChainId();
    error InvalidSender();
    error NonZeroAnchorBlockHash();
    error NonZeroAnchorStateRoot();
    error NonZeroBlockIndex();
    error ProposalIdMismatch();
    error ProposerMismatch();
    error ZeroBlockCount();

    function ANCHOR_GAS_LIMIT() external view returns (uint64);
    function GOLDEN_TOUCH_ADDRESS() external view returns (address);

    function _isMatchingProverAuthContext(
        ProverAuth memory _auth,
        uint48 _proposalId,
        address _proposer
    ) external pure returns (bool);

    function acceptOwnership() external;

    /// @notice Anchors the L2 chain to an L1 checkpoint and applies the
    /// proposal's bond instructions. Only callable by the golden touch
    /// account as the first transaction of each L2 block.
    function anchorV4(
        ProposalParams memory _proposalParams,
        BlockParams memory _blockParams
    ) external;

    function bondManager() external view returns (address);
    function checkpointStore() external view returns (address);

    function getBlockState() external view returns (BlockState memory);

    /// @notice Resolves the designated prover for a proposal from the raw
    /// prover authentication bytes.
    function getDesignatedProver(
        uint48 _proposalId,
        address _proposer,
        bytes calldata _proverAuth,
        address _currentDesignatedProver
    )
        external
        view
        returns (bool isLowBondProposal_, address designatedProver_, uint256 provingFeeToTransfer_);

    function getProposalState() external view returns (ProposalState memory);

    function l1ChainId() external view returns (uint64);
    function livenessBond() external view returns (uint256);
    function owner() external view returns (address);
    function pendingOwner() external view returns (address);
    function provabilityBond() external view returns (uint256);

    function renounceOwnership() external;
    function transferOwnership(address newOwner) external;

    /// @notice Validates prover authentication and recovers the signer.
    function validateProverAuth(
        uint48 _proposalId,
        address _proposer,
        bytes calldata _proverAuth
    ) external pure returns (address signer_, uint256 provingFee_);

    function withdraw(address _token, address _to) external;
}

);
