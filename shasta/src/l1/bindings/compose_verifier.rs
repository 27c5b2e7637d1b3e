use alloy::sol;

sol!(

#[sol(rpc)]
contract ComposeVerifier {
    error CV_INVALID_SUB_VERIFIER();
    error CV_INVALID_SUB_VERIFIER_ORDER();
    error CV_VERIFIERS_INSUFFICIENT();

    /// @notice Resolves a sub-verifier address by its numeric id.
    function getVerifierAddress(uint8 _verifierId) external view returns (address);

    function opVerifier() external view returns (address);
    function risc0RethVerifier() external view returns (address);
    function sgxGethVerifier() external view returns (address);
    function sgxRethVerifier() external view returns (address);
    function sp1RethVerifier() external view returns (address);
    function tdxGethVerifier() external view returns (address);

    /// @notice Verifies a composed proof against a commitment hash. Reverts
    /// with one of the CV errors when the proof is not acceptable.
    function verifyProof(
        uint256 _proposalAge,
        bytes32 _commitmentHash,
        bytes calldata _proof
    ) external view;
}

);
