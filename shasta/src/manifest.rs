//! Proposal manifest data model and payload framing.
//!
//! Manifests travel inside blobs referenced by a proposal: a 32-byte version
//! word, a 32-byte big-endian length, then the zlib-compressed RLP encoding
//! of the manifest itself. Payloads with an unknown version or more blocks
//! than the protocol allows degrade to the default manifest instead of
//! failing the derivation.

use std::io::{Read, Write};

use alloy::{
    primitives::U256,
    sol,
};
use alloy_rlp::{Decodable, Encodable, RlpDecodable, RlpEncodable};
use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};
use thiserror::Error;

/// Version byte of the manifest payload framing.
pub const MANIFEST_PAYLOAD_VERSION: u8 = 1;

/// Maximum number of blocks a single derivation source may carry.
pub const DERIVATION_SOURCE_MAX_BLOCKS: usize = 192;

sol! {

    /// @notice Represents a signed Ethereum transaction
    /// @dev Follows EIP-2718 typed transaction format with EIP-1559 support
    #[derive(Debug, RlpEncodable, RlpDecodable, PartialEq)]
    struct SignedTransaction {
        uint8 txType;
        uint64 chainId;
        uint64 nonce;
        uint256 maxPriorityFeePerGas;
        uint256 maxFeePerGas;
        uint64 gasLimit;
        address to;
        uint256 value;
        bytes data;
        bytes accessList;
        uint8 v;
        bytes32 r;
        bytes32 s;
    }

    /// @notice Represents a block manifest
    #[derive(Debug, RlpEncodable, RlpDecodable, PartialEq)]
    struct BlockManifest {
        /// @notice The timestamp of the block.
        uint48 timestamp;
        /// @notice The coinbase of the block.
        address coinbase;
        /// @notice The anchor block number. This field can be zero, if so,
        /// this block will use the most recent anchor in a previous block.
        uint48 anchorBlockNumber;
        /// @notice The block's gas limit.
        uint48 gasLimit;
        /// @notice The transactions for this block.
        SignedTransaction[] transactions;
    }

    /// @notice Represents a proposal manifest
    #[derive(Debug, Default, RlpEncodable, RlpDecodable, PartialEq)]
    struct ProposalManifest {
        bytes proverAuthBytes;
        BlockManifest[] blocks;
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest payload: {0}")]
    InvalidPayload(String),
    #[error("rlp error: {0}")]
    Rlp(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, ManifestError>;

impl ProposalManifest {
    /// Encodes and compresses the manifest into the blob payload format.
    pub fn encode_and_compress(&self) -> Result<Vec<u8>> {
        encode_manifest_payload(self)
    }

    /// Decompresses and decodes a manifest from blob payload bytes starting
    /// at `offset`.
    pub fn decompress_and_decode(bytes: &[u8], offset: usize) -> Result<Self> {
        let Some(decoded) = decode_manifest_payload(bytes, offset)? else {
            return Ok(ProposalManifest::default());
        };

        let mut decoded_slice = decoded.as_slice();
        let manifest = <ProposalManifest as Decodable>::decode(&mut decoded_slice)
            .map_err(|err| ManifestError::Rlp(err.to_string()))?;

        if manifest.blocks.len() > DERIVATION_SOURCE_MAX_BLOCKS {
            return Ok(ProposalManifest::default());
        }

        Ok(manifest)
    }
}

fn encode_manifest_payload<T>(manifest: &T) -> Result<Vec<u8>>
where
    T: Encodable,
{
    let rlp_encoded = alloy_rlp::encode(manifest);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&rlp_encoded)?;
    let compressed = encoder.finish()?;

    let mut output = Vec::with_capacity(64 + compressed.len());

    let mut version_bytes = [0u8; 32];
    version_bytes[31] = MANIFEST_PAYLOAD_VERSION;
    output.extend_from_slice(&version_bytes);

    let len_bytes = U256::from(compressed.len()).to_be_bytes::<32>();
    output.extend_from_slice(&len_bytes);
    output.extend_from_slice(&compressed);

    Ok(output)
}

/// Returns `None` when the payload carries an unknown version.
fn decode_manifest_payload(bytes: &[u8], offset: usize) -> Result<Option<Vec<u8>>> {
    if bytes.len() < offset + 64 {
        return Err(ManifestError::InvalidPayload(
            "payload shorter than header".into(),
        ));
    }

    let version = u32::from_be_bytes(
        bytes[offset + 28..offset + 32]
            .try_into()
            .map_err(|_| ManifestError::InvalidPayload("malformed version word".into()))?,
    );
    if version != u32::from(MANIFEST_PAYLOAD_VERSION) {
        return Ok(None);
    }

    let size = usize::try_from(u64::from_be_bytes(
        bytes[offset + 56..offset + 64]
            .try_into()
            .map_err(|_| ManifestError::InvalidPayload("malformed size word".into()))?,
    ))
    .map_err(|_| ManifestError::InvalidPayload("size exceeds address space".into()))?;

    if bytes.len() < offset + 64 + size {
        return Err(ManifestError::InvalidPayload(
            "payload shorter than declared size".into(),
        ));
    }

    let compressed = &bytes[offset + 64..offset + 64 + size];
    let mut decoder = ZlibDecoder::new(compressed);
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded)?;

    Ok(Some(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, B256, Bytes, U256, aliases::U48};

    fn sample_manifest() -> ProposalManifest {
        ProposalManifest {
            proverAuthBytes: Bytes::from(vec![0x01, 0x02, 0x03]),
            blocks: vec![BlockManifest {
                timestamp: U48::from(1_700_000_000u64),
                coinbase: Address::repeat_byte(0xCB),
                anchorBlockNumber: U48::from(42u64),
                gasLimit: U48::from(30_000_000u64),
                transactions: vec![SignedTransaction {
                    txType: 2,
                    chainId: 167_009,
                    nonce: 7,
                    maxPriorityFeePerGas: U256::from(1_000_000u64),
                    maxFeePerGas: U256::from(2_000_000u64),
                    gasLimit: 21_000,
                    to: Address::repeat_byte(0x70),
                    value: U256::from(1u64),
                    data: Bytes::new(),
                    accessList: Bytes::new(),
                    v: 1,
                    r: B256::repeat_byte(0x0A),
                    s: B256::repeat_byte(0x0B),
                }],
            }],
        }
    }

    #[test]
    fn manifest_round_trips_through_payload_format() {
        let manifest = sample_manifest();
        let encoded = manifest.encode_and_compress().unwrap();

        assert!(encoded.len() > 64);
        assert_eq!(encoded[31], MANIFEST_PAYLOAD_VERSION);
        for byte in &encoded[..31] {
            assert_eq!(*byte, 0);
        }

        let decoded = ProposalManifest::decompress_and_decode(&encoded, 0).unwrap();
        assert_eq!(decoded, manifest);
    }

    #[test]
    fn manifest_decodes_at_nonzero_offset() {
        let manifest = sample_manifest();
        let encoded = manifest.encode_and_compress().unwrap();

        let mut padded = vec![0xFFu8; 10];
        padded.extend_from_slice(&encoded);
        // A version mismatch at offset 0 degrades to the default manifest,
        // while the real offset decodes the original.
        let decoded = ProposalManifest::decompress_and_decode(&padded, 10).unwrap();
        assert_eq!(decoded, manifest);
    }

    #[test]
    fn unknown_version_degrades_to_default() {
        let manifest = sample_manifest();
        let mut encoded = manifest.encode_and_compress().unwrap();
        encoded[31] = MANIFEST_PAYLOAD_VERSION + 1;

        let decoded = ProposalManifest::decompress_and_decode(&encoded, 0).unwrap();
        assert_eq!(decoded, ProposalManifest::default());
    }

    #[test]
    fn short_payload_is_an_error() {
        let err = ProposalManifest::decompress_and_decode(&[0u8; 32], 0).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidPayload(_)));
    }

    #[test]
    fn truncated_body_is_an_error() {
        let manifest = sample_manifest();
        let encoded = manifest.encode_and_compress().unwrap();
        let err = ProposalManifest::decompress_and_decode(&encoded[..70], 0).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidPayload(_)));
    }

    #[test]
    fn oversized_manifest_degrades_to_default() {
        let manifest = ProposalManifest {
            proverAuthBytes: Bytes::new(),
            blocks: (0..DERIVATION_SOURCE_MAX_BLOCKS + 1)
                .map(|_| BlockManifest {
                    timestamp: U48::ZERO,
                    coinbase: Address::ZERO,
                    anchorBlockNumber: U48::ZERO,
                    gasLimit: U48::ZERO,
                    transactions: Vec::new(),
                })
                .collect(),
        };
        let encoded = manifest.encode_and_compress().unwrap();
        let decoded = ProposalManifest::decompress_and_decode(&encoded, 0).unwrap();
        assert_eq!(decoded, ProposalManifest::default());
    }
}
