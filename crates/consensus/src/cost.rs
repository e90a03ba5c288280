//! Contains the [RollupCostData] type.

use op_alloy_flz::flz_compress_len;

/// The data needed to charge a transaction for posting it to L1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RollupCostData {
    /// Number of zero bytes in the encoded transaction.
    pub zeroes: u64,
    /// Number of non-zero bytes in the encoded transaction.
    pub ones: u64,
    /// Length of the encoded transaction after FastLZ compression.
    pub fastlz_size: u64,
}

impl RollupCostData {
    /// Computes the [RollupCostData] of an EIP-2718 encoded transaction.
    pub fn from_encoded(encoded: &[u8]) -> Self {
        let zeroes = encoded.iter().filter(|byte| **byte == 0).count() as u64;
        Self {
            zeroes,
            ones: encoded.len() as u64 - zeroes,
            fastlz_size: flz_compress_len(encoded) as u64,
        }
    }

    /// Returns `true` if the transaction is exempt from the L1 data fee.
    pub fn is_exempt(&self) -> bool {
        *self == Self::default()
    }
}
