//! Header fields consumed by the fee market.

use alloy_consensus::Header;
use alloy_primitives::U256;

/// The header fields read by [calc_base_fee] and [verify_eip1559_header].
///
/// [calc_base_fee]: crate::calc_base_fee
/// [verify_eip1559_header]: crate::verify_eip1559_header
pub trait BaseFeeHeader {
    /// Returns the block number.
    fn number(&self) -> u64;

    /// Returns the gas limit.
    fn gas_limit(&self) -> u64;

    /// Returns the gas used.
    fn gas_used(&self) -> u64;

    /// Returns the base fee, or `None` for headers that predate EIP-1559.
    fn base_fee(&self) -> Option<U256>;

    /// Returns the block timestamp.
    fn timestamp(&self) -> u64;
}

/// A minimal block header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHeader {
    /// The block number.
    pub number: u64,
    /// The gas limit.
    pub gas_limit: u64,
    /// The gas used.
    pub gas_used: u64,
    /// The base fee per gas.
    pub base_fee: Option<U256>,
    /// The block timestamp.
    pub timestamp: u64,
}

impl BaseFeeHeader for BlockHeader {
    fn number(&self) -> u64 {
        self.number
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_used(&self) -> u64 {
        self.gas_used
    }

    fn base_fee(&self) -> Option<U256> {
        self.base_fee
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl BaseFeeHeader for Header {
    fn number(&self) -> u64 {
        self.number
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_used(&self) -> u64 {
        self.gas_used
    }

    fn base_fee(&self) -> Option<U256> {
        self.base_fee_per_gas.map(U256::from)
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl From<&Header> for BlockHeader {
    fn from(header: &Header) -> Self {
        Self {
            number: BaseFeeHeader::number(header),
            gas_limit: BaseFeeHeader::gas_limit(header),
            gas_used: BaseFeeHeader::gas_used(header),
            base_fee: BaseFeeHeader::base_fee(header),
            timestamp: BaseFeeHeader::timestamp(header),
        }
    }
}
