//! Contains the [DepositTxType] enum.

use alloy_eips::eip2718::Eip2718Error;
use derive_more::Display;

/// Identifier for the legacy deposit transaction type.
pub const DEPOSIT_TX_TYPE_ID: u8 = 0x7E;

/// Identifier for the deposit transaction type introduced by Bluebird.
pub const DEPOSIT_V2_TX_TYPE_ID: u8 = 0x7D;

/// The EIP-2718 type tags of the deposit transaction family.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Display)]
pub enum DepositTxType {
    /// Legacy deposit transaction.
    #[display("deposit")]
    V1 = DEPOSIT_TX_TYPE_ID,
    /// Bluebird deposit transaction. Exempt from the L1 data fee.
    #[display("deposit-v2")]
    V2 = DEPOSIT_V2_TX_TYPE_ID,
}

impl DepositTxType {
    /// Returns `true` for the type tags introduced by Bluebird.
    pub const fn is_v2(&self) -> bool {
        matches!(self, Self::V2)
    }
}

impl From<DepositTxType> for u8 {
    fn from(ty: DepositTxType) -> Self {
        ty as Self
    }
}

impl TryFrom<u8> for DepositTxType {
    type Error = Eip2718Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            DEPOSIT_TX_TYPE_ID => Ok(Self::V1),
            DEPOSIT_V2_TX_TYPE_ID => Ok(Self::V2),
            ty => Err(Eip2718Error::UnexpectedType(ty)),
        }
    }
}
