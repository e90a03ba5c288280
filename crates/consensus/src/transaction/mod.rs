//! Deposit transaction types.

mod tx_type;
pub use tx_type::{DepositTxType, DEPOSIT_TX_TYPE_ID, DEPOSIT_V2_TX_TYPE_ID};

mod deposit;
pub use deposit::TxDeposit;

mod v2;
pub use v2::{TxDepositV2, TxDepositV2WithNonce};

mod envelope;
pub use envelope::DepositEnvelope;

#[cfg(feature = "serde")]
mod json;

use alloy_primitives::B256;

/// Accessors shared by every deposit transaction shape.
pub trait DepositTransaction {
    /// Returns the hash that uniquely identifies the source of the deposit.
    fn source_hash(&self) -> B256;

    /// Returns the amount of ETH minted on L2, if any.
    fn mint(&self) -> Option<u128>;

    /// Returns `true` if the deposit is exempt from the L2 gas limit.
    fn is_system_transaction(&self) -> bool;

    /// Returns `true` if the transaction is a deposit.
    fn is_deposit(&self) -> bool {
        true
    }
}
