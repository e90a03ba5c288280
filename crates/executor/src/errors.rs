//! Errors for the `bluebird-executor` crate.

use alloy_eips::eip2718::Eip2718Error;
use alloy_primitives::U256;
use bluebird_consensus::DepositTxType;

/// An error computing the next block's base fee.
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseFeeError {
    /// The parent gas limit divided by the elasticity multiplier is zero.
    #[display("Zero gas target for gas limit {gas_limit} and elasticity {elasticity_multiplier}")]
    ZeroGasTarget {
        /// The parent gas limit.
        gas_limit: u64,
        /// The elasticity multiplier in force.
        elasticity_multiplier: u64,
    },
}

impl core::error::Error for BaseFeeError {}

/// The error type for header and transaction validation.
#[derive(derive_more::Display, Debug)]
pub enum ExecutorError {
    /// Base fee computation failed.
    #[display("Base fee error: {_0}")]
    BaseFee(BaseFeeError),
    /// The header has no base fee.
    #[display("Header is missing the base fee")]
    MissingBaseFee,
    /// The header base fee does not match the computed one.
    #[display("Invalid base fee: have {got}, want {expected}")]
    InvalidBaseFee {
        /// The computed base fee.
        expected: U256,
        /// The base fee in the header.
        got: U256,
    },
    /// A deposit's type does not match the fork active at the block timestamp.
    #[display("Unexpected deposit type {got} at timestamp {timestamp}, expected {expected}")]
    UnexpectedDepositType {
        /// The deposit type in force.
        expected: DepositTxType,
        /// The deposit type of the transaction.
        got: DepositTxType,
        /// The block timestamp.
        timestamp: u64,
    },
    /// The transaction could not be decoded as a deposit.
    #[display("RLP error: {_0}")]
    RLPError(Eip2718Error),
}

impl From<BaseFeeError> for ExecutorError {
    fn from(err: BaseFeeError) -> Self {
        Self::BaseFee(err)
    }
}

impl From<Eip2718Error> for ExecutorError {
    fn from(err: Eip2718Error) -> Self {
        Self::RLPError(err)
    }
}

impl core::error::Error for ExecutorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::BaseFee(err) => Some(err),
            _ => None,
        }
    }
}

/// A [Result] type for the [ExecutorError] enum.
pub type ExecutorResult<T> = Result<T, ExecutorError>;
