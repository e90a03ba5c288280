//! Errors raised while deriving deposits from L1 logs.

use alloy_primitives::{Bytes, B256};
use derive_more::Display;

/// An error decoding a `TransactionDeposited` log into a deposit transaction.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum DepositError {
    /// Unexpected number of deposit event log topics.
    #[display("Unexpected number of deposit event log topics: {_0}")]
    UnexpectedTopicsLen(usize),
    /// Invalid deposit event selector.
    /// Expected: [B256] (deposit event selector), Actual: [B256] (event log topic).
    #[display("Invalid deposit event selector: {_1}, expected {_0}")]
    InvalidSelector(B256, B256),
    /// Incomplete opaqueData slice header (incomplete length).
    #[display("Incomplete opaqueData slice header (incomplete length): {_0}")]
    IncompleteOpaqueData(usize),
    /// The log data is not aligned to 32 bytes.
    #[display("Unaligned log data, expected multiple of 32 bytes, got: {_0}")]
    UnalignedData(usize),
    /// Invalid opaque data content offset.
    #[display("Invalid u64 opaque data content offset: {_0:?}")]
    InvalidOpaqueDataOffset(Bytes),
    /// Opaque data length exceeds the deposit log event data length.
    /// Specified: [usize] (opaque data length), Actual: [usize] (available data length).
    #[display("Specified opaque data length {_0} exceeds the deposit log event data length {_1}")]
    OpaqueDataOverflow(usize, usize),
    /// Opaque data with padding exceeds the specified data length.
    #[display("Opaque data with padding exceeds the specified data length: {_1} > {_0}")]
    PaddedOpaqueDataOverflow(usize, usize),
    /// An invalid deposit version.
    #[display("Invalid deposit version: {_0}")]
    InvalidVersion(B256),
    /// Unexpected opaque data length.
    #[display("Unexpected opaque data length: {_0}")]
    UnexpectedOpaqueDataLen(usize),
}

impl core::error::Error for DepositError {}
