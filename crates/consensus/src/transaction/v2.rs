//! Deposit transaction shapes introduced by the Bluebird hardfork.

use super::{DepositTransaction, DepositTxType, TxDeposit};
use alloy_eips::eip2718::Eip2718Result;
use alloy_primitives::B256;
use alloy_rlp::{BufMut, Encodable};
use core::ops::{Deref, DerefMut};

/// A Bluebird deposit transaction (type `0x7d`).
///
/// Shares the fields and RLP layout of [TxDeposit], but is tagged `0x7d` and is exempt from
/// the L1 data fee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TxDepositV2(pub TxDeposit);

impl TxDepositV2 {
    /// Returns the transaction type of the Bluebird deposit.
    pub const fn tx_type(&self) -> DepositTxType {
        DepositTxType::V2
    }

    /// Returns the inner [TxDeposit].
    pub const fn inner(&self) -> &TxDeposit {
        &self.0
    }

    /// Consumes the wrapper, returning the inner [TxDeposit].
    pub fn into_inner(self) -> TxDeposit {
        self.0
    }

    /// Attaches an out-of-band effective nonce.
    pub const fn with_nonce(self, effective_nonce: u64) -> TxDepositV2WithNonce {
        TxDepositV2WithNonce { inner: self, effective_nonce }
    }

    /// Encodes the deposit as an EIP-2718 envelope: `0x7d || rlp(fields)`.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        self.0.encode_typed(DepositTxType::V2, out)
    }

    /// Returns the length of the EIP-2718 encoding.
    pub fn encode_2718_len(&self) -> usize {
        1 + self.0.length()
    }

    /// Decodes a Bluebird deposit from its EIP-2718 encoding.
    pub fn decode_2718(buf: &mut &[u8]) -> Eip2718Result<Self> {
        TxDeposit::decode_typed(DepositTxType::V2, buf).map(Self)
    }

    /// Returns the transaction hash. Differs from the [TxDeposit] hash of the same fields only
    /// by the type tag in the preimage.
    pub fn tx_hash(&self) -> B256 {
        self.0.identity_hash(DepositTxType::V2, None)
    }
}

impl From<TxDeposit> for TxDepositV2 {
    fn from(tx: TxDeposit) -> Self {
        Self(tx)
    }
}

impl Deref for TxDepositV2 {
    type Target = TxDeposit;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TxDepositV2 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DepositTransaction for TxDepositV2 {
    fn source_hash(&self) -> B256 {
        self.0.source_hash
    }

    fn mint(&self) -> Option<u128> {
        self.0.mint
    }

    fn is_system_transaction(&self) -> bool {
        self.0.is_system_transaction
    }
}

/// A [TxDepositV2] carrying an effective nonce assigned outside of the transaction encoding.
///
/// The binary encoding is that of the inner [TxDepositV2]; the nonce travels out-of-band (in
/// JSON, or alongside the receipt) and is appended to the hash preimage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TxDepositV2WithNonce {
    /// The wrapped deposit.
    pub inner: TxDepositV2,
    /// The nonce the deposit was executed with.
    pub effective_nonce: u64,
}

impl TxDepositV2WithNonce {
    /// Creates a new [TxDepositV2WithNonce].
    pub const fn new(inner: TxDepositV2, effective_nonce: u64) -> Self {
        Self { inner, effective_nonce }
    }

    /// Returns the transaction type. Always [DepositTxType::V2].
    pub const fn tx_type(&self) -> DepositTxType {
        DepositTxType::V2
    }

    /// Drops the effective nonce.
    pub fn into_inner(self) -> TxDepositV2 {
        self.inner
    }

    /// Encodes the inner deposit as an EIP-2718 envelope. The effective nonce is not encoded.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        self.inner.encode_2718(out)
    }

    /// Returns the length of the EIP-2718 encoding.
    pub fn encode_2718_len(&self) -> usize {
        self.inner.encode_2718_len()
    }

    /// Returns the transaction hash, which commits to the effective nonce.
    pub fn tx_hash(&self) -> B256 {
        self.inner.0.identity_hash(DepositTxType::V2, Some(self.effective_nonce))
    }
}

impl Deref for TxDepositV2WithNonce {
    type Target = TxDeposit;

    fn deref(&self) -> &Self::Target {
        &self.inner.0
    }
}

impl DerefMut for TxDepositV2WithNonce {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner.0
    }
}

impl DepositTransaction for TxDepositV2WithNonce {
    fn source_hash(&self) -> B256 {
        self.inner.source_hash()
    }

    fn mint(&self) -> Option<u128> {
        self.inner.mint()
    }

    fn is_system_transaction(&self) -> bool {
        self.inner.is_system_transaction()
    }
}
