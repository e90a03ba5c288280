//! Contains the [DepositEnvelope], which dispatches on the deposit type tag.

use super::{DepositTransaction, DepositTxType, TxDeposit, TxDepositV2, TxDepositV2WithNonce};
use crate::RollupCostData;
use alloc::vec::Vec;
use alloy_eips::eip2718::{Eip2718Error, Eip2718Result};
use alloy_primitives::B256;
use alloy_rlp::{BufMut, Error as DecodeError};

/// Any deposit transaction, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepositEnvelope {
    /// A legacy deposit, type `0x7e`.
    V1(TxDeposit),
    /// A Bluebird deposit, type `0x7d`.
    V2(TxDepositV2),
    /// A Bluebird deposit with an out-of-band effective nonce, type `0x7d`.
    V2WithNonce(TxDepositV2WithNonce),
}

impl DepositEnvelope {
    /// Returns the EIP-2718 type tag.
    pub const fn tx_type(&self) -> DepositTxType {
        match self {
            Self::V1(_) => DepositTxType::V1,
            Self::V2(_) | Self::V2WithNonce(_) => DepositTxType::V2,
        }
    }

    /// Returns `true`. Every shape of the envelope is a deposit.
    pub const fn is_deposit_tx(&self) -> bool {
        true
    }

    /// Returns the shared deposit fields.
    pub const fn deposit(&self) -> &TxDeposit {
        match self {
            Self::V1(tx) => tx,
            Self::V2(tx) => &tx.0,
            Self::V2WithNonce(tx) => &tx.inner.0,
        }
    }

    /// Returns the shared deposit fields mutably.
    pub fn deposit_mut(&mut self) -> &mut TxDeposit {
        match self {
            Self::V1(tx) => tx,
            Self::V2(tx) => &mut tx.0,
            Self::V2WithNonce(tx) => &mut tx.inner.0,
        }
    }

    /// Returns the effective nonce, if the deposit carries one.
    pub const fn effective_nonce(&self) -> Option<u64> {
        match self {
            Self::V2WithNonce(tx) => Some(tx.effective_nonce),
            _ => None,
        }
    }

    /// Returns the legacy deposit, if this is one.
    pub const fn as_v1(&self) -> Option<&TxDeposit> {
        match self {
            Self::V1(tx) => Some(tx),
            _ => None,
        }
    }

    /// Returns the Bluebird deposit, if this is one without an effective nonce.
    pub const fn as_v2(&self) -> Option<&TxDepositV2> {
        match self {
            Self::V2(tx) => Some(tx),
            _ => None,
        }
    }

    /// Returns the Bluebird deposit with its effective nonce, if this is one.
    pub const fn as_v2_with_nonce(&self) -> Option<&TxDepositV2WithNonce> {
        match self {
            Self::V2WithNonce(tx) => Some(tx),
            _ => None,
        }
    }

    /// Returns the domain-separated transaction hash.
    pub fn hash(&self) -> B256 {
        match self {
            Self::V1(tx) => tx.tx_hash(),
            Self::V2(tx) => tx.tx_hash(),
            Self::V2WithNonce(tx) => tx.tx_hash(),
        }
    }

    /// Encodes the envelope as `type || rlp(fields)`.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        match self {
            Self::V1(tx) => tx.encode_2718(out),
            Self::V2(tx) => tx.encode_2718(out),
            Self::V2WithNonce(tx) => tx.encode_2718(out),
        }
    }

    /// Returns the length of the EIP-2718 encoding.
    pub fn encode_2718_len(&self) -> usize {
        match self {
            Self::V1(tx) => tx.encode_2718_len(),
            Self::V2(tx) => tx.encode_2718_len(),
            Self::V2WithNonce(tx) => tx.encode_2718_len(),
        }
    }

    /// Returns the EIP-2718 encoding as a new buffer.
    pub fn encoded_2718(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encode_2718_len());
        self.encode_2718(&mut out);
        out
    }

    /// Decodes a deposit from its EIP-2718 encoding, dispatching on the type byte.
    ///
    /// A `0x7d` payload always decodes as [DepositEnvelope::V2], since the effective nonce is
    /// not part of the encoding.
    ///
    /// ## Returns
    /// - `Err(Eip2718Error::UnexpectedType)`: If the type byte is not a deposit tag.
    /// - `Err(Eip2718Error::RlpError)`: If the payload is truncated or malformed.
    pub fn decode_2718(buf: &mut &[u8]) -> Eip2718Result<Self> {
        let tag = *buf.first().ok_or(DecodeError::InputTooShort)?;
        match DepositTxType::try_from(tag)? {
            DepositTxType::V1 => TxDeposit::decode_2718(buf).map(Self::V1),
            DepositTxType::V2 => TxDepositV2::decode_2718(buf).map(Self::V2),
        }
    }

    /// Decodes a deposit, rejecting trailing bytes after the encoding.
    pub fn decode_2718_exact(bytes: &[u8]) -> Eip2718Result<Self> {
        let mut buf = bytes;
        let tx = Self::decode_2718(&mut buf)?;
        if !buf.is_empty() {
            return Err(Eip2718Error::RlpError(DecodeError::UnexpectedLength));
        }
        Ok(tx)
    }

    /// Returns the data needed to charge the deposit for its L1 data.
    ///
    /// Bluebird deposits are exempt and return [RollupCostData::default]. Legacy deposits are
    /// charged for their EIP-2718 encoding.
    pub fn rollup_cost_data(&self) -> RollupCostData {
        match self {
            Self::V1(tx) => {
                let mut buf = Vec::with_capacity(tx.encode_2718_len());
                tx.encode_2718(&mut buf);
                RollupCostData::from_encoded(&buf)
            }
            Self::V2(_) | Self::V2WithNonce(_) => RollupCostData::default(),
        }
    }
}

impl DepositTransaction for DepositEnvelope {
    fn source_hash(&self) -> B256 {
        self.deposit().source_hash
    }

    fn mint(&self) -> Option<u128> {
        self.deposit().mint
    }

    fn is_system_transaction(&self) -> bool {
        self.deposit().is_system_transaction
    }
}

impl From<TxDeposit> for DepositEnvelope {
    fn from(tx: TxDeposit) -> Self {
        Self::V1(tx)
    }
}

impl From<TxDepositV2> for DepositEnvelope {
    fn from(tx: TxDepositV2) -> Self {
        Self::V2(tx)
    }
}

impl From<TxDepositV2WithNonce> for DepositEnvelope {
    fn from(tx: TxDepositV2WithNonce) -> Self {
        Self::V2WithNonce(tx)
    }
}
