//! Contains the [RawTransaction] type.

use crate::{DepositEnvelope, DepositTxType};
use alloc::vec::Vec;
use alloy_eips::eip2718::Eip2718Result;
use alloy_primitives::Bytes;
use alloy_rlp::{Decodable, Encodable};

/// An EIP-2718 encoded transaction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct RawTransaction(pub Bytes);

impl RawTransaction {
    /// Returns if the transaction is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the deposit type of the transaction, if it is a deposit.
    pub fn deposit_type(&self) -> Option<DepositTxType> {
        self.0.first().and_then(|ty| DepositTxType::try_from(*ty).ok())
    }

    /// Returns if the transaction is a deposit of any version.
    pub fn is_deposit(&self) -> bool {
        self.deposit_type().is_some()
    }

    /// Decodes the transaction as a deposit.
    pub fn decode_deposit(&self) -> Eip2718Result<DepositEnvelope> {
        DepositEnvelope::decode_2718_exact(&self.0)
    }
}

impl From<Bytes> for RawTransaction {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for RawTransaction {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl From<&DepositEnvelope> for RawTransaction {
    fn from(tx: &DepositEnvelope) -> Self {
        Self(tx.encoded_2718().into())
    }
}

impl Encodable for RawTransaction {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        self.0.encode(out)
    }

    fn length(&self) -> usize {
        self.0.length()
    }
}

impl Decodable for RawTransaction {
    /// Decodes RLP encoded bytes into [RawTransaction] bytes
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let tx_bytes = Bytes::decode(buf)?;
        Ok(Self(tx_bytes))
    }
}

impl AsRef<[u8]> for RawTransaction {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
