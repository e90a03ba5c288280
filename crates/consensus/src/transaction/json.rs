//! JSON representation of the [DepositEnvelope].

use super::{DepositEnvelope, DepositTxType, TxDeposit, TxDepositV2};
use alloy_primitives::{Address, Bytes, TxKind, B256, U256, U8};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// Flat JSON object shared by every deposit shape.
///
/// `hash` is emitted on output and ignored on input.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DepositJson {
    #[serde(rename = "type")]
    ty: U8,
    source_hash: B256,
    from: Address,
    #[serde(default)]
    to: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    mint: Option<u128>,
    value: U256,
    #[serde(with = "alloy_serde::quantity")]
    gas: u64,
    #[serde(default)]
    is_system_tx: bool,
    input: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    nonce: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hash: Option<B256>,
}

impl From<&DepositEnvelope> for DepositJson {
    fn from(envelope: &DepositEnvelope) -> Self {
        let tx = envelope.deposit();
        Self {
            ty: U8::from(envelope.tx_type() as u8),
            source_hash: tx.source_hash,
            from: tx.from,
            to: tx.to.to().copied(),
            mint: tx.mint,
            value: tx.value,
            gas: tx.gas_limit,
            is_system_tx: tx.is_system_transaction,
            input: tx.input.clone(),
            nonce: envelope.effective_nonce(),
            hash: Some(envelope.hash()),
        }
    }
}

impl DepositJson {
    fn into_envelope(self) -> Result<DepositEnvelope, alloy_eips::eip2718::Eip2718Error> {
        let ty = DepositTxType::try_from(self.ty.to::<u8>())?;
        let tx = TxDeposit {
            source_hash: self.source_hash,
            from: self.from,
            to: self.to.map_or(TxKind::Create, TxKind::Call),
            mint: self.mint,
            value: self.value,
            gas_limit: self.gas,
            is_system_transaction: self.is_system_tx,
            input: self.input,
        };

        Ok(match (ty, self.nonce) {
            (DepositTxType::V2, Some(nonce)) => TxDepositV2(tx).with_nonce(nonce).into(),
            (DepositTxType::V2, None) => TxDepositV2(tx).into(),
            (DepositTxType::V1, nonce) => {
                if nonce.is_some() {
                    debug!(
                        target: "deposit-json",
                        "Ignoring nonce on legacy deposit {}",
                        tx.source_hash
                    );
                }
                tx.into()
            }
        })
    }
}

impl Serialize for DepositEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DepositJson::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DepositEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DepositJson::deserialize(deserializer)?.into_envelope().map_err(D::Error::custom)
    }
}
