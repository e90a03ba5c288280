//! Routing of signer operations around deposit transactions.
//!
//! Deposits carry no signature. The [DepositSigner] wraps any [TxSigner] and answers sender and
//! signature queries for deposits itself, delegating every other transaction unchanged.

use crate::{DepositEnvelope, DepositTxType};
use alloy_primitives::{Address, B256, U256};
use derive_more::Display;

/// A transaction that exposes its EIP-2718 type tag.
pub trait TypedTransaction {
    /// Returns the EIP-2718 type byte.
    fn ty(&self) -> u8;

    /// Returns `true` if the type tag belongs to the deposit family.
    fn is_deposit_tx(&self) -> bool {
        DepositTxType::try_from(self.ty()).is_ok()
    }
}

impl TypedTransaction for DepositEnvelope {
    fn ty(&self) -> u8 {
        self.tx_type() as u8
    }
}

/// The raw `r`, `s` and `v` values of a transaction signature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureValues {
    /// The `r` value.
    pub r: U256,
    /// The `s` value.
    pub s: U256,
    /// The `v` value.
    pub v: U256,
}

/// Recovers senders and assembles signatures for transactions of type `T`.
pub trait TxSigner<T: TypedTransaction> {
    /// The error type returned by the signer.
    type Error;

    /// Returns the chain id the signer is bound to.
    fn chain_id(&self) -> u64;

    /// Recovers the sender of `tx`.
    fn sender(&self, tx: &T) -> Result<Address, Self::Error>;

    /// Splits a 65 byte `sig` into the signature values of `tx`.
    fn signature_values(&self, tx: &T, sig: &[u8]) -> Result<SignatureValues, Self::Error>;

    /// Returns the hash that is signed to authorize `tx`.
    fn signature_hash(&self, tx: &T) -> B256;
}

/// An error returned by a [DepositSigner].
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum SignerError<E> {
    /// Deposit transactions carry no signature.
    #[display("Deposit transactions do not have a signature")]
    DepositNotSignable,
    /// The wrapped signer failed.
    #[display("{_0}")]
    Signer(E),
}

impl<E> core::error::Error for SignerError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Signer(e) => Some(e),
            Self::DepositNotSignable => None,
        }
    }
}

/// A [TxSigner] that intercepts deposit transactions before they reach the wrapped signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositSigner<S> {
    inner: S,
}

impl<S> DepositSigner<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped signer.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Consumes the adapter, returning the wrapped signer.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S> TxSigner<T> for DepositSigner<S>
where
    T: TypedTransaction,
    S: TxSigner<T>,
{
    type Error = SignerError<S::Error>;

    fn chain_id(&self) -> u64 {
        self.inner.chain_id()
    }

    /// Returns [Address::ZERO] for deposits.
    fn sender(&self, tx: &T) -> Result<Address, Self::Error> {
        if tx.is_deposit_tx() {
            return Ok(Address::ZERO);
        }
        self.inner.sender(tx).map_err(SignerError::Signer)
    }

    /// Returns [SignerError::DepositNotSignable] for deposits.
    fn signature_values(&self, tx: &T, sig: &[u8]) -> Result<SignatureValues, Self::Error> {
        if tx.is_deposit_tx() {
            return Err(SignerError::DepositNotSignable);
        }
        self.inner.signature_values(tx, sig).map_err(SignerError::Signer)
    }

    /// # Panics
    ///
    /// Panics if `tx` is a deposit. Deposits are never signed, so asking for their signature
    /// hash is a bug in the caller.
    fn signature_hash(&self, tx: &T) -> B256 {
        if tx.is_deposit_tx() {
            panic!("deposit transactions cannot be signed, type {:#04x}", tx.ty());
        }
        self.inner.signature_hash(tx)
    }
}
