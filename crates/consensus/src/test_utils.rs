//! Test utilities for deposit transactions and signers.

use crate::{DepositEnvelope, SignatureValues, TxDeposit, TxSigner, TypedTransaction};
use alloy_primitives::{address, keccak256, Address, Bytes, TxKind, B256, U256};
use derive_more::Display;

/// The sender every [MockSigner] recovers for non-deposit transactions.
pub const MOCK_SENDER: Address = address!("00000000000000000000000000000000000000aa");

/// Returns a system deposit with every field populated.
pub fn deposit_fixture() -> TxDeposit {
    let addr = address!("1234567890123456789012345678901234567890");
    TxDeposit {
        source_hash: B256::left_padding_from(&[0xde, 0xad, 0xbe, 0xef]),
        from: addr,
        to: TxKind::Call(addr),
        mint: Some(1000),
        value: U256::from(2000),
        gas_limit: 50000,
        is_system_transaction: true,
        input: Bytes::from_static(b"test data"),
    }
}

/// A transaction as seen by a generic signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockTransaction {
    /// A deposit transaction.
    Deposit(DepositEnvelope),
    /// Any signed transaction type.
    Signed {
        /// The EIP-2718 type byte.
        ty: u8,
        /// Stand-in for the signed payload.
        payload: B256,
    },
}

impl TypedTransaction for MockTransaction {
    fn ty(&self) -> u8 {
        match self {
            Self::Deposit(tx) => tx.tx_type() as u8,
            Self::Signed { ty, .. } => *ty,
        }
    }
}

/// An error returned by the [MockSigner].
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSignerError {
    /// The signature is not 65 bytes long.
    #[display("Invalid signature length: {_0}")]
    InvalidSignatureLength(usize),
    /// The mock signer was asked about a deposit.
    #[display("Mock signer received a deposit")]
    UnexpectedDeposit,
}

impl core::error::Error for MockSignerError {}

/// A signer that recovers [MOCK_SENDER] and splits signatures without verifying them.
///
/// Rejects deposits, so any deposit reaching it through a wrapper is visible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSigner {
    chain_id: u64,
}

impl MockSigner {
    /// Creates a new [MockSigner].
    pub const fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }
}

impl TxSigner<MockTransaction> for MockSigner {
    type Error = MockSignerError;

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn sender(&self, tx: &MockTransaction) -> Result<Address, Self::Error> {
        match tx {
            MockTransaction::Deposit(_) => Err(MockSignerError::UnexpectedDeposit),
            MockTransaction::Signed { .. } => Ok(MOCK_SENDER),
        }
    }

    fn signature_values(
        &self,
        tx: &MockTransaction,
        sig: &[u8],
    ) -> Result<SignatureValues, Self::Error> {
        if matches!(tx, MockTransaction::Deposit(_)) {
            return Err(MockSignerError::UnexpectedDeposit);
        }
        if sig.len() != 65 {
            return Err(MockSignerError::InvalidSignatureLength(sig.len()));
        }
        Ok(SignatureValues {
            r: U256::from_be_slice(&sig[..32]),
            s: U256::from_be_slice(&sig[32..64]),
            v: U256::from(sig[64]),
        })
    }

    fn signature_hash(&self, tx: &MockTransaction) -> B256 {
        match tx {
            MockTransaction::Deposit(tx) => panic!("mock signer received deposit {}", tx.hash()),
            MockTransaction::Signed { ty, payload } => {
                let mut preimage = [0u8; 41];
                preimage[0] = *ty;
                preimage[1..9].copy_from_slice(&self.chain_id.to_be_bytes());
                preimage[9..].copy_from_slice(payload.as_slice());
                keccak256(preimage)
            }
        }
    }
}
