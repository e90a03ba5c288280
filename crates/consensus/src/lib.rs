#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod transaction;
pub use transaction::{
    DepositEnvelope, DepositTransaction, DepositTxType, TxDeposit, TxDepositV2,
    TxDepositV2WithNonce, DEPOSIT_TX_TYPE_ID, DEPOSIT_V2_TX_TYPE_ID,
};

pub mod deposits;
pub use deposits::{
    decode_deposit, DepositError, DepositSourceDomain, DepositSourceDomainIdentifier,
    L1InfoDepositSource, UpgradeDepositSource, UserDepositSource, DEPOSIT_EVENT_ABI,
    DEPOSIT_EVENT_ABI_HASH, DEPOSIT_EVENT_VERSION_0,
};

mod raw_tx;
pub use raw_tx::RawTransaction;

mod cost;
pub use cost::RollupCostData;

pub mod signer;
pub use signer::{DepositSigner, SignatureValues, SignerError, TxSigner, TypedTransaction};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
