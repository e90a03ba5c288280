//! Deposit sources and the derivation of deposits from L1 logs.

mod errors;
pub use errors::DepositError;

mod source;
pub use source::{
    DepositSourceDomain, DepositSourceDomainIdentifier, L1InfoDepositSource,
    UpgradeDepositSource, UserDepositSource,
};

mod log;
pub use log::{decode_deposit, DEPOSIT_EVENT_ABI, DEPOSIT_EVENT_ABI_HASH, DEPOSIT_EVENT_VERSION_0};
