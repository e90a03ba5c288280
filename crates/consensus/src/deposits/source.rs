//! Source hashes of deposit transactions.
//!
//! Every deposit is identified by `keccak256(domain || keccak256(inputs))`, where `domain` is
//! the [DepositSourceDomainIdentifier] as a 32 byte big-endian integer. User deposits, L1 info
//! deposits and upgrade transactions live in separate domains so their hashes never collide.

use alloc::string::String;
use alloy_primitives::{keccak256, B256};

/// Source domain identifiers for deposit transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DepositSourceDomainIdentifier {
    /// A user deposit source.
    User = 0,
    /// A L1 info deposit source.
    L1Info = 1,
    /// An upgrade deposit source.
    Upgrade = 2,
}

impl DepositSourceDomainIdentifier {
    /// Hashes `inner` into this domain.
    fn domain_hash(self, inner: B256) -> B256 {
        let mut domain_input = [0u8; 64];
        domain_input[31] = self as u8;
        domain_input[32..].copy_from_slice(inner.as_slice());
        keccak256(domain_input)
    }
}

/// Hashes an L1 block hash together with a 64 bit index, as used by the user and L1 info
/// domains.
fn block_index_hash(l1_block_hash: B256, index: u64) -> B256 {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(l1_block_hash.as_slice());
    input[56..].copy_from_slice(&index.to_be_bytes());
    keccak256(input)
}

/// Source domains for deposit transactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepositSourceDomain {
    /// A user deposit source.
    User(UserDepositSource),
    /// A L1 info deposit source.
    L1Info(L1InfoDepositSource),
    /// An upgrade deposit source.
    Upgrade(UpgradeDepositSource),
}

impl DepositSourceDomain {
    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        match self {
            Self::User(ds) => ds.source_hash(),
            Self::L1Info(ds) => ds.source_hash(),
            Self::Upgrade(ds) => ds.source_hash(),
        }
    }

    /// Returns the domain identifier.
    pub const fn identifier(&self) -> DepositSourceDomainIdentifier {
        match self {
            Self::User(_) => DepositSourceDomainIdentifier::User,
            Self::L1Info(_) => DepositSourceDomainIdentifier::L1Info,
            Self::Upgrade(_) => DepositSourceDomainIdentifier::Upgrade,
        }
    }
}

/// A user deposit, identified by the L1 log that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserDepositSource {
    /// The L1 block hash.
    pub l1_block_hash: B256,
    /// The log index.
    pub log_index: u64,
}

impl UserDepositSource {
    /// Creates a new [UserDepositSource].
    pub const fn new(l1_block_hash: B256, log_index: u64) -> Self {
        Self { l1_block_hash, log_index }
    }

    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        DepositSourceDomainIdentifier::User
            .domain_hash(block_index_hash(self.l1_block_hash, self.log_index))
    }
}

/// The L1 attributes deposit at the start of each L2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct L1InfoDepositSource {
    /// The L1 block hash.
    pub l1_block_hash: B256,
    /// The sequence number of the L2 block within the epoch.
    pub seq_number: u64,
}

impl L1InfoDepositSource {
    /// Creates a new [L1InfoDepositSource].
    pub const fn new(l1_block_hash: B256, seq_number: u64) -> Self {
        Self { l1_block_hash, seq_number }
    }

    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        DepositSourceDomainIdentifier::L1Info
            .domain_hash(block_index_hash(self.l1_block_hash, self.seq_number))
    }
}

/// A network upgrade transaction, identified by a human readable intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpgradeDepositSource {
    /// The intent.
    pub intent: String,
}

impl UpgradeDepositSource {
    /// Creates a new [UpgradeDepositSource].
    pub const fn new(intent: String) -> Self {
        Self { intent }
    }

    /// Returns the source hash.
    pub fn source_hash(&self) -> B256 {
        DepositSourceDomainIdentifier::Upgrade.domain_hash(keccak256(self.intent.as_bytes()))
    }
}
