//! Derivation of deposit transactions from `TransactionDeposited` logs.

use super::{DepositError, UserDepositSource};
use crate::{DepositEnvelope, DepositTxType, TxDeposit, TxDepositV2};
use alloy_primitives::{b256, Address, Bytes, Log, TxKind, B256, U256};

/// Deposit log event abi signature.
pub const DEPOSIT_EVENT_ABI: &str = "TransactionDeposited(address,address,uint256,bytes)";

/// Deposit event abi hash.
///
/// This is the keccak256 hash of the deposit event ABI signature.
/// `keccak256("TransactionDeposited(address,address,uint256,bytes)")`
pub const DEPOSIT_EVENT_ABI_HASH: B256 =
    b256!("b3813568d9991fc951961fcb4c784893574240a28925604d09fc577c55bb7c32");

/// The initial version of the deposit event log.
pub const DEPOSIT_EVENT_VERSION_0: B256 = B256::ZERO;

/// Minimum length of version 0 opaque data: `mint || value || gas || isCreation`.
const VERSION_0_MIN_LEN: usize = 32 + 32 + 8 + 1;

/// Derives a deposit transaction from an EVM log event emitted by the deposit contract.
///
/// The emitted log must be in format:
/// ```solidity
/// event TransactionDeposited(
///    address indexed from,
///    address indexed to,
///    uint256 indexed version,
///    bytes opaqueData
/// );
/// ```
///
/// ## Takes
/// - `block_hash`: The hash of the L1 block containing the log.
/// - `index`: The index of the log within the L1 block.
/// - `log`: The log itself.
/// - `tx_type`: The deposit shape in force at the L2 block the deposit is included in.
///
/// ## Returns
/// - `Ok(DepositEnvelope)`: A [DepositEnvelope::V1] or [DepositEnvelope::V2], per `tx_type`.
/// - `Err(DepositError)`: If the log is malformed.
pub fn decode_deposit(
    block_hash: B256,
    index: usize,
    log: &Log,
    tx_type: DepositTxType,
) -> Result<DepositEnvelope, DepositError> {
    let tx = decode_deposit_fields(block_hash, index, log).inspect_err(|e| {
        warn!(target: "deposits", "Rejected deposit log {index} in L1 block {block_hash}: {e}");
    })?;

    Ok(match tx_type {
        DepositTxType::V1 => DepositEnvelope::V1(tx),
        DepositTxType::V2 => DepositEnvelope::V2(TxDepositV2(tx)),
    })
}

fn decode_deposit_fields(
    block_hash: B256,
    index: usize,
    log: &Log,
) -> Result<TxDeposit, DepositError> {
    let topics = log.data.topics();
    if topics.len() != 4 {
        return Err(DepositError::UnexpectedTopicsLen(topics.len()));
    }
    if topics[0] != DEPOSIT_EVENT_ABI_HASH {
        return Err(DepositError::InvalidSelector(DEPOSIT_EVENT_ABI_HASH, topics[0]));
    }

    let data = log.data.data.as_ref();
    if data.len() < 64 {
        return Err(DepositError::IncompleteOpaqueData(data.len()));
    }
    if data.len() % 32 != 0 {
        return Err(DepositError::UnalignedData(data.len()));
    }

    let from = Address::from_word(topics[1]);
    let to = Address::from_word(topics[2]);
    let version = topics[3];

    // The event data is `abi.encode(bytes opaqueData)`:
    //
    // ------------------------------------------------------------
    // | offset | 256 byte content                                |
    // ------------------------------------------------------------
    // | 0      | [0; 24] . {U64 big endian, hex encoded offset}  |
    // ------------------------------------------------------------
    // | 32     | [0; 24] . {U64 big endian, hex encoded length}  |
    // ------------------------------------------------------------
    let offset = be_u64(&data[24..32]);
    if offset != 32 {
        return Err(DepositError::InvalidOpaqueDataOffset(Bytes::copy_from_slice(&data[24..32])));
    }

    let available = data.len() - 64;
    let opaque_len = be_u64(&data[56..64]);
    if opaque_len > available as u64 {
        return Err(DepositError::OpaqueDataOverflow(opaque_len as usize, available));
    }
    // The EVM pads the opaque data to the next multiple of 32 bytes, so a full spare word means
    // the length does not describe the data.
    if opaque_len + 32 <= available as u64 {
        return Err(DepositError::PaddedOpaqueDataOverflow(available, opaque_len as usize));
    }

    if version != DEPOSIT_EVENT_VERSION_0 {
        return Err(DepositError::InvalidVersion(version));
    }

    let source_hash = UserDepositSource::new(block_hash, index as u64).source_hash();
    unmarshal_deposit_version0(source_hash, from, to, &data[64..64 + opaque_len as usize])
}

/// Unmarshals version 0 opaque data:
/// `abi.encodePacked(uint256 mint, uint256 value, uint64 gasLimit, uint8 isCreation, bytes data)`.
pub(crate) fn unmarshal_deposit_version0(
    source_hash: B256,
    from: Address,
    to: Address,
    data: &[u8],
) -> Result<TxDeposit, DepositError> {
    if data.len() < VERSION_0_MIN_LEN {
        return Err(DepositError::UnexpectedOpaqueDataLen(data.len()));
    }

    // The mint is a uint256, but only the low 128 bits can be represented.
    let mut raw_mint = [0u8; 16];
    raw_mint.copy_from_slice(&data[16..32]);
    let mint = u128::from_be_bytes(raw_mint);

    let value = U256::from_be_slice(&data[32..64]);
    let gas_limit = be_u64(&data[64..72]);

    // A non-zero isCreation byte turns the deposit into a contract creation.
    let to = if data[72] == 0 { TxKind::Call(to) } else { TxKind::Create };

    Ok(TxDeposit {
        source_hash,
        from,
        to,
        // Zero mint is represented as none to skip minting.
        mint: (mint != 0).then_some(mint),
        value,
        gas_limit,
        is_system_transaction: false,
        input: Bytes::copy_from_slice(&data[VERSION_0_MIN_LEN..]),
    })
}

/// Reads a big-endian u64 from an 8 byte slice.
fn be_u64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_be_bytes(word)
}
