//! Fork gating of deposit transaction types.

use crate::{ExecutorError, ExecutorResult};
use bluebird_consensus::{DepositEnvelope, DepositTxType, RawTransaction};
use bluebird_genesis::ChainConfig;

/// Returns the deposit type accepted in a block with the given `timestamp`.
pub fn deposit_tx_type(config: &ChainConfig, timestamp: u64) -> DepositTxType {
    if config.is_bluebird_active(timestamp) {
        DepositTxType::V2
    } else {
        DepositTxType::V1
    }
}

/// Checks that `tx` has the deposit type in force at `timestamp`.
///
/// ## Returns
/// - `Ok(())`: Legacy deposits before Bluebird, Bluebird deposits from its activation on.
/// - `Err(ExecutorError::UnexpectedDepositType)`: Otherwise.
pub fn check_deposit_type(
    config: &ChainConfig,
    timestamp: u64,
    tx: &DepositEnvelope,
) -> ExecutorResult<()> {
    let expected = deposit_tx_type(config, timestamp);
    let got = tx.tx_type();
    if got != expected {
        warn!(
            target: "deposits",
            "Rejecting deposit {} of type {got} at timestamp {timestamp}, expected {expected}",
            tx.hash()
        );
        return Err(ExecutorError::UnexpectedDepositType { expected, got, timestamp });
    }
    Ok(())
}

/// Decodes a raw deposit and checks its type against the fork in force at `timestamp`.
pub fn check_raw_deposit(
    config: &ChainConfig,
    timestamp: u64,
    raw: &RawTransaction,
) -> ExecutorResult<DepositEnvelope> {
    let tx = raw.decode_deposit()?;
    check_deposit_type(config, timestamp, &tx)?;
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_eips::eip2718::Eip2718Error;
    use bluebird_consensus::{test_utils::deposit_fixture, TxDepositV2};

    fn config() -> ChainConfig {
        ChainConfig::with_bluebird(1, Some(1000))
    }

    #[test]
    fn test_deposit_tx_type_switches_at_activation() {
        let config = config();
        assert_eq!(deposit_tx_type(&config, 999), DepositTxType::V1);
        assert_eq!(deposit_tx_type(&config, 1000), DepositTxType::V2);
        assert_eq!(deposit_tx_type(&config, 1001), DepositTxType::V2);

        let unscheduled = ChainConfig::with_bluebird(1, None);
        assert_eq!(deposit_tx_type(&unscheduled, u64::MAX), DepositTxType::V1);
    }

    #[test]
    fn test_check_deposit_type() {
        let config = config();
        let v1 = DepositEnvelope::V1(deposit_fixture());
        let v2 = DepositEnvelope::V2(TxDepositV2(deposit_fixture()));
        let v2n = DepositEnvelope::V2WithNonce(TxDepositV2(deposit_fixture()).with_nonce(3));

        assert!(check_deposit_type(&config, 999, &v1).is_ok());
        assert!(check_deposit_type(&config, 1000, &v2).is_ok());
        assert!(check_deposit_type(&config, 1000, &v2n).is_ok());

        assert!(matches!(
            check_deposit_type(&config, 1000, &v1),
            Err(ExecutorError::UnexpectedDepositType {
                expected: DepositTxType::V2,
                got: DepositTxType::V1,
                timestamp: 1000,
            })
        ));
        assert!(matches!(
            check_deposit_type(&config, 999, &v2),
            Err(ExecutorError::UnexpectedDepositType {
                expected: DepositTxType::V1,
                got: DepositTxType::V2,
                timestamp: 999,
            })
        ));
    }

    #[test]
    fn test_check_raw_deposit() {
        let config = config();
        let v2 = DepositEnvelope::V2(TxDepositV2(deposit_fixture()));
        let raw = RawTransaction::from(&v2);

        assert_eq!(check_raw_deposit(&config, 1000, &raw).unwrap(), v2);
        assert!(matches!(
            check_raw_deposit(&config, 999, &raw),
            Err(ExecutorError::UnexpectedDepositType { .. })
        ));
    }

    #[test]
    fn test_check_raw_deposit_rejects_non_deposit() {
        let raw = RawTransaction::from(vec![0x02, 0xc0]);
        assert!(matches!(
            check_raw_deposit(&config(), 1000, &raw),
            Err(ExecutorError::RLPError(Eip2718Error::UnexpectedType(0x02)))
        ));
    }
}
