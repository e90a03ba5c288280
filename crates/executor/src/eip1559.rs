//! Fork-gated EIP-1559 base fee calculation and header verification.

use crate::{BaseFeeError, BaseFeeHeader, ExecutorError, ExecutorResult};
use alloy_primitives::{U256, U512};
use bluebird_genesis::ChainConfig;
use core::cmp::Ordering;

/// Computes the base fee of the block following `parent`.
///
/// ## Takes
/// - `config`: The chain configuration.
/// - `parent`: The parent header. A missing base fee is read as zero.
/// - `timestamp`: The timestamp of the block being built or validated. Selects the fee
///   parameters, so the first Bluebird block already uses the Bluebird parameters.
///
/// ## Returns
/// - `Ok(U256)`: The base fee, floored at the minimum base fee in force at `timestamp`.
/// - `Err(BaseFeeError::ZeroGasTarget)`: If the parent gas limit is smaller than the
///   elasticity multiplier.
pub fn calc_base_fee<H: BaseFeeHeader>(
    config: &ChainConfig,
    parent: &H,
    timestamp: u64,
) -> Result<U256, BaseFeeError> {
    let params = config.fee_params(timestamp);
    let gas_limit = parent.gas_limit();
    let target = gas_limit / params.elasticity_multiplier;
    if target == 0 {
        return Err(BaseFeeError::ZeroGasTarget {
            gas_limit,
            elasticity_multiplier: params.elasticity_multiplier,
        });
    }

    let parent_base_fee = parent.base_fee().unwrap_or_default();
    let gas_used = parent.gas_used();
    let denominator = params.base_fee_change_denominator;

    let mut base_fee = match gas_used.cmp(&target) {
        Ordering::Equal => parent_base_fee,
        Ordering::Greater => {
            let delta = fee_delta(parent_base_fee, gas_used - target, target, denominator);
            parent_base_fee.saturating_add(delta.max(U256::from(1)))
        }
        Ordering::Less => parent_base_fee
            .saturating_sub(fee_delta(parent_base_fee, target - gas_used, target, denominator)),
    };

    if let Some(minimum) = params.minimum_base_fee {
        if base_fee < minimum {
            debug!(
                target: "base_fee",
                "Raising base fee {base_fee} to minimum {minimum} at timestamp {timestamp}"
            );
            base_fee = minimum;
        }
    }

    trace!(
        target: "base_fee",
        parent = parent.number(),
        %parent_base_fee,
        gas_used,
        gas_target = target,
        %base_fee,
        "Computed base fee for timestamp {timestamp}"
    );
    Ok(base_fee)
}

/// `parent_base_fee * gas_delta / target / denominator`, flooring each division. Saturates at
/// [U256::MAX].
fn fee_delta(parent_base_fee: U256, gas_delta: u64, target: u64, denominator: u64) -> U256 {
    let delta = U512::from(parent_base_fee) * U512::from(gas_delta) /
        U512::from(target) /
        U512::from(denominator);
    if delta > U512::from(U256::MAX) {
        U256::MAX
    } else {
        U256::from_limbs_slice(&delta.as_limbs()[..4])
    }
}

/// Verifies the EIP-1559 fields of `header` against its `parent`.
///
/// The gas limit is not bounded against the parent's. It is set through the system config on L1
/// and may change by any amount in a single block.
///
/// ## Takes
/// - `config`: The chain configuration.
/// - `parent`: The parent header.
/// - `header`: The header to verify.
///
/// ## Returns
/// - `Ok(())`: If the base fee equals [calc_base_fee] at the header's timestamp.
/// - `Err(ExecutorError)`: Otherwise.
pub fn verify_eip1559_header<P, H>(
    config: &ChainConfig,
    parent: &P,
    header: &H,
) -> ExecutorResult<()>
where
    P: BaseFeeHeader,
    H: BaseFeeHeader,
{
    let got = header.base_fee().ok_or(ExecutorError::MissingBaseFee)?;
    let expected = calc_base_fee(config, parent, header.timestamp())?;
    if got != expected {
        warn!(
            target: "base_fee",
            "Invalid base fee in block {}: have {got}, want {expected}",
            header.number()
        );
        return Err(ExecutorError::InvalidBaseFee { expected, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockHeader;
    use bluebird_genesis::{FeeParameters, BLUEBIRD_MINIMUM_BASE_FEE, DEFAULT_FEE_PARAMS};
    use proptest::{prelude::any, proptest};

    const BLUEBIRD_TIME: u64 = 1000;

    fn config() -> ChainConfig {
        ChainConfig::with_bluebird(1, Some(BLUEBIRD_TIME))
    }

    fn parent(gas_limit: u64, gas_used: u64, base_fee: u64) -> BlockHeader {
        BlockHeader {
            number: 1,
            gas_limit,
            gas_used,
            base_fee: Some(U256::from(base_fee)),
            timestamp: BLUEBIRD_TIME - 2,
        }
    }

    #[test]
    fn test_base_fee_unchanged_at_target() {
        let parent = parent(30_000_000, 15_000_000, 1_000_000_000);
        let base_fee = calc_base_fee(&config(), &parent, BLUEBIRD_TIME - 1).unwrap();
        assert_eq!(base_fee, U256::from(1_000_000_000u64));
    }

    #[test]
    fn test_base_fee_pre_fork_known_values() {
        let config = config();
        // 1e9 * 5M / 15M / 8 = 41_666_666
        let above = parent(30_000_000, 20_000_000, 1_000_000_000);
        assert_eq!(calc_base_fee(&config, &above, 0).unwrap(), U256::from(1_041_666_666u64));

        let below = parent(30_000_000, 10_000_000, 1_000_000_000);
        assert_eq!(calc_base_fee(&config, &below, 0).unwrap(), U256::from(958_333_334u64));

        // Empty parent block: the maximum decrease of 1/8.
        let empty = parent(30_000_000, 0, 1_000_000_000);
        assert_eq!(calc_base_fee(&config, &empty, 0).unwrap(), U256::from(875_000_000u64));
    }

    #[test]
    fn test_base_fee_increases_after_fork() {
        // The same parent is at target before Bluebird and above the 7.5M target after.
        let parent = parent(30_000_000, 15_000_000, 1_000_000_000);
        let config = config();
        let pre = calc_base_fee(&config, &parent, BLUEBIRD_TIME - 1).unwrap();
        let post = calc_base_fee(&config, &parent, BLUEBIRD_TIME).unwrap();
        assert_eq!(pre, U256::from(1_000_000_000u64));
        // 1e9 * 7.5M / 7.5M / 250 = 4_000_000
        assert_eq!(post, U256::from(1_004_000_000u64));
        assert_eq!(calc_base_fee(&config, &parent, BLUEBIRD_TIME + 1).unwrap(), post);
    }

    #[test]
    fn test_minimum_base_fee_enforced() {
        let parent = parent(30_000_000, 0, 1000);
        let config = config();
        assert_eq!(calc_base_fee(&config, &parent, BLUEBIRD_TIME - 1).unwrap(), U256::from(875));
        assert_eq!(
            calc_base_fee(&config, &parent, BLUEBIRD_TIME).unwrap(),
            U256::from(BLUEBIRD_MINIMUM_BASE_FEE)
        );
    }

    #[test]
    fn test_minimum_base_fee_with_missing_parent_base_fee() {
        let parent = BlockHeader { gas_limit: 30_000_000, ..Default::default() };
        let config = config();
        assert_eq!(calc_base_fee(&config, &parent, 0).unwrap(), U256::ZERO);
        assert_eq!(
            calc_base_fee(&config, &parent, BLUEBIRD_TIME).unwrap(),
            U256::from(BLUEBIRD_MINIMUM_BASE_FEE)
        );
    }

    #[test]
    fn test_minimum_increase_is_one() {
        // 7 * 1 / 15M / 8 floors to zero, the increase is still one wei.
        let parent = parent(30_000_000, 15_000_001, 7);
        assert_eq!(calc_base_fee(&config(), &parent, 0).unwrap(), U256::from(8));
    }

    #[test]
    fn test_zero_gas_target() {
        let parent = parent(1, 0, 1000);
        let err = calc_base_fee(&config(), &parent, 0).unwrap_err();
        assert_eq!(err, BaseFeeError::ZeroGasTarget { gas_limit: 1, elasticity_multiplier: 2 });
    }

    #[test]
    fn test_base_fee_saturates() {
        let parent = BlockHeader {
            gas_limit: 2,
            gas_used: u64::MAX,
            base_fee: Some(U256::MAX),
            ..Default::default()
        };
        assert_eq!(calc_base_fee(&config(), &parent, 0).unwrap(), U256::MAX);
    }

    #[test]
    fn test_verify_eip1559_header_unbounded_gas_limit_change() {
        let config = config();
        let parent = parent(30_000_000, 15_000_000, 1_000_000_000);
        for gas_limit in [60_000_000, 15_000_000] {
            let mut header = BlockHeader {
                number: 2,
                gas_limit,
                timestamp: BLUEBIRD_TIME,
                ..Default::default()
            };
            header.base_fee = Some(calc_base_fee(&config, &parent, header.timestamp).unwrap());
            assert!(verify_eip1559_header(&config, &parent, &header).is_ok());
        }
    }

    #[test]
    fn test_verify_eip1559_header() {
        let config = config();
        let parent = parent(30_000_000, 15_000_000, 1_000_000_000);
        let mut header = BlockHeader {
            number: 2,
            gas_limit: 30_000_000,
            gas_used: 0,
            base_fee: Some(U256::from(1_004_000_000u64)),
            timestamp: BLUEBIRD_TIME,
        };
        assert!(verify_eip1559_header(&config, &parent, &header).is_ok());

        header.base_fee = Some(U256::from(1_000_000_000u64));
        let err = verify_eip1559_header(&config, &parent, &header).unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::InvalidBaseFee { expected, got }
                if expected == U256::from(1_004_000_000u64) && got == U256::from(1_000_000_000u64)
        ));

        header.base_fee = None;
        assert!(matches!(
            verify_eip1559_header(&config, &parent, &header),
            Err(ExecutorError::MissingBaseFee)
        ));
    }

    #[test]
    fn test_verify_eip1559_alloy_header() {
        let config = config();
        let parent = alloy_consensus::Header {
            number: 1,
            gas_limit: 30_000_000,
            gas_used: 15_000_000,
            base_fee_per_gas: Some(1_000_000_000),
            timestamp: BLUEBIRD_TIME - 2,
            ..Default::default()
        };
        let header = alloy_consensus::Header {
            number: 2,
            gas_limit: 30_000_000,
            base_fee_per_gas: Some(1_000_000_000),
            timestamp: BLUEBIRD_TIME - 1,
            ..Default::default()
        };
        assert!(verify_eip1559_header(&config, &parent, &header).is_ok());
    }

    #[test]
    fn test_custom_fork_params() {
        let bluebird = FeeParameters::new(4, 50).with_minimum_base_fee(U256::from(10));
        let config = ChainConfig::new(1, Some(0), DEFAULT_FEE_PARAMS, bluebird).unwrap();
        let parent = parent(30_000_000, 15_000_000, 1_000_000_000);
        // 1e9 * 7.5M / 7.5M / 50 = 20_000_000
        assert_eq!(calc_base_fee(&config, &parent, 0).unwrap(), U256::from(1_020_000_000u64));
    }

    proptest! {
        #[test]
        fn test_base_fee_never_below_minimum_post_fork(
            gas_limit in 4u64..=u64::MAX,
            gas_used in any::<u64>(),
            base_fee in any::<u128>(),
            offset in 0u64..1_000_000,
        ) {
            let parent = BlockHeader {
                gas_limit,
                gas_used,
                base_fee: Some(U256::from(base_fee)),
                ..Default::default()
            };
            let base_fee = calc_base_fee(&config(), &parent, BLUEBIRD_TIME + offset).unwrap();
            assert!(base_fee >= U256::from(BLUEBIRD_MINIMUM_BASE_FEE));
        }

        #[test]
        fn test_larger_denominator_changes_less(
            gas_used in 0u64..=60_000_000,
            base_fee in any::<u64>(),
            denominator in 1u64..10_000,
            extra in 1u64..10_000,
        ) {
            let parent = parent(30_000_000, gas_used, base_fee);
            let small_params = FeeParameters::new(2, denominator);
            let large_params = FeeParameters::new(2, denominator + extra);
            let small = ChainConfig::new(1, None, small_params, DEFAULT_FEE_PARAMS).unwrap();
            let large = ChainConfig::new(1, None, large_params, DEFAULT_FEE_PARAMS).unwrap();

            let parent_fee = U256::from(base_fee);
            let small_change = calc_base_fee(&small, &parent, 0).unwrap().abs_diff(parent_fee);
            let large_change = calc_base_fee(&large, &parent, 0).unwrap().abs_diff(parent_fee);
            assert!(large_change <= small_change);
        }

        #[test]
        fn test_higher_elasticity_never_lowers_base_fee(
            gas_used in 0u64..=30_000_000,
            base_fee in any::<u64>(),
        ) {
            let parent = parent(30_000_000, gas_used, base_fee);
            let low = ChainConfig::new(1, None, FeeParameters::new(2, 8), DEFAULT_FEE_PARAMS);
            let high = ChainConfig::new(1, None, FeeParameters::new(4, 8), DEFAULT_FEE_PARAMS);
            let low_fee = calc_base_fee(&low.unwrap(), &parent, 0).unwrap();
            let high_fee = calc_base_fee(&high.unwrap(), &parent, 0).unwrap();
            assert!(high_fee >= low_fee);
        }
    }
}
