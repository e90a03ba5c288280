//! Contains the [ForkSchedule], which resolves the active [FeeParameters] for a timestamp.

use crate::{ConfigError, FeeParameters, Hardfork};
use alloc::vec::Vec;
use alloy_primitives::U256;

/// A fork that replaces the active [FeeParameters] from `timestamp` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForkActivation {
    /// The activating hardfork.
    pub fork: Hardfork,
    /// The first block timestamp at which the fork is active.
    pub timestamp: u64,
    /// The fee parameters in force while this fork is the latest active one.
    pub params: FeeParameters,
}

impl ForkActivation {
    /// Creates a new [ForkActivation].
    pub const fn new(fork: Hardfork, timestamp: u64, params: FeeParameters) -> Self {
        Self { fork, timestamp, params }
    }

    /// Returns `true` if the fork is active at the given block timestamp.
    pub const fn is_active(&self, timestamp: u64) -> bool {
        timestamp >= self.timestamp
    }
}

/// An immutable, validated list of fee parameter eras.
///
/// Every query goes through [ForkSchedule::active], so two accessors called with the same
/// timestamp always observe the same era.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForkSchedule {
    pub(crate) default_params: FeeParameters,
    pub(crate) activations: Vec<ForkActivation>,
}

impl ForkSchedule {
    /// Creates a new [ForkSchedule].
    ///
    /// ## Takes
    /// - `default_params`: The parameters in force before the first activation.
    /// - `activations`: The fork activations, ordered by strictly increasing timestamp.
    ///
    /// ## Returns
    /// - `Ok(ForkSchedule)`: If all parameter tables are valid and the activations are ordered.
    /// - `Err(ConfigError)`: Otherwise.
    pub fn new(
        default_params: FeeParameters,
        activations: Vec<ForkActivation>,
    ) -> Result<Self, ConfigError> {
        default_params.validate("default")?;
        if default_params.minimum_base_fee.is_some() {
            return Err(ConfigError::DefaultMinimumBaseFee);
        }

        let mut previous: Option<u64> = None;
        for activation in &activations {
            activation.params.validate(activation.fork.as_str())?;
            if let Some(prev) = previous.filter(|prev| activation.timestamp <= *prev) {
                return Err(ConfigError::UnorderedActivation(
                    activation.fork,
                    activation.timestamp,
                    prev,
                ));
            }
            previous = Some(activation.timestamp);
        }

        Ok(Self { default_params, activations })
    }

    /// Returns the parameters in force before any fork activates.
    pub const fn default_params(&self) -> &FeeParameters {
        &self.default_params
    }

    /// Returns the fork activations in order.
    pub fn activations(&self) -> &[ForkActivation] {
        &self.activations
    }

    /// Returns the latest [ForkActivation] active at `timestamp`, if any.
    pub fn active(&self, timestamp: u64) -> Option<&ForkActivation> {
        self.activations.iter().rev().find(|activation| activation.is_active(timestamp))
    }

    /// Returns the latest [Hardfork] active at `timestamp`, if any.
    pub fn active_fork(&self, timestamp: u64) -> Option<Hardfork> {
        self.active(timestamp).map(|activation| activation.fork)
    }

    /// Returns `true` if `fork` is active at `timestamp`.
    pub fn is_active(&self, fork: Hardfork, timestamp: u64) -> bool {
        self.activations
            .iter()
            .any(|activation| activation.fork == fork && activation.is_active(timestamp))
    }

    /// Resolves the [FeeParameters] in force at `timestamp`. The activation boundary is
    /// inclusive.
    pub fn resolve(&self, timestamp: u64) -> FeeParameters {
        self.active(timestamp).map_or(self.default_params, |activation| activation.params)
    }

    /// Returns the elasticity multiplier in force at `timestamp`.
    pub fn elasticity_multiplier(&self, timestamp: u64) -> u64 {
        self.resolve(timestamp).elasticity_multiplier
    }

    /// Returns the base fee change denominator in force at `timestamp`.
    pub fn base_fee_change_denominator(&self, timestamp: u64) -> u64 {
        self.resolve(timestamp).base_fee_change_denominator
    }

    /// Returns the minimum base fee in force at `timestamp`, if any.
    pub fn minimum_base_fee(&self, timestamp: u64) -> Option<U256> {
        self.resolve(timestamp).minimum_base_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BLUEBIRD_FEE_PARAMS, DEFAULT_FEE_PARAMS};
    use alloc::vec;

    fn bluebird_at(timestamp: u64) -> ForkSchedule {
        ForkSchedule::new(
            DEFAULT_FEE_PARAMS,
            vec![ForkActivation::new(Hardfork::Bluebird, timestamp, BLUEBIRD_FEE_PARAMS)],
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_boundary() {
        let schedule = bluebird_at(1000);
        assert_eq!(schedule.resolve(0), DEFAULT_FEE_PARAMS);
        assert_eq!(schedule.resolve(999), DEFAULT_FEE_PARAMS);
        assert_eq!(schedule.resolve(1000), BLUEBIRD_FEE_PARAMS);
        assert_eq!(schedule.resolve(1001), BLUEBIRD_FEE_PARAMS);
        assert_eq!(schedule.resolve(u64::MAX), BLUEBIRD_FEE_PARAMS);
    }

    #[test]
    fn test_accessors_agree_with_resolve() {
        let schedule = bluebird_at(1000);
        for ts in [999, 1000, 1001] {
            let params = schedule.resolve(ts);
            assert_eq!(schedule.elasticity_multiplier(ts), params.elasticity_multiplier);
            assert_eq!(
                schedule.base_fee_change_denominator(ts),
                params.base_fee_change_denominator
            );
            assert_eq!(schedule.minimum_base_fee(ts), params.minimum_base_fee);
        }
        assert_eq!(schedule.minimum_base_fee(999), None);
        assert_eq!(schedule.active_fork(999), None);
        assert_eq!(schedule.active_fork(1000), Some(Hardfork::Bluebird));
        assert!(!schedule.is_active(Hardfork::Bluebird, 999));
        assert!(schedule.is_active(Hardfork::Bluebird, 1000));
    }

    #[test]
    fn test_schedule_parts() {
        let schedule = bluebird_at(1000);
        assert_eq!(schedule.default_params(), &DEFAULT_FEE_PARAMS);
        assert_eq!(
            schedule.activations(),
            &[ForkActivation::new(Hardfork::Bluebird, 1000, BLUEBIRD_FEE_PARAMS)]
        );
    }

    #[test]
    fn test_activation_at_genesis() {
        let schedule = bluebird_at(0);
        assert_eq!(schedule.resolve(0), BLUEBIRD_FEE_PARAMS);
    }

    #[test]
    fn test_no_activations() {
        let schedule = ForkSchedule::new(DEFAULT_FEE_PARAMS, vec![]).unwrap();
        assert_eq!(schedule.resolve(u64::MAX), DEFAULT_FEE_PARAMS);
        assert_eq!(schedule.active_fork(u64::MAX), None);
    }

    #[test]
    fn test_rejects_zero_params() {
        let err = ForkSchedule::new(FeeParameters::new(0, 8), vec![]).unwrap_err();
        assert_eq!(err, ConfigError::ZeroElasticityMultiplier("default"));

        let err = ForkSchedule::new(
            DEFAULT_FEE_PARAMS,
            vec![ForkActivation::new(Hardfork::Bluebird, 10, FeeParameters::new(4, 0))],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroBaseFeeChangeDenominator("bluebird"));
    }

    #[test]
    fn test_rejects_default_minimum() {
        let params = DEFAULT_FEE_PARAMS.with_minimum_base_fee(U256::from(7));
        let err = ForkSchedule::new(params, vec![]).unwrap_err();
        assert_eq!(err, ConfigError::DefaultMinimumBaseFee);
    }

    #[test]
    fn test_rejects_unordered_activations() {
        let err = ForkSchedule::new(
            DEFAULT_FEE_PARAMS,
            vec![
                ForkActivation::new(Hardfork::Bluebird, 10, BLUEBIRD_FEE_PARAMS),
                ForkActivation::new(Hardfork::Bluebird, 10, BLUEBIRD_FEE_PARAMS),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::UnorderedActivation(Hardfork::Bluebird, 10, 10));
    }
}
