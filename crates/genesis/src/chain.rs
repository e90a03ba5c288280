//! Chain Config Types

use crate::{
    ConfigError, FeeParameters, ForkActivation, ForkSchedule, Hardfork, BLUEBIRD_FEE_PARAMS,
    DEFAULT_FEE_PARAMS,
};
use alloc::vec::Vec;
use alloy_primitives::U256;

/// The chain configuration consulted by block validation and assembly.
///
/// A [ChainConfig] is built once at node start and never mutated afterwards. All constructors
/// validate the fee parameter tables, so the fee market never divides by a zero elasticity
/// multiplier or denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_config::ChainConfigDef"))]
#[cfg_attr(feature = "serde", serde(into = "serde_config::ChainConfigDef"))]
pub struct ChainConfig {
    chain_id: u64,
    bluebird_time: Option<u64>,
    base_fee_params: FeeParameters,
    bluebird_base_fee_params: FeeParameters,
    schedule: ForkSchedule,
}

impl ChainConfig {
    /// Creates a new [ChainConfig].
    ///
    /// ## Takes
    /// - `chain_id`: The L2 chain id.
    /// - `bluebird_time`: The Bluebird activation timestamp. `None` if the fork is not scheduled.
    /// - `base_fee_params`: The fee parameters in force before Bluebird.
    /// - `bluebird_base_fee_params`: The fee parameters in force from Bluebird onwards.
    ///
    /// ## Returns
    /// - `Err(ConfigError)`: If either parameter table is invalid.
    pub fn new(
        chain_id: u64,
        bluebird_time: Option<u64>,
        base_fee_params: FeeParameters,
        bluebird_base_fee_params: FeeParameters,
    ) -> Result<Self, ConfigError> {
        // Validated even when the fork is unscheduled.
        bluebird_base_fee_params.validate(Hardfork::Bluebird.as_str())?;

        let activations = bluebird_time
            .map(|timestamp| {
                ForkActivation::new(Hardfork::Bluebird, timestamp, bluebird_base_fee_params)
            })
            .into_iter()
            .collect::<Vec<_>>();
        let schedule = ForkSchedule::new(base_fee_params, activations)?;

        Ok(Self { chain_id, bluebird_time, base_fee_params, bluebird_base_fee_params, schedule })
    }

    /// Creates a [ChainConfig] with the built-in default and Bluebird fee parameters.
    pub fn with_bluebird(chain_id: u64, bluebird_time: Option<u64>) -> Self {
        let activations = bluebird_time
            .map(|timestamp| {
                ForkActivation::new(Hardfork::Bluebird, timestamp, BLUEBIRD_FEE_PARAMS)
            })
            .into_iter()
            .collect::<Vec<_>>();
        Self {
            chain_id,
            bluebird_time,
            base_fee_params: DEFAULT_FEE_PARAMS,
            bluebird_base_fee_params: BLUEBIRD_FEE_PARAMS,
            schedule: ForkSchedule { default_params: DEFAULT_FEE_PARAMS, activations },
        }
    }

    /// Returns the L2 chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Returns the Bluebird activation timestamp, if scheduled.
    pub const fn bluebird_time(&self) -> Option<u64> {
        self.bluebird_time
    }

    /// Returns the fee parameters in force before Bluebird.
    pub const fn base_fee_params(&self) -> &FeeParameters {
        &self.base_fee_params
    }

    /// Returns the fee parameters in force from Bluebird onwards.
    pub const fn bluebird_base_fee_params(&self) -> &FeeParameters {
        &self.bluebird_base_fee_params
    }

    /// Returns the [ForkSchedule] derived from this configuration.
    pub const fn schedule(&self) -> &ForkSchedule {
        &self.schedule
    }

    /// Returns `true` if Bluebird is active at the given block timestamp.
    pub fn is_bluebird_active(&self, timestamp: u64) -> bool {
        self.schedule.is_active(Hardfork::Bluebird, timestamp)
    }

    /// Returns the [FeeParameters] in force at `timestamp`.
    pub fn fee_params(&self, timestamp: u64) -> FeeParameters {
        self.schedule.resolve(timestamp)
    }

    /// Returns the elasticity multiplier in force at `timestamp`.
    pub fn elasticity_multiplier(&self, timestamp: u64) -> u64 {
        self.schedule.elasticity_multiplier(timestamp)
    }

    /// Returns the base fee change denominator in force at `timestamp`.
    pub fn base_fee_change_denominator(&self, timestamp: u64) -> u64 {
        self.schedule.base_fee_change_denominator(timestamp)
    }

    /// Returns the minimum base fee in force at `timestamp`, if any.
    pub fn minimum_base_fee(&self, timestamp: u64) -> Option<U256> {
        self.schedule.minimum_base_fee(timestamp)
    }
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::ChainConfig;
    use crate::{ConfigError, FeeParameters, BLUEBIRD_FEE_PARAMS, DEFAULT_FEE_PARAMS};

    /// The on-disk representation of a [ChainConfig].
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct ChainConfigDef {
        chain_id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bluebird_time: Option<u64>,
        #[serde(default = "default_fee_params")]
        base_fee_params: FeeParameters,
        #[serde(default = "bluebird_fee_params")]
        bluebird_base_fee_params: FeeParameters,
    }

    const fn default_fee_params() -> FeeParameters {
        DEFAULT_FEE_PARAMS
    }

    const fn bluebird_fee_params() -> FeeParameters {
        BLUEBIRD_FEE_PARAMS
    }

    impl TryFrom<ChainConfigDef> for ChainConfig {
        type Error = ConfigError;

        fn try_from(def: ChainConfigDef) -> Result<Self, Self::Error> {
            Self::new(
                def.chain_id,
                def.bluebird_time,
                def.base_fee_params,
                def.bluebird_base_fee_params,
            )
        }
    }

    impl From<ChainConfig> for ChainConfigDef {
        fn from(config: ChainConfig) -> Self {
            Self {
                chain_id: config.chain_id,
                bluebird_time: config.bluebird_time,
                base_fee_params: config.base_fee_params,
                bluebird_base_fee_params: config.bluebird_base_fee_params,
            }
        }
    }
}
