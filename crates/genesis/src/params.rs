//! Module containing fee parameters.

use crate::ConfigError;
use alloy_eips::eip1559::BaseFeeParams;
use alloy_primitives::U256;

/// The elasticity multiplier used before the Bluebird hardfork, as defined by EIP-1559.
pub const DEFAULT_ELASTICITY_MULTIPLIER: u64 = 2;

/// The base fee change denominator used before the Bluebird hardfork, as defined by EIP-1559.
pub const DEFAULT_BASE_FEE_CHANGE_DENOMINATOR: u64 = 8;

/// The elasticity multiplier activated by the Bluebird hardfork.
///
/// Halves the gas target relative to [DEFAULT_ELASTICITY_MULTIPLIER] for the same gas limit.
pub const BLUEBIRD_ELASTICITY_MULTIPLIER: u64 = 4;

/// The base fee change denominator activated by the Bluebird hardfork.
pub const BLUEBIRD_BASE_FEE_CHANGE_DENOMINATOR: u64 = 250;

/// The minimum base fee, in wei, enforced from the Bluebird hardfork onwards.
pub const BLUEBIRD_MINIMUM_BASE_FEE: u64 = 1_000_000;

/// The fee parameters that apply before the Bluebird hardfork.
pub const DEFAULT_FEE_PARAMS: FeeParameters = FeeParameters {
    elasticity_multiplier: DEFAULT_ELASTICITY_MULTIPLIER,
    base_fee_change_denominator: DEFAULT_BASE_FEE_CHANGE_DENOMINATOR,
    minimum_base_fee: None,
};

/// The fee parameters that apply from the Bluebird hardfork onwards.
pub const BLUEBIRD_FEE_PARAMS: FeeParameters = FeeParameters {
    elasticity_multiplier: BLUEBIRD_ELASTICITY_MULTIPLIER,
    base_fee_change_denominator: BLUEBIRD_BASE_FEE_CHANGE_DENOMINATOR,
    minimum_base_fee: Some(U256::from_limbs([BLUEBIRD_MINIMUM_BASE_FEE, 0, 0, 0])),
};

/// The tunable EIP-1559 parameters of one fee era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FeeParameters {
    /// Ratio between a block's gas limit and its gas target.
    pub elasticity_multiplier: u64,
    /// Bounds the per-block change of the base fee to `1 / denominator`.
    pub base_fee_change_denominator: u64,
    /// Floor applied to every computed base fee while these parameters are active.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub minimum_base_fee: Option<U256>,
}

impl FeeParameters {
    /// Creates a new [FeeParameters] without a minimum base fee.
    pub const fn new(elasticity_multiplier: u64, base_fee_change_denominator: u64) -> Self {
        Self { elasticity_multiplier, base_fee_change_denominator, minimum_base_fee: None }
    }

    /// Sets the minimum base fee.
    pub const fn with_minimum_base_fee(mut self, minimum_base_fee: U256) -> Self {
        self.minimum_base_fee = Some(minimum_base_fee);
        self
    }

    /// Checks that both the elasticity multiplier and the denominator are non-zero.
    ///
    /// `era` names the parameter table in the returned error.
    pub const fn validate(&self, era: &'static str) -> Result<(), ConfigError> {
        if self.elasticity_multiplier == 0 {
            return Err(ConfigError::ZeroElasticityMultiplier(era));
        }
        if self.base_fee_change_denominator == 0 {
            return Err(ConfigError::ZeroBaseFeeChangeDenominator(era));
        }
        Ok(())
    }

    /// Returns the parameters as alloy [BaseFeeParams]. The minimum base fee is dropped.
    pub const fn as_base_fee_params(&self) -> BaseFeeParams {
        BaseFeeParams {
            max_change_denominator: self.base_fee_change_denominator as u128,
            elasticity_multiplier: self.elasticity_multiplier as u128,
        }
    }
}

impl Default for FeeParameters {
    fn default() -> Self {
        DEFAULT_FEE_PARAMS
    }
}
