//! Errors for the `bluebird-genesis` crate.

use crate::Hardfork;

/// An error raised while constructing a [ChainConfig] or [ForkSchedule].
///
/// [ChainConfig]: crate::ChainConfig
/// [ForkSchedule]: crate::ForkSchedule
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The elasticity multiplier of a parameter table is zero.
    #[display("Elasticity multiplier of the {_0} fee parameters must be non-zero")]
    ZeroElasticityMultiplier(&'static str),
    /// The base fee change denominator of a parameter table is zero.
    #[display("Base fee change denominator of the {_0} fee parameters must be non-zero")]
    ZeroBaseFeeChangeDenominator(&'static str),
    /// The pre-fork parameters carry a minimum base fee. Minimums are only enforced by forks.
    #[display("The default fee parameters cannot define a minimum base fee")]
    DefaultMinimumBaseFee,
    /// A fork activation is not strictly later than the activation preceding it.
    #[display("Activation of {_0} at {_1} must be later than the previous activation at {_2}")]
    UnorderedActivation(Hardfork, u64, u64),
}

impl core::error::Error for ConfigError {}
