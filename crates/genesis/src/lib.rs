#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod params;
pub use params::{
    FeeParameters, BLUEBIRD_BASE_FEE_CHANGE_DENOMINATOR, BLUEBIRD_ELASTICITY_MULTIPLIER,
    BLUEBIRD_FEE_PARAMS, BLUEBIRD_MINIMUM_BASE_FEE, DEFAULT_BASE_FEE_CHANGE_DENOMINATOR,
    DEFAULT_ELASTICITY_MULTIPLIER, DEFAULT_FEE_PARAMS,
};

mod hardfork;
pub use hardfork::Hardfork;

mod schedule;
pub use schedule::{ForkActivation, ForkSchedule};

mod chain;
pub use chain::ChainConfig;

mod errors;
pub use errors::ConfigError;
