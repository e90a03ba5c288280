#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{BaseFeeError, ExecutorError, ExecutorResult};

mod header;
pub use header::{BaseFeeHeader, BlockHeader};

mod eip1559;
pub use eip1559::{calc_base_fee, verify_eip1559_header};

mod deposits;
pub use deposits::{check_deposit_type, check_raw_deposit, deposit_tx_type};
