//! Contains the [Hardfork] type.

use derive_more::Display;

/// Hardforks that change the fee market or the deposit transaction format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Display)]
pub enum Hardfork {
    /// Raises the elasticity multiplier and base fee change denominator, introduces a minimum
    /// base fee and switches deposits to the V2 transaction type.
    #[display("bluebird")]
    Bluebird,
}

impl Hardfork {
    /// Returns the lowercase name of the hardfork.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bluebird => "bluebird",
        }
    }
}
