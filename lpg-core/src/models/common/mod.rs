//! Common models.

mod location;
pub use self::location::*;

mod time;
pub use self::time::*;

/// Specifies distance in kilometers.
pub type Distance = crate::utils::Float;

/// Specifies an amount of money in currency units.
pub type Money = crate::utils::Float;
