//! Contains domain models used by route sequencing and price calculation.

pub mod common;

mod quote;
pub use self::quote::*;

mod route;
pub use self::route::*;

mod tour;
pub use self::tour::*;

mod order;
pub use self::order::*;
