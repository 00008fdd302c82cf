//! Contains the delivery price calculator.
//!
//! A quote consists of four components:
//! - **base price**: looked up by cylinder size in the tariff
//! - **distance fee**: charged per km outside of the free delivery radius
//! - **demand surcharge**: a tiered percentage of the base price driven by demand level
//! - **time surcharge**: stacking weekend, night and weekday peak percentages of the base price
//!
//! Every percentage based amount is rounded up to the whole currency unit independently.

mod calculator;
pub use self::calculator::*;

mod demand;
pub use self::demand::*;

mod tariff;
pub use self::tariff::*;
