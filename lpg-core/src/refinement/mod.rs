//! Contains local search operators which improve an already constructed tour.

mod exchange_2opt;
pub use self::exchange_2opt::ExchangeTwoOpt;
