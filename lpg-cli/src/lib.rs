//! A crate contains the command line surface of LPG delivery routing and pricing: config file
//! support, json and csv formats.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub use lpg_core as core;

pub mod extensions;
