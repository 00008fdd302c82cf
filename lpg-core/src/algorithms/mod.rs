//! This module contains generic algorithms used by sequencing and pricing.

pub mod geometry;
