//! # storage-adapters
//!
//! Where the page's initial posts and users come from. There is no
//! persistence: a seed is parsed once at mount and lives in memory.

pub mod seed;

pub use seed::{Seed, SeedError};
