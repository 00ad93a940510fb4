//! Daily stock report over an aging inventory.
//!
//! The binary in this crate loads a stock manifest, advances the shop one
//! day at a time, and prints every item after each day. The domain rules
//! live in `shelflife-inventory`; this crate is only the boundary around
//! them (manifest parsing, env configuration, output).

pub mod manifest;

/// Stock manifest compiled into the binary, used when no override is given.
pub const DEFAULT_MANIFEST: &str = include_str!("../data/stock_manifest.json");
