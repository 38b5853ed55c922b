// Upstream stats API access
pub mod client;
pub mod wire;

pub use client::*;
