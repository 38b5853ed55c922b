// Pure generators for placeholder payloads
pub mod mock_data;
pub mod tiers;

pub use mock_data::*;
pub use tiers::*;
