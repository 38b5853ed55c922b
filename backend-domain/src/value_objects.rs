// Domain value objects
pub mod data_source;
pub mod player_tag;
pub mod tier;

pub use data_source::*;
pub use player_tag::*;
pub use tier::*;
