pub mod cache_sweeper;

pub use cache_sweeper::*;
