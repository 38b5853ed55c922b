pub mod cache;
pub mod config;
pub mod services;
pub mod upstream;
pub mod utils;

pub use cache::*;
pub use config::*;
pub use services::*;
pub use upstream::*;
pub use utils::*;
