// Port traits (interfaces)
// Define what the handlers need from the upstream data layer

pub mod services;

pub use services::*;
