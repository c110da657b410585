//! Load configuration

pub mod load_config;
pub mod null_handling;

pub use load_config::*;
pub use null_handling::*;
