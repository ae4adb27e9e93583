pub mod apis;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod normalizer;
pub mod server;
pub mod types;
