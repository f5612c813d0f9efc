pub mod config;
pub mod error;
pub mod report;
pub mod sentiment;
pub mod server;
pub mod store;
