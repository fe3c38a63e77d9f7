pub mod api;
pub mod config;
pub mod errors;
pub mod queues;
pub mod server;
