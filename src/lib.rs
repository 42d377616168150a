pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod protocol;
pub mod server;
pub mod storage;
pub mod transfer;

pub use config::ServerConfig;
pub use server::Server;
