//! MCPdex: searchable MCP server catalog with Trust Score ranking

pub mod badge;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod scoring;
pub mod search;
pub mod utils;

pub use config::Config;
