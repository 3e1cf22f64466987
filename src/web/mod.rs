//! JSON API for running and comparing engines on stored graphs.

pub mod api;
pub mod models;
pub mod server;

pub use server::{build_app, start_server, start_server_with_config, ServerConfig};
