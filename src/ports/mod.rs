//! Port traits implemented by concrete adapters.

pub mod config_port;
pub mod data_port;
