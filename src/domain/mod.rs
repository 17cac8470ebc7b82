//! Core domain types and logic.

pub mod agent_state;
pub mod contract;
pub mod error;
pub mod ohlc;
pub mod sequential;
pub mod snapshot;
