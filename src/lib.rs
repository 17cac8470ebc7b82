//! deepcount — TD Sequential counting over OHLC bars, plus the
//! position/order state model of a single-unit trading agent.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
