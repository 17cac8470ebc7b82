//! Agent position/order state classification.
//!
//! The agent holds at most one unit (position ∈ {-1, 0, +1}) and has at most
//! one unfilled order outstanding (pending ∈ {-1, 0, +1}). A non-zero position
//! may only coexist with no pending order or with a closing order of the
//! opposite sign, which leaves exactly 7 of the 9 combinations valid. The two
//! same-sign pairs (adding to an open position) are rejected outright.

use crate::domain::error::DeepcountError;
use std::fmt;

/// One of the 7 valid (position, pending) snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentState {
    /// No position, no pending order.
    Flat,
    /// No position, buy order pending.
    OpeningLong,
    /// No position, sell order pending.
    OpeningShort,
    /// Long one unit, no pending order.
    Long,
    /// Long one unit, sell order pending.
    ClosingLong,
    /// Short one unit, no pending order.
    Short,
    /// Short one unit, buy order pending.
    ClosingShort,
}

impl AgentState {
    /// All 7 valid states, in (position, pending) enumeration order.
    pub const ALL: [AgentState; 7] = [
        AgentState::Flat,
        AgentState::OpeningLong,
        AgentState::OpeningShort,
        AgentState::Long,
        AgentState::ClosingLong,
        AgentState::Short,
        AgentState::ClosingShort,
    ];

    /// Net held quantity for this state.
    pub fn position(&self) -> i8 {
        match self {
            AgentState::Flat | AgentState::OpeningLong | AgentState::OpeningShort => 0,
            AgentState::Long | AgentState::ClosingLong => 1,
            AgentState::Short | AgentState::ClosingShort => -1,
        }
    }

    /// Outstanding order direction for this state.
    pub fn pending(&self) -> i8 {
        match self {
            AgentState::Flat | AgentState::Long | AgentState::Short => 0,
            AgentState::OpeningLong | AgentState::ClosingShort => 1,
            AgentState::OpeningShort | AgentState::ClosingLong => -1,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.position() == 0
    }

    pub fn has_pending(&self) -> bool {
        self.pending() != 0
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentState::Flat => "flat",
            AgentState::OpeningLong => "opening long",
            AgentState::OpeningShort => "opening short",
            AgentState::Long => "long",
            AgentState::ClosingLong => "closing long",
            AgentState::Short => "short",
            AgentState::ClosingShort => "closing short",
        };
        write!(f, "{}", name)
    }
}

fn check_unit(field: &'static str, value: i8) -> Result<(), DeepcountError> {
    if (-1..=1).contains(&value) {
        Ok(())
    } else {
        Err(DeepcountError::InvalidUnit { field, value })
    }
}

/// Classify a (position, pending) snapshot into one of the 7 valid states.
///
/// Inputs outside {-1, 0, 1} fail with [`DeepcountError::InvalidUnit`] before
/// any classification. The two same-sign pairs, (1, 1) and (-1, -1), fail
/// with [`DeepcountError::InvalidState`].
pub fn classify(position: i8, pending: i8) -> Result<AgentState, DeepcountError> {
    check_unit("position", position)?;
    check_unit("pending", pending)?;

    match (position, pending) {
        (0, 0) => Ok(AgentState::Flat),
        (0, 1) => Ok(AgentState::OpeningLong),
        (0, -1) => Ok(AgentState::OpeningShort),
        (1, 0) => Ok(AgentState::Long),
        (1, -1) => Ok(AgentState::ClosingLong),
        (-1, 0) => Ok(AgentState::Short),
        (-1, 1) => Ok(AgentState::ClosingShort),
        _ => Err(DeepcountError::InvalidState { position, pending }),
    }
}
