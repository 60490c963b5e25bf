//! Setup errors.
//!
//! The simulation step itself cannot fail. Only the setup surface
//! (roster configuration and settings files) reports errors.

use thiserror::Error;

use crate::constants::{MAX_ACTIONS, MAX_ROSTER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("roster is empty; at least one unit is required")]
    EmptyRoster,
    #[error("roster has {count} units; at most {max} are allowed", max = MAX_ROSTER)]
    RosterTooLarge { count: usize },
    #[error("unit {slot} has {count} actions; at most {max} are allowed", max = MAX_ACTIONS)]
    TooManyActions { slot: usize, count: usize },
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
}
