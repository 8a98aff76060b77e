use thiserror::Error;

/// Errors raised by the simulation when a caller breaks its contract.
///
/// None of these are transient: every variant describes a programming or
/// configuration mistake, so there is nothing to retry.
#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
