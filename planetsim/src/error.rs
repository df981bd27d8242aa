//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while building or stepping a simulation
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid body `{name}`: radius ({radius}) and mass ({mass}) must be finite and positive")]
    InvalidBody { name: String, radius: f64, mass: f64 },

    #[error("degenerate configuration: bodies `{lhs}` and `{rhs}` occupy the same position")]
    DegenerateConfiguration { lhs: String, rhs: String },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}
