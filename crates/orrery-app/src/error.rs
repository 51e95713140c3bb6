//! Application-level errors.

use orrery_body::{BodyError, ParseEventError};
use orrery_config::ConfigError;

/// Anything that stops the app before or during setup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// Creating an application directory failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Body(#[from] BodyError),

    /// A key binding names an event that does not exist.
    #[error("invalid key binding: {0}")]
    Binding(#[from] ParseEventError),
}
