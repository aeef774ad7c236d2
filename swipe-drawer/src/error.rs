use std::io;

use thiserror::Error;

/// Errors raised while loading drawer configuration.
///
/// The interaction state machine itself never fails; see
/// [`PanelController`](crate::PanelController).
#[derive(Debug, Error)]
pub enum DrawerError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DrawerError>;
