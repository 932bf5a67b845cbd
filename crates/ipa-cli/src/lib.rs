pub mod commands;
pub mod delimit;
pub mod input;
pub mod trace_init;

use ipa_core::TableConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("table error: {0}")]
    Table(#[from] TableConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
