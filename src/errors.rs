// src/errors.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write preference file: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}
