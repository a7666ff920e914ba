// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Not signed in; run 'notekeep login' first")]
    NotAuthenticated,
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Data service error: {0}")]
    DataService(String),
    #[error("Storage service error: {0}")]
    Storage(String),
    #[error("Invalid image '{file_name}': {reason}")]
    InvalidImage { file_name: String, reason: String },
    #[error("Session error: {0}")]
    SessionError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}
