// src/infrastructure/mod.rs
pub mod api;
pub mod config;
pub mod session;
pub mod storage;

pub use api::HttpNoteStore;
pub use config::Config;
pub use session::{Session, SessionStore};
pub use storage::HttpMediaStore;
