// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A note as held by the client after a fetch.
///
/// `image_key` is the persisted storage object key (the uploaded file's
/// original name). `image_url` is the signed retrieval URL derived during a
/// fetch; it is never persisted or sent back to the backend. The raw key is
/// only ever used to build a storage path, never shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// True if the backend record references a storage object.
    pub fn has_image(&self) -> bool {
        self.image_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
