// src/application/store.rs
use crate::domain::{DomainError, Note};
use async_trait::async_trait;

/// Input for note creation: the two text fields plus an optional image
/// attachment, matching the creation form.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub name: String,
    pub description: String,
    pub attachment: Option<Attachment>,
}

/// An image file attached to a note at creation time.
///
/// `file_name` doubles as the storage object key of the record it is
/// attached to.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Data-service port over the backend's "Note" record type.
///
/// The backend scopes `list_notes` to the authenticated principal and
/// assigns `id`, `owner` and the timestamps on create.
#[async_trait]
pub trait NoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError>;

    /// Create a record; `image_key` is the attachment's file name, or empty
    /// when the note has no image.
    async fn create_note(
        &self,
        name: &str,
        description: &str,
        image_key: &str,
    ) -> Result<Note, DomainError>;

    async fn delete_note(&self, id: &str) -> Result<(), DomainError>;
}

/// Object-storage port. Paths are a function of the caller's identity, so
/// the binding resolves `key` to `media/{identity_id}/{key}` internally;
/// callers never pass the identity.
#[async_trait]
pub trait MediaStore {
    /// Time-limited signed retrieval URL for the object stored under `key`.
    async fn get_url(&self, key: &str) -> Result<String, DomainError>;

    /// Upload image bytes under `key`; resolves once the upload completes.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), DomainError>;
}
