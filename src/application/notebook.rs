// src/application/notebook.rs
use crate::application::store::{MediaStore, NewNote, NoteStore};
use crate::domain::{DomainError, Note};
use futures::future::join_all;
use tracing::{debug, info, warn};

/// The client's view of the user's notes.
///
/// Holds the in-memory note list as a single state slot that is only ever
/// replaced wholesale by a successful fetch, never patched in place. A
/// failed operation leaves the slot untouched (stale but consistent).
pub struct Notebook<S: NoteStore, M: MediaStore> {
    note_store: S,
    media_store: M,
    notes: Vec<Note>,
}

impl<S: NoteStore, M: MediaStore> Notebook<S, M> {
    pub fn new(note_store: S, media_store: M) -> Self {
        Self {
            note_store,
            media_store,
            notes: Vec::new(),
        }
    }

    /// Notes from the most recent successful fetch, in backend order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Fetch all notes visible to the current principal and resolve a signed
    /// URL for every note with an image key.
    ///
    /// Resolutions run concurrently, one in-flight request per note with an
    /// image, and the list order is preserved. A resolution failure degrades
    /// only that note (it renders without an image); a list failure leaves
    /// the previous state in place.
    pub async fn fetch_notes(&mut self) -> Result<(), DomainError> {
        let listed = self.note_store.list_notes().await?;
        debug!(count = listed.len(), "Fetched notes from data service");

        let media_store = &self.media_store;
        let resolved = join_all(listed.into_iter().map(|mut note| async move {
            if let Some(key) = note.image_key.clone().filter(|k| !k.is_empty()) {
                match media_store.get_url(&key).await {
                    Ok(url) => note.image_url = Some(url),
                    Err(err) => {
                        warn!(note_id = %note.id, %err, "Image URL resolution failed, rendering note without image");
                        note.image_url = None;
                    }
                }
            }
            note
        }))
        .await;

        self.notes = resolved;
        Ok(())
    }

    /// Create a note, upload its attachment if any, then refresh the list.
    ///
    /// The attachment's file name becomes the record's image key. Known
    /// risk: if the upload fails after a successful create, the record
    /// remains with a key that never resolves; there is no rollback.
    pub async fn create_note(&mut self, new_note: NewNote) -> Result<Note, DomainError> {
        let image_key = new_note
            .attachment
            .as_ref()
            .map(|a| a.file_name.as_str())
            .unwrap_or("");

        let created = self
            .note_store
            .create_note(&new_note.name, &new_note.description, image_key)
            .await?;
        info!(note_id = %created.id, "Created note");

        if let Some(attachment) = new_note.attachment {
            if created.has_image() {
                self.media_store
                    .upload(
                        &attachment.file_name,
                        attachment.bytes,
                        attachment.content_type,
                    )
                    .await?;
                debug!(key = %attachment.file_name, "Uploaded attachment");
            }
        }

        self.fetch_notes().await?;
        Ok(created)
    }

    /// Delete a note by id, then refresh the list.
    ///
    /// The refresh runs even when the delete fails; the delete error, if
    /// any, is surfaced afterwards. The storage object behind the note's
    /// image key is not removed.
    pub async fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        let deleted = self.note_store.delete_note(id).await;
        if deleted.is_ok() {
            info!(note_id = %id, "Deleted note");
        }
        // The delete error takes precedence when the refresh fails too.
        let refreshed = self.fetch_notes().await;
        deleted?;
        refreshed
    }
}
