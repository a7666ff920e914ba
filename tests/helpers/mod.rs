use async_trait::async_trait;
use chrono::Utc;
use notekeep::application::{MediaStore, Notebook, NoteStore};
use notekeep::domain::{DomainError, Note};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory stand-in for the managed backend: an owner-scoped note store
/// plus an object store that only resolves URLs for objects actually
/// uploaded. Shared between handles so a test can inspect backend state
/// while a `Notebook` drives it.
#[allow(dead_code)]
pub struct TestBackend {
    notes: Arc<Mutex<Vec<Note>>>,
    objects: Arc<Mutex<HashSet<String>>>,
    fail_uploads: bool,
}

#[allow(dead_code)]
impl TestBackend {
    pub const OWNER: &'static str = "user-1";
    pub const IDENTITY: &'static str = "identity-1";

    pub fn new() -> Self {
        Self {
            notes: Arc::new(Mutex::new(Vec::new())),
            objects: Arc::new(Mutex::new(HashSet::new())),
            fail_uploads: false,
        }
    }

    /// Make every upload fail, for orphaned-record scenarios.
    pub fn with_failing_uploads(mut self) -> Self {
        self.fail_uploads = true;
        self
    }

    /// Seed a backend record directly, bypassing the client.
    pub fn seed_note(&self, name: &str, description: &str, image_key: Option<&str>, owner: &str) {
        let now = Utc::now();
        self.notes.lock().unwrap().push(Note {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_key: image_key.map(str::to_string),
            image_url: None,
            owner: owner.to_string(),
            created_at: now,
            updated_at: now,
        });
    }

    /// Seed a storage object so URL resolution succeeds for `key`.
    pub fn seed_object(&self, key: &str) {
        self.objects
            .lock()
            .unwrap()
            .insert(object_path(Self::IDENTITY, key));
    }

    /// Raw backend records, unscoped.
    pub fn all_records(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    /// A notebook wired against this backend as `OWNER` / `IDENTITY`.
    pub fn notebook(&self) -> Notebook<InMemoryNoteStore, InMemoryMediaStore> {
        Notebook::new(
            InMemoryNoteStore {
                notes: Arc::clone(&self.notes),
                owner: Self::OWNER.to_string(),
            },
            InMemoryMediaStore {
                objects: Arc::clone(&self.objects),
                identity_id: Self::IDENTITY.to_string(),
                fail_uploads: self.fail_uploads,
            },
        )
    }
}

fn object_path(identity_id: &str, key: &str) -> String {
    format!("media/{identity_id}/{key}")
}

pub struct InMemoryNoteStore {
    notes: Arc<Mutex<Vec<Note>>>,
    owner: String,
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        // Server-side authorization: only the caller's records come back
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.owner == self.owner)
            .cloned()
            .collect())
    }

    async fn create_note(
        &self,
        name: &str,
        description: &str,
        image_key: &str,
    ) -> Result<Note, DomainError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_key: (!image_key.is_empty()).then(|| image_key.to_string()),
            image_url: None,
            owner: self.owner.clone(),
            created_at: now,
            updated_at: now,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn delete_note(&self, id: &str) -> Result<(), DomainError> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| !(n.id == id && n.owner == self.owner));
        if notes.len() == before {
            return Err(DomainError::NoteNotFound(id.to_string()));
        }
        Ok(())
    }
}

pub struct InMemoryMediaStore {
    objects: Arc<Mutex<HashSet<String>>>,
    identity_id: String,
    fail_uploads: bool,
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn get_url(&self, key: &str) -> Result<String, DomainError> {
        let path = object_path(&self.identity_id, key);
        if !self.objects.lock().unwrap().contains(&path) {
            return Err(DomainError::Storage(format!("no object at '{path}'")));
        }
        Ok(format!("https://storage.test/{path}?sig=deadbeef"))
    }

    async fn upload(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), DomainError> {
        let path = object_path(&self.identity_id, key);
        if self.fail_uploads {
            return Err(DomainError::Storage(format!("upload of '{path}' failed")));
        }
        self.objects.lock().unwrap().insert(path);
        Ok(())
    }
}

/// Minimal valid PNG header bytes for attachment fixtures.
#[allow(dead_code)]
pub fn png_fixture() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    bytes.extend_from_slice(&[0; 32]);
    bytes
}
