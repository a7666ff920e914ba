// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::env;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{MediaStore, NoteStore};
use crate::domain::{DomainError, Note};

/// Note value under construction for a test, convertible into a [`Note`].
pub struct TestNote(Note);

/// Build a note the way the backend would return it from a list call.
pub fn test_note(id: &str, name: &str) -> TestNote {
    let now = Utc::now();
    TestNote(Note {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        image_key: None,
        image_url: None,
        owner: "user-1".to_string(),
        created_at: now,
        updated_at: now,
    })
}

impl TestNote {
    pub fn with_description(mut self, description: &str) -> Self {
        self.0.description = description.to_string();
        self
    }

    pub fn with_image_key(mut self, key: &str) -> Self {
        self.0.image_key = Some(key.to_string());
        self
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.0.owner = owner.to_string();
        self
    }
}

impl From<TestNote> for Note {
    fn from(value: TestNote) -> Self {
        value.0
    }
}

/// Shared mock data-service store for use cases that depend on [`NoteStore`].
///
/// Keeps notes in insertion order (list order matters to the fetch
/// contract) and provides configurable failure behavior, eliminating the
/// need for each test file to define its own mock.
///
/// # Examples
///
/// ```
/// use notekeep::util::testing::{test_note, MockNoteStore};
///
/// let store = MockNoteStore::builder()
///     .with_note(test_note("a", "First").with_image_key("a.png"))
///     .build();
/// ```
pub struct MockNoteStore {
    notes: Mutex<Vec<Note>>,
    list_calls: Mutex<usize>,
    list_failure_after: Option<usize>,
    create_fails: bool,
    created_count: Mutex<usize>,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        let mut calls = self.list_calls.lock().unwrap();
        *calls += 1;
        if let Some(limit) = self.list_failure_after {
            if *calls > limit {
                return Err(DomainError::DataService("list failed".to_string()));
            }
        }
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn create_note(
        &self,
        name: &str,
        description: &str,
        image_key: &str,
    ) -> Result<Note, DomainError> {
        if self.create_fails {
            return Err(DomainError::DataService("create failed".to_string()));
        }
        let mut count = self.created_count.lock().unwrap();
        *count += 1;
        let now = Utc::now();
        let note = Note {
            id: format!("created-{}", *count),
            name: name.to_string(),
            description: description.to_string(),
            image_key: (!image_key.is_empty()).then(|| image_key.to_string()),
            image_url: None,
            owner: "user-1".to_string(),
            created_at: now,
            updated_at: now,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn delete_note(&self, id: &str) -> Result<(), DomainError> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(DomainError::NoteNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Builder for [`MockNoteStore`].
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    list_failure_after: Option<usize>,
    create_fails: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            list_failure_after: None,
            create_fails: false,
        }
    }

    /// Seed a note that list_notes will return.
    pub fn with_note(mut self, note: impl Into<Note>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Let the first `calls` list calls succeed, then fail.
    pub fn with_list_failure_after(mut self, calls: usize) -> Self {
        self.list_failure_after = Some(calls);
        self
    }

    /// Configure create_note to fail unconditionally.
    pub fn with_create_failure(mut self) -> Self {
        self.create_fails = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        MockNoteStore {
            notes: Mutex::new(self.notes),
            list_calls: Mutex::new(0),
            list_failure_after: self.list_failure_after,
            create_fails: self.create_fails,
            created_count: Mutex::new(0),
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared mock object-storage store implementing [`MediaStore`].
///
/// Signed URLs are configured per key; uploads are recorded so tests can
/// assert which objects were written.
pub struct MockMediaStore {
    urls: HashMap<String, String>,
    url_failures: HashSet<String>,
    upload_failures: HashSet<String>,
    uploads: Arc<Mutex<Vec<String>>>,
}

impl MockMediaStore {
    pub fn builder() -> MockMediaStoreBuilder {
        MockMediaStoreBuilder::new()
    }

    /// Handle on the recorded upload keys, in upload order.
    pub fn uploads(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.uploads)
    }
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn get_url(&self, key: &str) -> Result<String, DomainError> {
        if self.url_failures.contains(key) {
            return Err(DomainError::Storage(format!("getUrl failed for '{key}'")));
        }
        self.urls
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::Storage(format!("no object under '{key}'")))
    }

    async fn upload(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), DomainError> {
        if self.upload_failures.contains(key) {
            return Err(DomainError::Storage(format!("upload failed for '{key}'")));
        }
        self.uploads.lock().unwrap().push(key.to_string());
        Ok(())
    }
}

/// Builder for [`MockMediaStore`].
pub struct MockMediaStoreBuilder {
    urls: HashMap<String, String>,
    url_failures: HashSet<String>,
    upload_failures: HashSet<String>,
}

impl MockMediaStoreBuilder {
    pub fn new() -> Self {
        Self {
            urls: HashMap::new(),
            url_failures: HashSet::new(),
            upload_failures: HashSet::new(),
        }
    }

    /// Configure the signed URL returned for a key.
    pub fn with_url(mut self, key: &str, url: &str) -> Self {
        self.urls.insert(key.to_string(), url.to_string());
        self
    }

    /// Configure get_url to fail for a specific key.
    pub fn with_url_failure(mut self, key: &str) -> Self {
        self.url_failures.insert(key.to_string());
        self
    }

    /// Configure upload to fail for a specific key.
    pub fn with_upload_failure(mut self, key: &str) -> Self {
        self.upload_failures.insert(key.to_string());
        self
    }

    pub fn build(self) -> MockMediaStore {
        MockMediaStore {
            urls: self.urls,
            url_failures: self.url_failures,
            upload_failures: self.upload_failures,
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockMediaStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
