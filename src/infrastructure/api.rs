// src/infrastructure/api.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, Note};
use crate::infrastructure::session::Session;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A note record as the data service returns it on the wire.
///
/// `name`, `description` and `image` are nullable server-side; the empty
/// image string means "no storage object".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteRecord {
    id: String,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
    owner: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        Note {
            id: record.id,
            name: record.name.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            image_key: record.image.filter(|key| !key.is_empty()),
            image_url: None,
            owner: record.owner.unwrap_or_default(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateNoteRequest<'a> {
    name: &'a str,
    description: &'a str,
    image: &'a str,
}

/// Data-service adapter: JSON over HTTP with bearer-token auth.
///
/// The service scopes list results to the token's principal; this client
/// never filters by owner itself.
pub struct HttpNoteStore {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpNoteStore {
    pub fn new(base_url: &str, session: &Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: session.access_token.clone(),
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

fn request_error(err: reqwest::Error) -> DomainError {
    DomainError::DataService(err.to_string())
}

fn status_error(status: StatusCode) -> DomainError {
    DomainError::DataService(format!("unexpected status {status}"))
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.notes_url())
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(request_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let records: Vec<NoteRecord> = response.json().await.map_err(request_error)?;
        debug!(count = records.len(), "Listed note records");
        Ok(records.into_iter().map(Note::from).collect())
    }

    #[instrument(level = "debug", skip(self))]
    async fn create_note(
        &self,
        name: &str,
        description: &str,
        image_key: &str,
    ) -> Result<Note, DomainError> {
        let response = self
            .client
            .post(self.notes_url())
            .bearer_auth(&self.access_token)
            .json(&CreateNoteRequest {
                name,
                description,
                image: image_key,
            })
            .send()
            .await
            .map_err(request_error)?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let record: NoteRecord = response.json().await.map_err(request_error)?;
        Ok(record.into())
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(request_error)?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(DomainError::NoteNotFound(id.to_string())),
            status if status.is_success() => Ok(()),
            status => Err(status_error(status)),
        }
    }
}
