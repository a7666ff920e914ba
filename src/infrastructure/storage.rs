// src/infrastructure/storage.rs
use crate::application::MediaStore;
use crate::constants::MEDIA_PATH_PREFIX;
use crate::domain::DomainError;
use crate::infrastructure::session::Session;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct SignedUrl {
    url: String,
}

/// Object-storage adapter.
///
/// Object paths are `media/{identity_id}/{key}`; the identity segment comes
/// from the session captured at construction, so callers only ever pass the
/// object key.
pub struct HttpMediaStore {
    client: reqwest::Client,
    base_url: String,
    identity_id: String,
    access_token: String,
}

impl HttpMediaStore {
    pub fn new(base_url: &str, session: &Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            identity_id: session.identity_id.clone(),
            access_token: session.access_token.clone(),
        }
    }

    fn object_path(&self, key: &str) -> String {
        format!("{}/{}/{}", MEDIA_PATH_PREFIX, self.identity_id, key)
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/objects/{}", self.base_url, self.object_path(key))
    }
}

fn storage_error(err: reqwest::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    #[instrument(level = "debug", skip(self))]
    async fn get_url(&self, key: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(format!("{}/url", self.object_url(key)))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(storage_error)?;
        if !response.status().is_success() {
            return Err(DomainError::Storage(format!(
                "signed URL request for '{}' returned {}",
                self.object_path(key),
                response.status()
            )));
        }

        let signed: SignedUrl = response.json().await.map_err(storage_error)?;
        debug!(key, "Resolved signed URL");
        Ok(signed.url)
    }

    #[instrument(level = "debug", skip(self, bytes), fields(len = bytes.len()))]
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), DomainError> {
        let response = self
            .client
            .put(self.object_url(key))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(storage_error)?;
        if !response.status().is_success() {
            return Err(DomainError::Storage(format!(
                "upload of '{}' returned {}",
                self.object_path(key),
                response.status()
            )));
        }

        debug!(key, "Upload complete");
        Ok(())
    }
}
