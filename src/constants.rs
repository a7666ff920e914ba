// src/constants.rs
//
// Application-wide constants shared across layers.

/// Top-level prefix for all storage object paths.
///
/// Uploaded images live at `media/{identity_id}/{key}`; the identity segment
/// is supplied by the storage binding from the active session, never by the
/// caller.
///
/// Used in: `infrastructure/storage.rs`
pub const MEDIA_PATH_PREFIX: &str = "media";

/// File extensions accepted for note image attachments.
///
/// Mirrors the creation form's accepted content types (PNG and JPEG only).
/// Validation happens before any remote call so a bad attachment never
/// creates an orphaned record.
///
/// Used in: `util/image.rs`
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Name of the endpoint configuration file under the platform config dir.
///
/// Used in: `infrastructure/config.rs`, `lib.rs`
pub const CONFIG_FILE_NAME: &str = "notekeep.toml";

/// Name of the persisted session file under the platform data dir.
///
/// Used in: `infrastructure/session.rs`
pub const SESSION_FILE_NAME: &str = "session.json";

/// Directory (under the platform config/data dirs) owned by this client.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/session.rs`
pub const APP_DIR_NAME: &str = "notekeep";
