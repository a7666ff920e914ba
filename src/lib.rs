// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{Attachment, NewNote, Notebook};
use infrastructure::{Config, HttpMediaStore, HttpNoteStore, Session, SessionStore};
use ports::CardPresenter;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeep with arguments");

    let config = Config::load_or_default(args.config.as_deref())?;
    let session_store = SessionStore::open_default()?;

    match args.command {
        Command::Login {
            username,
            token,
            identity,
        } => {
            let session = Session {
                access_token: token,
                identity_id: identity,
                username,
            };
            session_store.save(&session)?;
            println!("Signed in as {}", session.username);
        }

        Command::Logout => {
            session_store.clear()?;
            println!("Signed out");
        }

        Command::List { json } => {
            let session = session_store.require()?;
            let mut notebook = build_notebook(&config, &session);

            info!("Fetching notes");
            notebook.fetch_notes().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(notebook.notes())?);
            } else {
                print!("{}", CardPresenter::new().render(notebook.notes()));
            }
        }

        Command::Create {
            name,
            description,
            image,
        } => {
            let session = session_store.require()?;
            let mut notebook = build_notebook(&config, &session);

            let attachment = match image {
                Some(path) => Some(load_attachment(&path).await?),
                None => None,
            };

            info!(%name, "Creating note");
            let created = notebook
                .create_note(NewNote {
                    name,
                    description,
                    attachment,
                })
                .await?;
            debug!(?created, "Created note");

            print!("{}", CardPresenter::new().render(notebook.notes()));
        }

        Command::Delete { note_id } => {
            let session = session_store.require()?;
            let mut notebook = build_notebook(&config, &session);

            info!(%note_id, "Deleting note");
            notebook.delete_note(&note_id).await?;

            print!("{}", CardPresenter::new().render(notebook.notes()));
        }
    }

    Ok(())
}

fn build_notebook(config: &Config, session: &Session) -> Notebook<HttpNoteStore, HttpMediaStore> {
    let note_store = HttpNoteStore::new(&config.backend.api_url, session);
    let media_store = HttpMediaStore::new(&config.backend.storage_url, session);
    Notebook::new(note_store, media_store)
}

/// Read an image file and validate it as PNG/JPEG before any remote call.
async fn load_attachment(path: &Path) -> Result<Attachment> {
    let file_name = path
        .file_name()
        .with_context(|| format!("No file name in path: {}", path.display()))?
        .to_string_lossy()
        .into_owned();

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;

    let content_type = util::image::validate_attachment(&file_name, &bytes)?;

    Ok(Attachment {
        file_name,
        bytes,
        content_type,
    })
}
