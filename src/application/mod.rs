// src/application/mod.rs
pub mod notebook;
pub mod store;

pub use notebook::Notebook;
pub use store::{Attachment, MediaStore, NewNote, NoteStore};
