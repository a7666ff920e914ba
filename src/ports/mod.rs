// src/ports/mod.rs
pub mod card;

pub use card::CardPresenter;
