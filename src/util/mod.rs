// src/util/mod.rs
pub mod image;
pub mod testing;
