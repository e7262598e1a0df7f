//! Grade Lens: load a CSV of student records, validate its `Grade` column
//! and summarise it.
//!
//! The [`data`] module holds the whole analysis pipeline and has no UI
//! dependencies; the desktop viewer and the headless binaries build on it.

pub mod config;
pub mod data;
