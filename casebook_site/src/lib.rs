//! # Casebook Site
//!
//! Turns the `data/` content tree into the static mystery site. This crate
//! reads the JSON content files with the types of `casebook_model`, links them
//! into a [`Casebook`](casebook_model::Casebook), and renders pages from it.
//!
//! ## Core Components
//!
//! - **loader**: Entity loading, the skills table, chapter sequencing, clue/journal aggregation
//! - **present**: Character sheets, the book reader, reader-specific observations, HTML markup
//! - **site**: Writes the output tree, one page per slug
//! - **config**: Site configuration read from TOML
//!
//! Loading is a single synchronous pass. Missing optional directories yield
//! empty collections; any other I/O or JSON failure aborts the whole load.

pub mod config;
pub mod error;
pub mod loader;
pub mod present;
pub mod site;

pub use config::*;
pub use error::*;
pub use loader::*;
pub use present::*;
pub use site::*;
