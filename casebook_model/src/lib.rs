//! # Casebook Model
//!
//! The "case file" crate - contains the entity definitions for every piece of
//! content the mystery ships: book chapters, character dossiers, skills, clues
//! and journals. This crate only describes data; loading from disk and
//! rendering live in `casebook_site`.
//!
//! ## Design Philosophy
//!
//! - **Slug-Keyed**: Every entity is identified by the stem of the file it came from
//! - **Fallbacks in the Model**: Optional fields decode to explicit defaults here, not in render code
//! - **Weak References**: Characters point at skills and readers by string key only

pub mod casebook;
pub mod entities;
pub mod skills;

pub use casebook::*;
pub use entities::*;
pub use skills::*;
