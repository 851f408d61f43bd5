//! Presentation - turns resolved entities into page content.
//!
//! Nothing here reads ambient state: the skills table and the current reader
//! are passed into every render call.

mod book;
mod character;
mod html;
mod observations;
mod text;

pub use book::*;
pub use character::*;
pub use html::*;
pub use observations::*;
pub use text::*;
