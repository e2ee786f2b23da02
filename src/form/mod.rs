//! Interactive translation form.
//!
//! A menu-driven session: pick languages, submit text, read the result aloud
//! and download the audio.

/// Menu actions and their availability.
pub mod action;
mod session;
mod ui;

pub use session::{FormSession, FormSettings};
