//! # polyglot - Language-Pair Translation CLI
//!
//! `polyglot` translates text between a fixed catalog of languages and reads
//! the result aloud. It offers an interactive form and a one-shot command.
//!
//! ## Features
//!
//! - **Language catalog**: Twelve languages plus source auto detection
//! - **Speech**: MP3 synthesis with an English fallback for unmapped languages
//! - **Session result**: The last translation and its audio, ready to download
//! - **Interactive mode**: A menu-driven form with `polyglot form`
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file into Spanish
//! polyglot --to es ./notes.txt
//!
//! # Translate from stdin and save the speech
//! echo "Good morning" | polyglot --to French --audio
//!
//! # Interactive form
//! polyglot form
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/polyglot/config.toml`:
//!
//! ```toml
//! [polyglot]
//! from = "Auto Detect"
//! to = "Spanish"
//! player = "mpv --no-video"
//!
//! [providers]
//! timeout_secs = 20
//! ```

/// Saving and playing synthesized audio.
pub mod audio;

/// In-memory speech cache.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Interactive translation form.
pub mod form;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Language catalog and code resolution.
pub mod language;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translation session state and handlers.
pub mod session;

/// Speech synthesis client.
pub mod speech;

/// Translation client for the Google translate endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors, error reports).
pub mod ui;
