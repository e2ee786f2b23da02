//! Session controller and the result state it maintains.

mod controller;
mod error;
mod state;

pub use controller::{
    DEFAULT_TIMEOUT, FormInput, SessionController, SpeechOutcome, TranslateOutcome,
};
pub use error::SessionError;
pub use state::SessionResult;
