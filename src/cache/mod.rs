mod memo;

pub use memo::{DEFAULT_CAPACITY, SpeechCache};
