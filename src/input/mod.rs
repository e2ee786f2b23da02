mod reader;

pub use reader::{InputReader, MAX_INPUT_CHARS, trim_line_endings};
