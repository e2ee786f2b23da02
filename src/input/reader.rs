use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// Largest text accepted for one translation, in characters.
pub const MAX_INPUT_CHARS: usize = 5000;

// A UTF-8 character is at most 4 bytes, plus a final CRLF
const MAX_INPUT_BYTES: usize = MAX_INPUT_CHARS * 4 + 2;

pub struct InputReader;

impl InputReader {
    /// Reads the input with trailing line endings removed.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        let mut text = file_path.map_or_else(Self::read_stdin, Self::read_file)?;
        text.truncate(trim_line_endings(&text).len());
        check_length(&text)?;
        Ok(text)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        if metadata.len() as usize > MAX_INPUT_BYTES {
            bail!(too_long_message(None));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_BYTES {
                bail!(too_long_message(None));
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

/// Strips the line endings editors and files usually leave at the end.
pub fn trim_line_endings(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

fn check_length(text: &str) -> Result<()> {
    let chars = text.chars().count();
    if chars > MAX_INPUT_CHARS {
        bail!(too_long_message(Some(chars)));
    }
    Ok(())
}

fn too_long_message(chars: Option<usize>) -> String {
    let actual = chars.map_or_else(String::new, |c| format!(" ({c} characters)"));
    format!(
        "Input{actual} exceeds maximum allowed length ({MAX_INPUT_CHARS} characters).\n\n\
         Consider splitting the text into smaller parts."
    )
}
