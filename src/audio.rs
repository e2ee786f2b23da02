//! Saving and playing synthesized audio.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::paths;

const PLAYBACK_FILE: &str = "playback.mp3";

/// File name offered for download, e.g. `translation_es.mp3`.
pub fn download_file_name(lang: &str) -> String {
    format!("translation_{lang}.mp3")
}

/// Writes `audio` to `dir` under [`download_file_name`] and returns the path.
pub fn save(dir: &Path, lang: &str, audio: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(download_file_name(lang));
    atomic_write(&path, audio)?;
    Ok(path)
}

/// Splits a player command line like `mpv --no-video` into program and arguments.
///
/// Quoting follows POSIX shell rules, so `"/opt/My Player/play" --quiet` keeps
/// the program path intact.
pub fn parse_player(command: &str) -> Result<(String, Vec<String>)> {
    let Some(mut parts) = shlex::split(command) else {
        bail!("Player command has unbalanced quotes: {command}");
    };
    if parts.is_empty() {
        bail!("Player command is empty");
    }
    let program = parts.remove(0);
    Ok((program, parts))
}

/// Plays `audio` through the configured player command.
///
/// The audio is written to the cache directory and its path is appended to
/// the player's arguments.
pub async fn play(player: &str, audio: &[u8]) -> Result<()> {
    let (program, args) = parse_player(player)?;

    let dir = paths::cache_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;
    let path = dir.join(PLAYBACK_FILE);
    atomic_write(&path, audio)?;

    tracing::debug!(program = %program, path = %path.display(), "starting audio player");

    let status = tokio::process::Command::new(&program)
        .args(&args)
        .arg(&path)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .await
        .with_context(|| format!("Failed to start audio player: {program}"))?;

    if !status.success() {
        bail!("Audio player '{program}' exited with {status}");
    }

    Ok(())
}
