use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(about = "Translate text between languages and read it aloud")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language name or code (defaults to auto detection)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language name or code (e.g., Spanish, es)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Synthesize speech and save it as an MP3
    #[arg(short = 'a', long)]
    pub audio: bool,

    /// Directory for downloaded audio
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Show debug information
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive translation form
    Form {
        /// Source language name or code
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language name or code
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Directory for downloaded audio
        #[arg(short = 'o', long = "output-dir")]
        output_dir: Option<PathBuf>,
    },
    /// List supported languages
    Languages,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot_flags() {
        let args = Args::parse_from(["polyglot", "-t", "es", "-a", "-o", "out", "notes.txt"]);
        assert_eq!(args.to.as_deref(), Some("es"));
        assert!(args.audio);
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.file.as_deref(), Some("notes.txt"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_form_with_global_debug() {
        let args = Args::parse_from(["polyglot", "form", "--from", "French", "-d"]);
        assert!(args.debug);
        let Some(Command::Form { from, to, .. }) = args.command else {
            panic!("expected form command");
        };
        assert_eq!(from.as_deref(), Some("French"));
        assert!(to.is_none());
    }
}
