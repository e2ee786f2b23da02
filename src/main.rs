use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use polyglot_cli::cli::commands::{form, translate};
use polyglot_cli::cli::{Args, Command};
use polyglot_cli::language::print_languages;
use polyglot_cli::logging;
use polyglot_cli::output::{self, OutputConfig};
use polyglot_cli::session::SessionError;
use polyglot_cli::ui::{Style, handle_prompt_cancellation, print_session_error};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.debug);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(session_error) = e.downcast_ref::<SessionError>() {
                print_session_error(session_error);
            } else {
                eprintln!("{} {e:#}", Style::error("Error:"));
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Form {
            from,
            to,
            output_dir,
        }) => {
            let options = form::FormOptions {
                from,
                to,
                output_dir,
                debug: args.debug,
            };
            handle_prompt_cancellation(|| form::run_form(options)).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                audio: args.audio,
                output_dir: args.output_dir,
                debug: args.debug,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
