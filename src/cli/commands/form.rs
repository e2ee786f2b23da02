use anyhow::Result;
use std::path::PathBuf;

use super::build_controller;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::form::{FormSession, FormSettings};

pub struct FormOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub debug: bool,
}

pub async fn run_form(options: FormOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default()?;
    let config = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
            output_dir: options.output_dir,
            debug: options.debug,
        },
        &config_file,
    )?;

    let controller = build_controller(&config)?;
    let mut session = FormSession::new(controller, FormSettings::from_config(&config));
    session.run().await
}
