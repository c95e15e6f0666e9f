//! Replaces all local data with a JSON export.

use crate::db::backup;
use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file produced by `dtrack export`
    file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let json = fs::read_to_string(&args.file)
        .map_err(|e| msg_error_anyhow!(Message::FailedToReadInput(format!("{}: {}", args.file.display(), e))))?;
    let mut store = Store::new()?;
    let target = store.path().display().to_string();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmImport(target.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::ImportCancelled);
            return Ok(());
        }
    }

    backup::import(&mut store, &json)?;
    msg_success!(Message::ImportCompleted(target));
    Ok(())
}
