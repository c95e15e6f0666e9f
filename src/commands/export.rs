//! Writes the whole tracker document as pretty-printed JSON.

use crate::db::backup;
use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = Store::new()?;
    match args.output {
        Some(path) => {
            backup::export_to_file(&store, &path)?;
            msg_success!(Message::ExportWritten(path.display().to_string()));
        }
        // Plain println so the output stays valid JSON in debug mode too.
        None => println!("{}", backup::export(&store)?),
    }
    Ok(())
}
