use super::store::Store;
use crate::libs::document::Document;
use crate::libs::error::TrackerResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// The stored document as pretty-printed JSON.
pub fn export(store: &Store) -> TrackerResult<String> {
    Ok(Store::load(store.path()).to_json_pretty()?)
}

pub fn export_to_file(store: &Store, output: &Path) -> TrackerResult<()> {
    fs::write(output, export(store)?)?;
    info!(path = %output.display(), "document exported");
    Ok(())
}

/// Replaces the stored document with `json` merged over the defaults, then
/// reloads the store. Malformed input is rejected and nothing is written.
pub fn import(store: &mut Store, json: &str) -> TrackerResult<()> {
    let doc = Document::from_json(json)?;
    store.replace(doc)?;
    store.reload();
    info!(path = %store.path().display(), "document imported");
    Ok(())
}

pub fn import_from_file(store: &mut Store, input: &Path) -> TrackerResult<()> {
    let json = fs::read_to_string(input)?;
    import(store, &json)
}
