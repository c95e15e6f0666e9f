//! Persistence layer.
//!
//! dtrack keeps its entire state in a single JSON document. There are no
//! partial updates: every change rewrites the whole file through
//! [`store::Store::update`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dtrack::db::store::Store;
//! use dtrack::libs::record::Record;
//!
//! let mut store = Store::new()?;
//! let settings = store.document().settings.clone();
//! store.update(|doc| doc.day_mut("2026-03-02").add_task(&settings, "Run 5k", 0))?;
//! # Ok::<(), dtrack::libs::error::TrackerError>(())
//! ```

/// Document file location, loading with fallback, and the mutation gateway.
pub mod store;

/// JSON export and import of the whole document.
pub mod backup;
