//! Clear all data use case

use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};
use tracing::info;

/// Remove every entry if `confirmed`. Returns whether anything was cleared.
pub fn clear_data<S: KeyValueStore>(store: &EntryStore<S>, confirmed: bool) -> Result<bool> {
    if !confirmed {
        return Ok(false);
    }

    store.clear_all()?;
    info!("cleared all data");
    Ok(true)
}
