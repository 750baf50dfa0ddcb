use crate::error::Result;
use crate::model::Collection;
use crate::store::{self, Store};

/// Remove the given keys from `collection`. Missing keys are skipped
/// silently. Returns how many entries were actually removed.
pub fn run(store: &Store, collection: &Collection, keys: &[u64]) -> Result<usize> {
    store.write(|txn| {
        let mut table = txn.open_table(store::collection_table(collection.name()))?;
        let mut removed = 0;
        for &key in keys {
            if table.remove(store::key_to_bytes(key).as_slice())?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    })
}
