use crate::error::{NotzError, Result};
use crate::model::{Collection, Item};
use crate::store::{self, Store};

/// Read a history collection in ascending key order.
pub fn list(store: &Store, history: &Collection) -> Result<Vec<Item>> {
    ensure_history(history)?;
    super::list::run(store, history)
}

/// Drop and recreate a history collection, resetting its sequence counter.
/// Distinct from deleting individual entries: the next checked-off item
/// starts the key space over at 1.
pub fn clear(store: &Store, history: &Collection) -> Result<()> {
    ensure_history(history)?;
    store.write(|txn| {
        txn.delete_table(store::collection_table(history.name()))?;
        txn.open_table(store::collection_table(history.name()))?;
        store::set_sequence(txn, history.name(), 0)?;
        Ok(())
    })
}

fn ensure_history(collection: &Collection) -> Result<()> {
    match collection {
        Collection::History | Collection::TodoHistory => Ok(()),
        other => Err(NotzError::Validation(format!(
            "'{}' is not a history collection",
            other.name()
        ))),
    }
}
