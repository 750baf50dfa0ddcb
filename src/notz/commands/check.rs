use crate::error::{NotzError, Result};
use crate::model::{Collection, Item};
use crate::store::{self, Store};

/// Check off items: every present key is removed from `collection` and its
/// payload appended to the paired history collection under a freshly
/// allocated history key, so history order reflects check-off order.
/// Missing keys are skipped.
///
/// The whole batch runs in one write transaction: an item is never gone from
/// the active collection without having landed in history, and vice versa.
/// Returns the checked-off items with their original keys.
pub fn run(store: &Store, collection: &Collection, keys: &[u64]) -> Result<Vec<Item>> {
    let history = collection.history_pair().ok_or_else(|| {
        NotzError::Validation(format!(
            "'{}' is a history collection and can't be checked",
            collection.name()
        ))
    })?;

    store.write(|txn| {
        let mut checked = Vec::new();
        {
            let mut table = txn.open_table(store::collection_table(collection.name()))?;
            for &key in keys {
                if let Some(value) = table.remove(store::key_to_bytes(key).as_slice())? {
                    checked.push(Item {
                        key,
                        text: String::from_utf8_lossy(value.value()).into_owned(),
                    });
                }
            }
        }

        // allocate history keys before reopening the table: next_sequence
        // needs the internal table to itself
        let mut history_keys = Vec::with_capacity(checked.len());
        for _ in &checked {
            history_keys.push(store::next_sequence(txn, &history)?);
        }

        let mut table = txn.open_table(store::collection_table(history.name()))?;
        for (item, &hkey) in checked.iter().zip(&history_keys) {
            table.insert(store::key_to_bytes(hkey).as_slice(), item.text.as_bytes())?;
        }

        Ok(checked)
    })
}
