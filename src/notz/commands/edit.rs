use crate::error::{NotzError, Result};
use crate::model::Collection;
use crate::store::{self, Store};
use redb::ReadableTable;

/// Overwrite the payload under `key`, preserving the key. Fails with
/// `NotFound` if the key is absent; never creates it.
pub fn run(store: &Store, collection: &Collection, key: u64, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(NotzError::Validation("text can't be empty".into()));
    }

    store.write(|txn| {
        let mut table = txn.open_table(store::collection_table(collection.name()))?;
        let key_bytes = store::key_to_bytes(key);
        if table.get(key_bytes.as_slice())?.is_none() {
            return Err(NotzError::NotFound(format!(
                "key {key} in '{}'",
                collection.name()
            )));
        }
        table.insert(key_bytes.as_slice(), text.as_bytes())?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};

    fn notes() -> Collection {
        Collection::space("notes")
    }

    #[test]
    fn overwrites_payload_keeping_key() {
        let store = Store::in_memory().unwrap();
        let key = add::run(&store, &notes(), "tpyo").unwrap();
        run(&store, &notes(), key, "typo").unwrap();

        let items = list::run(&store, &notes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key, key);
        assert_eq!(items[0].text, "typo");
    }

    #[test]
    fn missing_key_fails_and_creates_nothing() {
        let store = Store::in_memory().unwrap();
        let result = run(&store, &notes(), 7, "ghost");
        assert!(matches!(result, Err(NotzError::NotFound(_))));
        assert!(list::run(&store, &notes()).unwrap().is_empty());
    }

    #[test]
    fn empty_text_is_rejected() {
        let store = Store::in_memory().unwrap();
        let key = add::run(&store, &notes(), "keep me").unwrap();
        assert!(matches!(
            run(&store, &notes(), key, "  "),
            Err(NotzError::Validation(_))
        ));
        assert_eq!(list::run(&store, &notes()).unwrap()[0].text, "keep me");
    }
}
