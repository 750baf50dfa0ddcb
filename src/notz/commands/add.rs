use crate::error::{NotzError, Result};
use crate::model::Collection;
use crate::store::{self, Store};

/// Insert `text` into `collection` under a freshly allocated key and return
/// that key. The key is strictly greater than every key previously assigned
/// in the collection, deleted ones included.
pub fn run(store: &Store, collection: &Collection, text: &str) -> Result<u64> {
    if text.trim().is_empty() {
        return Err(NotzError::Validation("text can't be empty".into()));
    }

    store.write(|txn| {
        let key = store::next_sequence(txn, collection)?;
        let mut table = txn.open_table(store::collection_table(collection.name()))?;
        table.insert(store::key_to_bytes(key).as_slice(), text.as_bytes())?;
        Ok(key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, list};

    fn notes() -> Collection {
        Collection::space("notes")
    }

    #[test]
    fn keys_increase_with_insertion_order() {
        let store = Store::in_memory().unwrap();
        assert_eq!(run(&store, &notes(), "buy milk").unwrap(), 1);
        assert_eq!(run(&store, &notes(), "call mom").unwrap(), 2);

        let items = list::run(&store, &notes()).unwrap();
        let keys: Vec<u64> = items.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(items[0].text, "buy milk");
        assert_eq!(items[1].text, "call mom");
    }

    #[test]
    fn empty_text_is_rejected() {
        let store = Store::in_memory().unwrap();
        assert!(matches!(
            run(&store, &notes(), ""),
            Err(NotzError::Validation(_))
        ));
        assert!(matches!(
            run(&store, &notes(), "   "),
            Err(NotzError::Validation(_))
        ));
        assert!(list::run(&store, &notes()).unwrap().is_empty());
    }

    #[test]
    fn keys_are_never_reused_after_delete() {
        let store = Store::in_memory().unwrap();
        run(&store, &notes(), "one").unwrap();
        run(&store, &notes(), "two").unwrap();
        delete::run(&store, &notes(), &[1, 2]).unwrap();

        let key = run(&store, &notes(), "three").unwrap();
        assert_eq!(key, 3);
    }

    #[test]
    fn todo_list_counts_independently() {
        let store = Store::in_memory().unwrap();
        run(&store, &notes(), "a note").unwrap();
        let todo_key = run(&store, &Collection::Todo, "a todo").unwrap();
        assert_eq!(todo_key, 1);
    }
}
