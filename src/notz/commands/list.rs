use crate::error::Result;
use crate::model::{Collection, Item};
use crate::store::{self, Store};

/// All entries of `collection` in ascending key order, materialized under a
/// single read snapshot. A collection that is empty or does not exist yields
/// an empty list.
pub fn run(store: &Store, collection: &Collection) -> Result<Vec<Item>> {
    store.read(|txn| {
        let entries = store::read_all(txn, collection.name())?;
        Ok(entries
            .into_iter()
            .map(|(key, value)| Item {
                key,
                text: String::from_utf8_lossy(&value).into_owned(),
            })
            .collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn notes() -> Collection {
        Collection::space("notes")
    }

    #[test]
    fn empty_collection_yields_empty_list() {
        let store = Store::in_memory().unwrap();
        assert!(run(&store, &notes()).unwrap().is_empty());
    }

    #[test]
    fn missing_collection_yields_empty_list() {
        let store = Store::in_memory().unwrap();
        assert!(run(&store, &Collection::space("nowhere")).unwrap().is_empty());
    }

    #[test]
    fn ascending_key_order_across_many_items() {
        let store = Store::in_memory().unwrap();
        for i in 0..20 {
            add::run(&store, &notes(), &format!("item {i}")).unwrap();
        }
        let items = run(&store, &notes()).unwrap();
        assert_eq!(items.len(), 20);
        for window in items.windows(2) {
            assert!(window[0].key < window[1].key);
        }
        assert_eq!(items[0].text, "item 0");
        assert_eq!(items[19].text, "item 19");
    }

    #[test]
    fn listing_twice_returns_the_same_items() {
        let store = Store::in_memory().unwrap();
        add::run(&store, &notes(), "stable").unwrap();
        assert_eq!(run(&store, &notes()).unwrap(), run(&store, &notes()).unwrap());
    }
}
