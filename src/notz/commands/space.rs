//! Space operations: whole-collection create/list/select/rename/delete.
//!
//! A space's lifecycle is `nonexistent -> existing -> selected`; only a
//! space that exists and is not currently selected may be renamed or
//! deleted. Every operation here runs its checks and its mutation inside
//! the same write transaction, so the checks cannot go stale.

use crate::error::{NotzError, Result};
use crate::model::{is_reserved, Collection};
use crate::store::{self, Store};
use redb::ReadableTable;

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NotzError::Validation("space name can't be empty".into()));
    }
    if is_reserved(name) {
        return Err(NotzError::Reserved(name.to_string()));
    }
    Ok(())
}

/// Create an empty space.
pub fn create(store: &Store, name: &str) -> Result<()> {
    validate_name(name)?;
    store.write(|txn| {
        if store::collection_exists_rw(txn, name)? {
            return Err(NotzError::AlreadyExists(name.to_string()));
        }
        txn.open_table(store::collection_table(name))?;
        Ok(())
    })
}

/// All space names, sorted, with the bookkeeping and fixed collections
/// filtered out.
pub fn list(store: &Store) -> Result<Vec<String>> {
    store.read(|txn| {
        let mut names: Vec<String> = store::collection_names(txn)?
            .into_iter()
            .filter(|name| !is_reserved(name))
            .collect();
        names.sort();
        Ok(names)
    })
}

/// The currently selected space.
pub fn current(store: &Store) -> Result<String> {
    store.read(store::active_space)
}

/// Point `internal.self` at an existing space.
pub fn select(store: &Store, name: &str) -> Result<()> {
    validate_name(name)?;
    store.write(|txn| {
        if !store::collection_exists_rw(txn, name)? {
            return Err(NotzError::NotFound(format!("space '{name}'")));
        }
        store::set_active_space(txn, name)
    })
}

/// Move every entry of `src` into `dst` and drop `src`, all in one write
/// transaction.
///
/// If `dst` does not exist this is a plain move: keys and the sequence
/// counter carry over verbatim. If `dst` exists the collections are merged:
/// `dst` entries keep their keys; `src` entries keep theirs when free in
/// `dst` and are re-keyed with fresh `dst` sequence numbers (past every key
/// present) when they collide. Either way `dst`'s counter afterwards covers
/// every key in the space.
pub fn rename(store: &Store, src: &str, dst: &str) -> Result<()> {
    validate_name(src)?;
    validate_name(dst)?;
    if src == dst {
        return Err(NotzError::Validation(
            "source and destination are the same space".into(),
        ));
    }

    store.write(|txn| {
        if !store::collection_exists_rw(txn, src)? {
            return Err(NotzError::NotFound(format!("space '{src}'")));
        }
        if store::active_space_rw(txn)? == src {
            return Err(NotzError::ActiveSpace(src.to_string()));
        }

        let src_items = store::read_all_rw(txn, src)?;
        let dst_exists = store::collection_exists_rw(txn, dst)?;

        if !dst_exists {
            {
                let mut dst_table = txn.open_table(store::collection_table(dst))?;
                for (key, value) in &src_items {
                    dst_table.insert(store::key_to_bytes(*key).as_slice(), value.as_slice())?;
                }
            }
            let src_seq = store::current_sequence(txn, src)?;
            store::set_sequence(txn, dst, src_seq)?;
        } else {
            let mut collided = Vec::new();
            let mut max_key = 0;
            {
                let mut dst_table = txn.open_table(store::collection_table(dst))?;
                if let Some((key, _)) = dst_table.last()? {
                    max_key = store::key_from_bytes(key.value());
                }
                for (key, value) in &src_items {
                    let key_bytes = store::key_to_bytes(*key);
                    if dst_table.get(key_bytes.as_slice())?.is_some() {
                        collided.push(value.clone());
                    } else {
                        dst_table.insert(key_bytes.as_slice(), value.as_slice())?;
                        max_key = max_key.max(*key);
                    }
                }
            }

            // the counter must cover every key now present before fresh
            // keys are handed out to the collided entries
            let counter = store::current_sequence(txn, dst)?;
            store::set_sequence(txn, dst, counter.max(max_key))?;

            let mut fresh_keys = Vec::with_capacity(collided.len());
            for _ in &collided {
                fresh_keys.push(store::next_sequence_for(txn, dst)?);
            }
            let mut dst_table = txn.open_table(store::collection_table(dst))?;
            for (value, &key) in collided.iter().zip(&fresh_keys) {
                dst_table.insert(store::key_to_bytes(key).as_slice(), value.as_slice())?;
            }
        }

        txn.delete_table(store::collection_table(src))?;
        store::clear_sequence(txn, src)
    })
}

/// Drop a space outright, items and sequence counter included.
pub fn delete(store: &Store, name: &str) -> Result<()> {
    validate_name(name)?;
    store.write(|txn| {
        if store::active_space_rw(txn)? == name {
            return Err(NotzError::ActiveSpace(name.to_string()));
        }
        if !store::collection_exists_rw(txn, name)? {
            return Err(NotzError::NotFound(format!("space '{name}'")));
        }
        txn.delete_table(store::collection_table(name))?;
        store::clear_sequence(txn, name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete as delete_items, list as list_items};
    use crate::model::Item;

    #[test]
    fn create_then_list() {
        let store = Store::in_memory().unwrap();
        create(&store, "work").unwrap();
        create(&store, "home").unwrap();
        assert_eq!(list(&store).unwrap(), vec!["home", "notes", "work"]);
    }

    #[test]
    fn reserved_names_cannot_be_created() {
        let store = Store::in_memory().unwrap();
        for name in ["internal", "history", "todo", "todo_history"] {
            assert!(matches!(
                create(&store, name),
                Err(NotzError::Reserved(_))
            ));
        }
    }

    #[test]
    fn duplicate_create_fails() {
        let store = Store::in_memory().unwrap();
        create(&store, "work").unwrap();
        assert!(matches!(
            create(&store, "work"),
            Err(NotzError::AlreadyExists(_))
        ));
    }

    #[test]
    fn select_switches_the_active_space() {
        let store = Store::in_memory().unwrap();
        assert_eq!(current(&store).unwrap(), "notes");

        create(&store, "work").unwrap();
        select(&store, "work").unwrap();
        assert_eq!(current(&store).unwrap(), "work");
    }

    #[test]
    fn select_missing_space_leaves_self_unchanged() {
        let store = Store::in_memory().unwrap();
        assert!(matches!(
            select(&store, "work"),
            Err(NotzError::NotFound(_))
        ));
        assert_eq!(current(&store).unwrap(), "notes");
    }

    #[test]
    fn select_reserved_fails() {
        let store = Store::in_memory().unwrap();
        assert!(matches!(
            select(&store, "history"),
            Err(NotzError::Reserved(_))
        ));
    }

    #[test]
    fn deleting_the_selected_space_fails() {
        let store = Store::in_memory().unwrap();
        assert!(matches!(
            delete(&store, "notes"),
            Err(NotzError::ActiveSpace(_))
        ));
    }

    #[test]
    fn deleting_another_space_removes_it() {
        let store = Store::in_memory().unwrap();
        create(&store, "scratch").unwrap();
        delete(&store, "scratch").unwrap();
        assert_eq!(list(&store).unwrap(), vec!["notes"]);
        assert!(matches!(
            delete(&store, "scratch"),
            Err(NotzError::NotFound(_))
        ));
    }

    #[test]
    fn rename_to_fresh_destination_preserves_entries_verbatim() {
        let store = Store::in_memory().unwrap();
        create(&store, "old").unwrap();
        let old = Collection::space("old");
        add::run(&store, &old, "first").unwrap();
        add::run(&store, &old, "second").unwrap();
        add::run(&store, &old, "third").unwrap();
        delete_items::run(&store, &old, &[2]).unwrap();
        let before = list_items::run(&store, &old).unwrap();

        rename(&store, "old", "new").unwrap();

        let after = list_items::run(&store, &Collection::space("new")).unwrap();
        assert_eq!(after, before);
        assert_eq!(list(&store).unwrap(), vec!["new", "notes"]);

        // the sequence counter travels with the move
        let key = add::run(&store, &Collection::space("new"), "fourth").unwrap();
        assert_eq!(key, 4);
    }

    #[test]
    fn rename_merge_keeps_destination_and_rekeys_collisions() {
        let store = Store::in_memory().unwrap();
        create(&store, "src").unwrap();
        create(&store, "dst").unwrap();
        let src = Collection::space("src");
        let dst = Collection::space("dst");
        add::run(&store, &src, "src one").unwrap(); // key 1, collides
        add::run(&store, &src, "src two").unwrap(); // key 2, free in dst
        add::run(&store, &dst, "dst one").unwrap(); // key 1

        rename(&store, "src", "dst").unwrap();

        let merged = list_items::run(&store, &dst).unwrap();
        assert_eq!(
            merged,
            vec![
                Item { key: 1, text: "dst one".into() },
                Item { key: 2, text: "src two".into() },
                Item { key: 3, text: "src one".into() },
            ]
        );
        assert!(!list(&store).unwrap().contains(&"src".to_string()));

        // fresh keys continue past the merged key space
        let key = add::run(&store, &dst, "new").unwrap();
        assert_eq!(key, 4);
    }

    #[test]
    fn rename_selected_space_is_blocked() {
        let store = Store::in_memory().unwrap();
        create(&store, "work").unwrap();
        select(&store, "work").unwrap();
        assert!(matches!(
            rename(&store, "work", "play"),
            Err(NotzError::ActiveSpace(_))
        ));
        assert_eq!(current(&store).unwrap(), "work");
    }

    #[test]
    fn rename_guards_reserved_and_missing_names() {
        let store = Store::in_memory().unwrap();
        create(&store, "work").unwrap();
        assert!(matches!(
            rename(&store, "work", "internal"),
            Err(NotzError::Reserved(_))
        ));
        assert!(matches!(
            rename(&store, "history", "work"),
            Err(NotzError::Reserved(_))
        ));
        assert!(matches!(
            rename(&store, "ghost", "work"),
            Err(NotzError::NotFound(_))
        ));
        assert!(matches!(
            rename(&store, "work", "work"),
            Err(NotzError::Validation(_))
        ));
    }

    #[test]
    fn failed_rename_leaves_source_intact() {
        let store = Store::in_memory().unwrap();
        create(&store, "work").unwrap();
        add::run(&store, &Collection::space("work"), "survives").unwrap();

        assert!(rename(&store, "work", "internal").is_err());
        let items = list_items::run(&store, &Collection::space("work")).unwrap();
        assert_eq!(items.len(), 1);
    }
}
