//! # Storage Layer
//!
//! A thin wrapper around a single-file [redb] database. Every collection
//! (note space, history sink, the todo list) is a redb table of 8-byte
//! big-endian keys to raw UTF-8 text bytes; big-endian keys sort
//! lexicographically in numeric order, so forward iteration walks items
//! oldest-first.
//!
//! ## Layout
//!
//! ```text
//! notz.db
//! ├── notes          # default space: BE u64 -> text
//! ├── history        # checked-off notes, keyed in check-off order
//! ├── todo           # the global todo list
//! ├── todo_history   # checked-off todos
//! ├── internal       # str -> bytes bookkeeping rows:
//! │     self             -> name of the active space
//! │     seq/<collection> -> BE u64 sequence counter for <collection>
//! └── <space>...     # user-created spaces
//! ```
//!
//! redb has no per-table sequence, so each collection's counter lives as a
//! `seq/` row in `internal`. Counters are read and bumped inside the owning
//! write transaction: an aborted transaction rolls the counter back with
//! everything else, and a committed one guarantees the key is never handed
//! out again, even after the item is deleted.
//!
//! ## Transactions
//!
//! [`Store::read`] runs against a consistent snapshot; [`Store::write`] runs
//! inside one read-write transaction that commits on `Ok` and aborts on
//! `Err`, leaving the file untouched. redb serializes writers, allows
//! concurrent snapshot readers, and holds a file lock for the lifetime of
//! the [`Store`], so a second process cannot open the same database. The
//! store is an explicit dependency threaded through the command layer:
//! opened once at process start, flushed when dropped.

use crate::error::Result;
use crate::model::{Collection, DEFAULT_SPACE, HISTORY, INTERNAL, TODO, TODO_HISTORY};
use redb::backends::InMemoryBackend;
use redb::{
    Database, ReadTransaction, ReadableTable, TableDefinition, TableError, TableHandle,
    WriteTransaction,
};
use std::path::Path;

/// Bookkeeping table: `self` pointer and `seq/` counter rows.
const INTERNAL_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new(INTERNAL);

const SELF_KEY: &str = "self";
const SEQ_PREFIX: &str = "seq/";

/// Table definition for a named data collection.
pub fn collection_table(name: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]> {
    TableDefinition::new(name)
}

/// 8-byte big-endian encoding of an item key.
pub fn key_to_bytes(key: u64) -> [u8; 8] {
    key.to_be_bytes()
}

pub fn key_from_bytes(bytes: &[u8]) -> u64 {
    bytes.try_into().map(u64::from_be_bytes).unwrap_or(0)
}

/// Handle to the embedded database.
pub struct Store {
    db: Database,
}

impl Store {
    /// Open (creating if needed) the database file and ensure the fixed
    /// collections and the active-space pointer exist.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::create(path)?;
        let store = Store { db };
        store.ensure_layout()?;
        Ok(store)
    }

    /// A store backed by process memory, with the same layout as [`open`].
    /// Used by tests.
    ///
    /// [`open`]: Store::open
    pub fn in_memory() -> Result<Self> {
        let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
        let store = Store { db };
        store.ensure_layout()?;
        Ok(store)
    }

    fn ensure_layout(&self) -> Result<()> {
        self.write(|txn| {
            for name in [DEFAULT_SPACE, HISTORY, TODO, TODO_HISTORY] {
                txn.open_table(collection_table(name))?;
            }
            let mut internal = txn.open_table(INTERNAL_TABLE)?;
            if internal.get(SELF_KEY)?.is_none() {
                internal.insert(SELF_KEY, DEFAULT_SPACE.as_bytes())?;
            }
            Ok(())
        })
    }

    /// Run `f` against a consistent read snapshot.
    pub fn read<T>(&self, f: impl FnOnce(&ReadTransaction) -> Result<T>) -> Result<T> {
        let txn = self.db.begin_read()?;
        f(&txn)
    }

    /// Run `f` inside a single read-write transaction. Commits on `Ok`,
    /// aborts on `Err` with no side effects.
    pub fn write<T>(&self, f: impl FnOnce(&WriteTransaction) -> Result<T>) -> Result<T> {
        let txn = self.db.begin_write()?;
        match f(&txn) {
            Ok(value) => {
                txn.commit()?;
                Ok(value)
            }
            Err(err) => {
                txn.abort()?;
                Err(err)
            }
        }
    }
}

/// Allocate the next key for `collection`, persisted within `txn`.
/// Strictly increasing; never reused once the transaction commits.
pub fn next_sequence(txn: &WriteTransaction, collection: &Collection) -> Result<u64> {
    next_sequence_for(txn, collection.name())
}

pub(crate) fn next_sequence_for(txn: &WriteTransaction, name: &str) -> Result<u64> {
    let next = current_sequence(txn, name)? + 1;
    set_sequence(txn, name, next)?;
    Ok(next)
}

/// The highest key ever allocated in `name` (0 if none yet).
pub(crate) fn current_sequence(txn: &WriteTransaction, name: &str) -> Result<u64> {
    let internal = txn.open_table(INTERNAL_TABLE)?;
    let seq_key = format!("{SEQ_PREFIX}{name}");
    let current = match internal.get(seq_key.as_str())? {
        Some(guard) => key_from_bytes(guard.value()),
        None => 0,
    };
    Ok(current)
}

pub(crate) fn set_sequence(txn: &WriteTransaction, name: &str, value: u64) -> Result<()> {
    let mut internal = txn.open_table(INTERNAL_TABLE)?;
    let seq_key = format!("{SEQ_PREFIX}{name}");
    internal.insert(seq_key.as_str(), key_to_bytes(value).as_slice())?;
    Ok(())
}

/// Remove the counter row for a dropped collection.
pub(crate) fn clear_sequence(txn: &WriteTransaction, name: &str) -> Result<()> {
    let mut internal = txn.open_table(INTERNAL_TABLE)?;
    let seq_key = format!("{SEQ_PREFIX}{name}");
    internal.remove(seq_key.as_str())?;
    Ok(())
}

fn self_value<T: ReadableTable<&'static str, &'static [u8]>>(internal: &T) -> Result<String> {
    match internal.get(SELF_KEY)? {
        Some(guard) => Ok(String::from_utf8_lossy(guard.value()).into_owned()),
        None => Ok(DEFAULT_SPACE.to_string()),
    }
}

/// Read `internal.self`, defaulting to the `notes` space if unset.
pub fn active_space(txn: &ReadTransaction) -> Result<String> {
    let internal = txn.open_table(INTERNAL_TABLE)?;
    self_value(&internal)
}

/// [`active_space`] from within a write transaction.
pub fn active_space_rw(txn: &WriteTransaction) -> Result<String> {
    let internal = txn.open_table(INTERNAL_TABLE)?;
    self_value(&internal)
}

pub fn set_active_space(txn: &WriteTransaction, name: &str) -> Result<()> {
    let mut internal = txn.open_table(INTERNAL_TABLE)?;
    internal.insert(SELF_KEY, name.as_bytes())?;
    Ok(())
}

/// All collection names present in the store, `internal` included.
pub fn collection_names(txn: &ReadTransaction) -> Result<Vec<String>> {
    Ok(txn
        .list_tables()?
        .map(|handle| handle.name().to_string())
        .collect())
}

/// [`collection_names`] from within a write transaction.
pub fn collection_names_rw(txn: &WriteTransaction) -> Result<Vec<String>> {
    Ok(txn
        .list_tables()?
        .map(|handle| handle.name().to_string())
        .collect())
}

pub fn collection_exists_rw(txn: &WriteTransaction, name: &str) -> Result<bool> {
    Ok(txn.list_tables()?.any(|handle| handle.name() == name))
}

/// Read every entry of `name` in ascending key order. Returns an empty list
/// for a collection that does not exist.
pub fn read_all(txn: &ReadTransaction, name: &str) -> Result<Vec<(u64, Vec<u8>)>> {
    let table = match txn.open_table(collection_table(name)) {
        Ok(table) => table,
        Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    collect_entries(&table)
}

/// [`read_all`] from within a write transaction. The table is created if it
/// does not exist, matching redb's open-on-write semantics.
pub fn read_all_rw(txn: &WriteTransaction, name: &str) -> Result<Vec<(u64, Vec<u8>)>> {
    let table = txn.open_table(collection_table(name))?;
    collect_entries(&table)
}

fn collect_entries<T: ReadableTable<&'static [u8], &'static [u8]>>(
    table: &T,
) -> Result<Vec<(u64, Vec<u8>)>> {
    let mut entries = Vec::new();
    for entry in table.iter()? {
        let (key, value) = entry?;
        entries.push((key_from_bytes(key.value()), value.value().to_vec()));
    }
    Ok(entries)
}
