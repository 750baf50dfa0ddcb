//! Domain types shared by the command layer.
//!
//! At the storage level a collection is just a named table; up here the
//! different roles get a tagged type so a history sink can never be mistaken
//! for a note space. [`Collection::name`] is the only place the enum is
//! flattened back into the store's string namespace.

/// The space note operations target until the user selects another one.
pub const DEFAULT_SPACE: &str = "notes";

/// Sink for checked-off notes (shared by all spaces).
pub const HISTORY: &str = "history";

/// The single global todo list.
pub const TODO: &str = "todo";

/// Sink for checked-off todos.
pub const TODO_HISTORY: &str = "todo_history";

/// Bookkeeping collection: active-space pointer and sequence counters.
pub const INTERNAL: &str = "internal";

/// Names a user space may never take. `internal` and `history` are reserved
/// outright; the fixed todo collections are included so a space can never
/// alias the global todo list.
const RESERVED: [&str; 4] = [INTERNAL, HISTORY, TODO, TODO_HISTORY];

/// The single reserved-name check consulted by every space operation.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// A storage target for item operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// A user-named note space (`notes` by default).
    Space(String),
    /// Checked-off notes, in check-off order.
    History,
    /// The global todo list.
    Todo,
    /// Checked-off todos, in check-off order.
    TodoHistory,
}

impl Collection {
    pub fn space(name: impl Into<String>) -> Self {
        Collection::Space(name.into())
    }

    /// The collection's name in the store's flat namespace.
    pub fn name(&self) -> &str {
        match self {
            Collection::Space(name) => name,
            Collection::History => HISTORY,
            Collection::Todo => TODO,
            Collection::TodoHistory => TODO_HISTORY,
        }
    }

    /// The history collection checked-off items from this one land in.
    /// History collections have no pair of their own.
    pub fn history_pair(&self) -> Option<Collection> {
        match self {
            Collection::Space(_) => Some(Collection::History),
            Collection::Todo => Some(Collection::TodoHistory),
            Collection::History | Collection::TodoHistory => None,
        }
    }
}

/// A single note or todo entry as returned by list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Sequence-assigned key, unique for the lifetime of the collection.
    pub key: u64,
    pub text: String,
}
