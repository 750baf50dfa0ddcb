//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. Note methods resolve the active space before dispatching; todo
//! methods target the fixed todo list. No business logic lives here and
//! nothing here touches the terminal.

use crate::commands;
use crate::error::Result;
use crate::model::{Collection, Item};
use crate::store::Store;

/// The main API facade. Owns the store handle for the life of the process.
pub struct NotzApi {
    store: Store,
}

impl NotzApi {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The collection note operations currently target.
    fn active_collection(&self) -> Result<Collection> {
        Ok(Collection::Space(commands::space::current(&self.store)?))
    }

    // -- notes (active space) --

    pub fn add_note(&self, text: &str) -> Result<u64> {
        commands::add::run(&self.store, &self.active_collection()?, text)
    }

    pub fn list_notes(&self) -> Result<Vec<Item>> {
        commands::list::run(&self.store, &self.active_collection()?)
    }

    pub fn edit_note(&self, key: u64, text: &str) -> Result<()> {
        commands::edit::run(&self.store, &self.active_collection()?, key, text)
    }

    pub fn delete_notes(&self, keys: &[u64]) -> Result<usize> {
        commands::delete::run(&self.store, &self.active_collection()?, keys)
    }

    pub fn check_notes(&self, keys: &[u64]) -> Result<Vec<Item>> {
        commands::check::run(&self.store, &self.active_collection()?, keys)
    }

    pub fn note_history(&self) -> Result<Vec<Item>> {
        commands::history::list(&self.store, &Collection::History)
    }

    pub fn clear_note_history(&self) -> Result<()> {
        commands::history::clear(&self.store, &Collection::History)
    }

    // -- the global todo list --

    pub fn add_todo(&self, text: &str) -> Result<u64> {
        commands::add::run(&self.store, &Collection::Todo, text)
    }

    pub fn list_todos(&self) -> Result<Vec<Item>> {
        commands::list::run(&self.store, &Collection::Todo)
    }

    pub fn edit_todo(&self, key: u64, text: &str) -> Result<()> {
        commands::edit::run(&self.store, &Collection::Todo, key, text)
    }

    pub fn delete_todos(&self, keys: &[u64]) -> Result<usize> {
        commands::delete::run(&self.store, &Collection::Todo, keys)
    }

    pub fn check_todos(&self, keys: &[u64]) -> Result<Vec<Item>> {
        commands::check::run(&self.store, &Collection::Todo, keys)
    }

    pub fn todo_history(&self) -> Result<Vec<Item>> {
        commands::history::list(&self.store, &Collection::TodoHistory)
    }

    pub fn clear_todo_history(&self) -> Result<()> {
        commands::history::clear(&self.store, &Collection::TodoHistory)
    }

    // -- spaces --

    pub fn create_space(&self, name: &str) -> Result<()> {
        commands::space::create(&self.store, name)
    }

    pub fn list_spaces(&self) -> Result<Vec<String>> {
        commands::space::list(&self.store)
    }

    pub fn select_space(&self, name: &str) -> Result<()> {
        commands::space::select(&self.store, name)
    }

    pub fn rename_space(&self, src: &str, dst: &str) -> Result<()> {
        commands::space::rename(&self.store, src, dst)
    }

    pub fn delete_space(&self, name: &str) -> Result<()> {
        commands::space::delete(&self.store, name)
    }

    pub fn current_space(&self) -> Result<String> {
        commands::space::current(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> NotzApi {
        NotzApi::new(Store::in_memory().unwrap())
    }

    #[test]
    fn notes_follow_the_selected_space() {
        let api = api();
        api.add_note("in notes").unwrap();

        api.create_space("work").unwrap();
        api.select_space("work").unwrap();
        api.add_note("in work").unwrap();

        let work_items = api.list_notes().unwrap();
        assert_eq!(work_items.len(), 1);
        assert_eq!(work_items[0].text, "in work");

        api.select_space("notes").unwrap();
        assert_eq!(api.list_notes().unwrap()[0].text, "in notes");
    }

    #[test]
    fn todos_are_independent_of_spaces() {
        let api = api();
        api.create_space("work").unwrap();
        api.select_space("work").unwrap();

        api.add_todo("global").unwrap();
        assert_eq!(api.list_todos().unwrap().len(), 1);
        assert!(api.list_notes().unwrap().is_empty());
    }

    #[test]
    fn note_and_todo_histories_are_separate() {
        let api = api();
        api.add_note("n").unwrap();
        api.add_todo("t").unwrap();
        api.check_notes(&[1]).unwrap();
        api.check_todos(&[1]).unwrap();

        assert_eq!(api.note_history().unwrap()[0].text, "n");
        assert_eq!(api.todo_history().unwrap()[0].text, "t");

        api.clear_todo_history().unwrap();
        assert_eq!(api.note_history().unwrap().len(), 1);
        assert!(api.todo_history().unwrap().is_empty());
    }
}
