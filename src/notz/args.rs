use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notz")]
#[command(version)]
#[command(about = "Your notes and todos, in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note to the active space
    #[command(alias = "a")]
    Add {
        /// Note text (prompts when omitted)
        text: Vec<String>,
    },

    /// List notes in the active space
    #[command(alias = "list")]
    Ls,

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        /// Key of the note (as shown by `ls`)
        key: u64,

        /// Replacement text (prompts when omitted)
        text: Vec<String>,
    },

    /// Remove notes without recording them in history
    Rm {
        /// Keys of the notes (prompts when omitted)
        keys: Vec<u64>,
    },

    /// Check off notes, moving them to history
    #[command(alias = "c")]
    Check {
        /// Keys of the notes (prompts when omitted)
        keys: Vec<u64>,
    },

    /// Show checked-off notes
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// The global todo list
    #[command(alias = "t")]
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },

    /// Manage note spaces
    Space {
        #[command(subcommand)]
        command: SpaceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// Wipe the history
    Clean,
}

#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Todo text (prompts when omitted)
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "list")]
    Ls,

    /// Replace the text of a todo
    #[command(alias = "e")]
    Edit {
        /// Key of the todo (as shown by `todo ls`)
        key: u64,

        /// Replacement text (prompts when omitted)
        text: Vec<String>,
    },

    /// Remove todos without recording them in history
    Rm {
        /// Keys of the todos (prompts when omitted)
        keys: Vec<u64>,
    },

    /// Check off todos, moving them to the todo history
    #[command(alias = "c")]
    Check {
        /// Keys of the todos (prompts when omitted)
        keys: Vec<u64>,
    },

    /// Show checked-off todos
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SpaceCommands {
    /// Create a new space
    Add {
        /// Space name (prompts when omitted)
        name: Option<String>,
    },

    /// Rename a space; merges into the destination if it already exists
    Edit {
        /// Space to rename (prompts when omitted)
        src: Option<String>,

        /// New name (prompts when omitted)
        dst: Option<String>,
    },

    /// List spaces
    #[command(alias = "list")]
    Ls,

    /// Select the active space
    Select {
        /// Space name (prompts when omitted)
        name: Option<String>,
    },

    /// Delete a space and everything in it
    Rm {
        /// Space name (prompts when omitted)
        name: Option<String>,
    },

    /// Print the active space
    #[command(name = "self")]
    Current,
}
