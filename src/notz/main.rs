use clap::Parser;
use colored::Colorize;
use console::Term;
use notz::api::NotzApi;
use notz::error::{NotzError, Result};
use notz::init;
use notz::model::Item;
use unicode_width::UnicodeWidthChar;

mod args;
use args::{Cli, Commands, HistoryAction, SpaceCommands, TodoCommands};

fn main() {
    // Failures here are setup failures (cannot open the store); ordinary
    // command errors are reported inside run() and are not fatal.
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = NotzApi::new(init::open_store()?);

    let outcome = match cli.command {
        Some(Commands::Add { text }) => handle_add(&api, text),
        Some(Commands::Ls) => handle_ls(&api),
        Some(Commands::Edit { key, text }) => handle_edit(&api, key, text),
        Some(Commands::Rm { keys }) => handle_rm(&api, keys),
        Some(Commands::Check { keys }) => handle_check(&api, keys),
        Some(Commands::History { action }) => match action {
            Some(HistoryAction::Clean) => handle_history_clean(&api),
            None => handle_history(&api),
        },
        Some(Commands::Todo { command }) => match command {
            TodoCommands::Add { text } => handle_todo_add(&api, text),
            TodoCommands::Ls => handle_todo_ls(&api),
            TodoCommands::Edit { key, text } => handle_todo_edit(&api, key, text),
            TodoCommands::Rm { keys } => handle_todo_rm(&api, keys),
            TodoCommands::Check { keys } => handle_todo_check(&api, keys),
            TodoCommands::History { action } => match action {
                Some(HistoryAction::Clean) => handle_todo_history_clean(&api),
                None => handle_todo_history(&api),
            },
        },
        Some(Commands::Space { command }) => match command {
            SpaceCommands::Add { name } => handle_space_add(&api, name),
            SpaceCommands::Edit { src, dst } => handle_space_edit(&api, src, dst),
            SpaceCommands::Ls => handle_space_ls(&api),
            SpaceCommands::Select { name } => handle_space_select(&api, name),
            SpaceCommands::Rm { name } => handle_space_rm(&api, name),
            SpaceCommands::Current => handle_space_current(&api),
        },
        None => handle_ls(&api),
    };

    // A failed command is reported, not fatal: each invocation is a fresh
    // process and the store is untouched by the failed transaction.
    if let Err(e) = outcome {
        eprintln!("{}", e.to_string().red());
    }
    Ok(())
}

// -- notes --

fn handle_add(api: &NotzApi, text: Vec<String>) -> Result<()> {
    let text = text_or_prompt(text, "Add a new note")?;
    let key = api.add_note(&text)?;
    println!("{}", format!("Added {}.", key).green());
    Ok(())
}

fn handle_ls(api: &NotzApi) -> Result<()> {
    let items = api.list_notes()?;
    print_items(&items, "No notes yet.");
    Ok(())
}

fn handle_edit(api: &NotzApi, key: u64, text: Vec<String>) -> Result<()> {
    let text = if text.is_empty() {
        let items = api.list_notes()?;
        show_current(&items, key)?;
        prompt("New text")?
    } else {
        text.join(" ")
    };
    api.edit_note(key, &text)?;
    println!("{}", format!("Updated {}.", key).green());
    Ok(())
}

fn handle_rm(api: &NotzApi, keys: Vec<u64>) -> Result<()> {
    let keys = keys_or_prompt(keys, || api.list_notes(), "Keys to remove")?;
    let removed = api.delete_notes(&keys)?;
    println!("{}", format!("Removed {}.", count(removed, "note")).green());
    Ok(())
}

fn handle_check(api: &NotzApi, keys: Vec<u64>) -> Result<()> {
    let keys = keys_or_prompt(keys, || api.list_notes(), "Keys to check")?;
    let checked = api.check_notes(&keys)?;
    print_checked(&checked);
    Ok(())
}

fn handle_history(api: &NotzApi) -> Result<()> {
    let items = api.note_history()?;
    print_items(&items, "History is empty.");
    Ok(())
}

fn handle_history_clean(api: &NotzApi) -> Result<()> {
    api.clear_note_history()?;
    println!("{}", "History cleaned.".green());
    Ok(())
}

// -- todos --

fn handle_todo_add(api: &NotzApi, text: Vec<String>) -> Result<()> {
    let text = text_or_prompt(text, "Add a new todo")?;
    let key = api.add_todo(&text)?;
    println!("{}", format!("Added {}.", key).green());
    Ok(())
}

fn handle_todo_ls(api: &NotzApi) -> Result<()> {
    let items = api.list_todos()?;
    print_items(&items, "No todos yet.");
    Ok(())
}

fn handle_todo_edit(api: &NotzApi, key: u64, text: Vec<String>) -> Result<()> {
    let text = if text.is_empty() {
        let items = api.list_todos()?;
        show_current(&items, key)?;
        prompt("New text")?
    } else {
        text.join(" ")
    };
    api.edit_todo(key, &text)?;
    println!("{}", format!("Updated {}.", key).green());
    Ok(())
}

fn handle_todo_rm(api: &NotzApi, keys: Vec<u64>) -> Result<()> {
    let keys = keys_or_prompt(keys, || api.list_todos(), "Keys to remove")?;
    let removed = api.delete_todos(&keys)?;
    println!("{}", format!("Removed {}.", count(removed, "todo")).green());
    Ok(())
}

fn handle_todo_check(api: &NotzApi, keys: Vec<u64>) -> Result<()> {
    let keys = keys_or_prompt(keys, || api.list_todos(), "Keys to check")?;
    let checked = api.check_todos(&keys)?;
    print_checked(&checked);
    Ok(())
}

fn handle_todo_history(api: &NotzApi) -> Result<()> {
    let items = api.todo_history()?;
    print_items(&items, "Todo history is empty.");
    Ok(())
}

fn handle_todo_history_clean(api: &NotzApi) -> Result<()> {
    api.clear_todo_history()?;
    println!("{}", "Todo history cleaned.".green());
    Ok(())
}

// -- spaces --

fn handle_space_add(api: &NotzApi, name: Option<String>) -> Result<()> {
    let name = name_or_prompt(name, "New space")?;
    api.create_space(&name)?;
    println!("{}", format!("Created space '{}'.", name).green());
    Ok(())
}

fn handle_space_edit(api: &NotzApi, src: Option<String>, dst: Option<String>) -> Result<()> {
    let src = name_or_prompt(src, "Old space")?;
    let dst = name_or_prompt(dst, "New space")?;
    api.rename_space(&src, &dst)?;
    println!("{}", format!("Renamed '{}' to '{}'.", src, dst).green());
    Ok(())
}

fn handle_space_ls(api: &NotzApi) -> Result<()> {
    let names = api.list_spaces()?;
    let active = api.current_space()?;
    for name in &names {
        if *name == active {
            println!("{} {}", "*".yellow(), name.bold());
        } else {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn handle_space_select(api: &NotzApi, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => {
            handle_space_ls(api)?;
            prompt("Space")?
        }
    };
    api.select_space(&name)?;
    println!("{}", format!("Now in '{}'.", name).green());
    Ok(())
}

fn handle_space_rm(api: &NotzApi, name: Option<String>) -> Result<()> {
    let name = name_or_prompt(name, "Space to delete")?;
    api.delete_space(&name)?;
    println!("{}", format!("Deleted space '{}'.", name).green());
    Ok(())
}

fn handle_space_current(api: &NotzApi) -> Result<()> {
    println!("{}", api.current_space()?);
    Ok(())
}

// -- prompt helpers --

fn prompt(label: &str) -> Result<String> {
    let term = Term::stderr();
    term.write_str(&format!("{}: ", label))?;
    let line = term.read_line()?;
    let line = line.trim().to_string();
    if line.is_empty() {
        return Err(NotzError::Validation("input can't be empty".into()));
    }
    Ok(line)
}

fn text_or_prompt(args: Vec<String>, label: &str) -> Result<String> {
    if args.is_empty() {
        prompt(label)
    } else {
        Ok(args.join(" "))
    }
}

fn name_or_prompt(arg: Option<String>, label: &str) -> Result<String> {
    match arg {
        Some(name) => Ok(name),
        None => prompt(label),
    }
}

/// Prompt for keys when none were given, after showing what is there.
fn keys_or_prompt(
    keys: Vec<u64>,
    list: impl FnOnce() -> Result<Vec<Item>>,
    label: &str,
) -> Result<Vec<u64>> {
    if !keys.is_empty() {
        return Ok(keys);
    }
    let items = list()?;
    print_items(&items, "Nothing here.");
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let line = prompt(label)?;
    line.split_whitespace()
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| NotzError::Validation(format!("invalid key: {}", s)))
        })
        .collect()
}

fn show_current(items: &[Item], key: u64) -> Result<()> {
    let current = items
        .iter()
        .find(|item| item.key == key)
        .ok_or_else(|| NotzError::NotFound(format!("key {}", key)))?;
    println!("{}", format!("{}. {}", current.key, current.text).dimmed());
    Ok(())
}

// -- output --

const LINE_WIDTH: usize = 100;

fn print_items(items: &[Item], empty_message: &str) {
    if items.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }
    for item in items {
        let idx = format!("{}.", item.key);
        let flat: String = item
            .text
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let available = LINE_WIDTH.saturating_sub(idx.len() + 1);
        println!("{} {}", idx.yellow(), truncate_to_width(&flat, available));
    }
}

fn print_checked(checked: &[Item]) {
    if checked.is_empty() {
        println!("{}", "Nothing to check.".dimmed());
        return;
    }
    for item in checked {
        println!("{} {}", "✓".green(), item.text);
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
