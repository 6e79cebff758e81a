//! Shell command - interactive quote session.
//!
//! Keeps one store open for the whole session, so `again` can re-show the
//! last quote without drawing a new one. The session memory is dropped
//! when the shell exits; quotes and the filter are saved as usual.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use quotebook::config::Config;
use quotebook::quotes::QuoteStore;

use super::filter;
use crate::cli::format::render_quote;

const HELP: &str = "\
Commands:
  show                      Show a random quote from the current filter
  again                     Show the last quote again
  add <text> | <category>   Add a quote
  filter [category]         Print or change the filter ('all' for every category)
  categories                List filter choices
  export [file]             Write the book as JSON
  import <file>             Append quotes from a JSON file
  help                      Show this help
  quit                      Leave the shell";

/// Whether the shell should keep reading input.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session over one quote store.
pub struct Shell {
    store: QuoteStore,
    runtime: tokio::runtime::Runtime,
    export_file: PathBuf,
}

impl Shell {
    pub fn new(store: QuoteStore, export_file: PathBuf) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        Ok(Self {
            store,
            runtime,
            export_file,
        })
    }

    /// Runs one input line, writing any output to `out`.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let line = line.trim_start();
        let (command, raw_rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));
        let rest = raw_rest.trim();

        match command {
            "" => {}
            "show" | "new" => self.show(out)?,
            "again" => match self.store.last_viewed()? {
                Some(quote) => writeln!(out, "{}", render_quote(Some(&quote)))?,
                None => self.show(out)?,
            },
            "add" => {
                let Some((text, category)) = split_add(raw_rest) else {
                    bail!("Usage: add <text> | <category>");
                };
                let count = self.store.add_quote(text, category)?.len();
                writeln!(out, "{}", format!("Quote added successfully! ({count} total)").green())?;
                self.show(out)?;
            }
            "filter" => {
                if rest.is_empty() {
                    writeln!(out, "{}", self.store.get_filter()?)?;
                } else {
                    filter::select(&mut self.store, rest)?;
                    writeln!(out, "{}", format!("Filter set to '{rest}'").green())?;
                    self.show(out)?;
                }
            }
            "categories" => {
                let selected = self.store.get_filter()?;
                for option in self.store.filter_options() {
                    let marker = if option == selected { "●" } else { "○" };
                    writeln!(out, "{marker} {option}")?;
                }
            }
            "export" => {
                let path = if rest.is_empty() {
                    self.export_file.clone()
                } else {
                    PathBuf::from(rest)
                };
                self.store.export_file(&path)?;
                writeln!(
                    out,
                    "Exported {} quotes to: {}",
                    self.store.len(),
                    path.display()
                )?;
            }
            "import" => {
                if rest.is_empty() {
                    bail!("Usage: import <file>");
                }
                let path = PathBuf::from(rest);
                let count = self.runtime.block_on(self.store.import_file(&path))?;
                writeln!(
                    out,
                    "{}",
                    format!("Quotes imported successfully! ({count} added)").green()
                )?;
            }
            "help" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => bail!("Unknown command '{other}'. Type 'help' for a list of commands."),
        }

        Ok(Flow::Continue)
    }

    fn show(&mut self, out: &mut impl Write) -> Result<()> {
        let quote = self.store.show_quote()?;
        writeln!(out, "{}", render_quote(quote.as_ref()))?;
        Ok(())
    }
}

/// Splits `add` input at the last `|`, dropping one space on each side of
/// the separator. Other whitespace is part of the quote.
fn split_add(input: &str) -> Option<(&str, &str)> {
    let (text, category) = input.rsplit_once('|')?;
    Some((
        text.strip_suffix(' ').unwrap_or(text),
        category.strip_prefix(' ').unwrap_or(category),
    ))
}

/// Executes the shell command.
pub fn run() -> Result<()> {
    let config = Config::load_or_default();
    let mut shell = Shell::new(
        QuoteStore::open_default()?,
        PathBuf::from(config.export_file),
    )?;
    let mut stdout = io::stdout();

    println!("{}", "Quotebook shell. Type 'help' for commands.".dimmed());
    shell.execute("show", &mut stdout)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".cyan());
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match shell.execute(&line?, &mut stdout) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook::quotes::ScriptedRandom;
    use quotebook::storage::{Database, MemoryStore, Quote};
    use tempfile::tempdir;

    fn create_test_shell() -> (Shell, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp directory");
        let db = Database::open(&dir.path().join("test.db")).expect("Failed to open test database");
        let store = QuoteStore::load(db, MemoryStore::new())
            .unwrap()
            .with_random(ScriptedRandom::new([0, 1, 2]));
        let shell = Shell::new(store, dir.path().join("quotes.json")).unwrap();
        (shell, dir)
    }

    fn run_line(shell: &mut Shell, line: &str) -> Result<String> {
        let mut out = Vec::new();
        shell.execute(line, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_show_then_again_repeats_quote() {
        let (mut shell, _dir) = create_test_shell();

        let shown = run_line(&mut shell, "show").unwrap();
        assert!(shown.contains("The only way to do great work"));

        let again = run_line(&mut shell, "again").unwrap();
        assert!(again.contains("The only way to do great work"));
    }

    #[test]
    fn test_add_splits_text_and_category() {
        let (mut shell, _dir) = create_test_shell();

        let output = run_line(&mut shell, "add Less is more. | Design").unwrap();
        assert!(output.contains("Quote added successfully! (4 total)"));

        let categories = run_line(&mut shell, "categories").unwrap();
        assert!(categories.contains("Design"));
    }

    #[test]
    fn test_add_keeps_whitespace_around_fields() {
        let (mut shell, _dir) = create_test_shell();

        run_line(&mut shell, "add  padded text  |  Spaced ").unwrap();
        assert_eq!(
            shell.store.quotes().last(),
            Some(&Quote::new(" padded text ", " Spaced "))
        );

        run_line(&mut shell, "add \t | \t").unwrap();
        assert_eq!(shell.store.quotes().last(), Some(&Quote::new("\t", "\t")));
        assert_eq!(shell.store.len(), 5);
    }

    #[test]
    fn test_split_add() {
        assert_eq!(split_add("Less is more. | Design"), Some(("Less is more.", "Design")));
        assert_eq!(split_add("a|b|c"), Some(("a|b", "c")));
        assert_eq!(split_add("text |"), Some(("text", "")));
        assert_eq!(split_add("no separator"), None);
    }

    #[test]
    fn test_add_requires_separator_and_fields() {
        let (mut shell, _dir) = create_test_shell();
        assert!(run_line(&mut shell, "add no separator").is_err());
        assert!(run_line(&mut shell, "add some text |").is_err());
    }

    #[test]
    fn test_filter_changes_selection() {
        let (mut shell, _dir) = create_test_shell();

        let output = run_line(&mut shell, "filter Life").unwrap();
        assert!(output.contains("Filter set to 'Life'"));
        assert!(output.contains("Life is what happens"));

        assert_eq!(run_line(&mut shell, "filter").unwrap().trim(), "Life");
        assert!(run_line(&mut shell, "filter Unknown").is_err());
    }

    #[test]
    fn test_categories_marks_selected() {
        let (mut shell, _dir) = create_test_shell();
        let output = run_line(&mut shell, "categories").unwrap();
        assert!(output.contains("● all"));
        assert!(output.contains("○ Life"));
    }

    #[test]
    fn test_export_and_import_files() {
        let (mut shell, dir) = create_test_shell();

        run_line(&mut shell, "export").unwrap();
        let exported = dir.path().join("quotes.json");
        assert!(exported.exists());

        let output = run_line(&mut shell, &format!("import {}", exported.display())).unwrap();
        assert!(output.contains("(3 added)"));
    }

    #[test]
    fn test_import_missing_file_is_error() {
        let (mut shell, dir) = create_test_shell();
        let missing = dir.path().join("missing.json");
        assert!(run_line(&mut shell, &format!("import {}", missing.display())).is_err());
        assert!(run_line(&mut shell, "import").is_err());
    }

    #[test]
    fn test_quit_and_unknown() {
        let (mut shell, _dir) = create_test_shell();
        let mut out = Vec::new();
        assert_eq!(shell.execute("", &mut out).unwrap(), Flow::Continue);
        assert_eq!(shell.execute("quit", &mut out).unwrap(), Flow::Quit);
        assert!(shell.execute("dance", &mut out).is_err());
    }
}
