//! The editing session state machine.
//!
//! A `Session` owns every open document plus the active-file pointer, and
//! turns parsed commands into state changes and display lines. All output is
//! returned as lines so effects are testable without a terminal; the REPL
//! driver prints them verbatim.

use crate::command::Command;
use crate::document::Document;
use crate::store::FileStore;

const HELP: &str = "\
Text editor - help
==================

Basic operations:
  write <text>     - append text to the current file
  read             - display the current file's full content
  save             - save the current file
  save_all         - save all modified files
  undo             - undo the last write
  list             - list all open files
  switch <n>       - switch to the n-th file in the list
  status           - show current state and statistics
  show <filename>  - display a named open file

Batch processing:
  process_all      - save everything, then stream every file's lines
                     tagged with filename and line number

Leaving:
  exit/quit        - exit (prompts to save unsaved changes)
  help             - show this help";

/// An interactive multi-file editing session.
///
/// Documents keep the order they were opened in; `list` and `process_all`
/// iterate in that order. The active index is always valid once at least one
/// document is open.
pub struct Session<S: FileStore> {
    store: S,
    docs: Vec<Document>,
    active: usize,
}

impl<S: FileStore> Session<S> {
    /// Opens a session over `names`, loading each file from the store.
    ///
    /// Missing files start as empty new documents; unreadable files fall back
    /// to empty with a message. Duplicate names collapse to one document.
    /// Returns the session plus the per-file confirmation lines and the
    /// initial current-file banner.
    pub fn open(store: S, names: &[String], history_limit: usize) -> (Self, Vec<String>) {
        let mut session = Self {
            store,
            docs: Vec::with_capacity(names.len()),
            active: 0,
        };
        let mut out = Vec::new();

        for name in names {
            if session.docs.iter().any(|d| d.name() == name) {
                continue;
            }
            let content = if session.store.exists(name) {
                match session.store.read_all(name) {
                    Ok(content) => {
                        out.push(format!("Loaded {name} ({} lines)", content.lines().count()));
                        content
                    }
                    Err(e) => {
                        out.push(format!("Failed to read {name}: {e:#}; starting empty"));
                        String::new()
                    }
                }
            } else {
                out.push(format!("Creating new file: {name}"));
                String::new()
            };
            session.docs.push(Document::new(name, content, history_limit));
        }

        if !session.docs.is_empty() {
            out.extend(session.banner());
        }
        (session, out)
    }

    /// Name of the active document (for the prompt).
    pub fn active_name(&self) -> &str {
        self.docs[self.active].name()
    }

    /// Names of every document with unsaved changes, in open order.
    pub fn dirty_names(&self) -> Vec<String> {
        self.docs
            .iter()
            .filter(|d| d.is_dirty())
            .map(|d| d.name().to_string())
            .collect()
    }

    /// Applies one command and returns the lines to display.
    ///
    /// `Exit` and `Empty` produce no lines here; the REPL drives the exit
    /// confirmation itself since it needs the input stream.
    pub fn execute(&mut self, cmd: Command) -> Vec<String> {
        match cmd {
            Command::Write(text) => self.write_text(&text),
            Command::Read => self.read_active(),
            Command::Save => self.save_active(),
            Command::SaveAll => self.save_all(),
            Command::Undo => self.undo_active(),
            Command::List => self.list(),
            Command::Switch(n) => self.switch(n),
            Command::Status => self.status(),
            Command::Show(name) => self.show(&name),
            Command::ProcessAll => self.process_all(),
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Unknown(input) => vec![
                format!("Unknown command: {input}"),
                "Type 'help' for available commands".to_string(),
            ],
            Command::Exit | Command::Empty => Vec::new(),
        }
    }

    /// Persists every dirty document; clean documents are skipped.
    ///
    /// Always ends with the blanket confirmation, even when nothing needed
    /// saving (bulk save is idempotent).
    pub fn save_all(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        for doc in &mut self.docs {
            if doc.is_dirty() {
                out.push(persist(&mut self.store, doc));
            }
        }
        out.push("All files saved".to_string());
        out
    }

    fn doc(&self) -> &Document {
        &self.docs[self.active]
    }

    fn banner(&self) -> Vec<String> {
        let doc = self.doc();
        let mut out = vec![format!(
            "Current file: {} ({}/{})",
            doc.name(),
            self.active + 1,
            self.docs.len()
        )];
        if doc.is_dirty() {
            out.push("Note: this file has unsaved changes".to_string());
        }
        out
    }

    fn write_text(&mut self, text: &str) -> Vec<String> {
        let doc = &mut self.docs[self.active];
        doc.append(text);
        let mut out = vec![format!("Appended to {}", doc.name()), "Preview:".to_string()];
        out.extend(preview(doc.content()));
        out
    }

    fn read_active(&self) -> Vec<String> {
        let doc = self.doc();
        let mut out = vec![format!("=== {} ===", doc.name())];
        if doc.content().is_empty() {
            out.push("(empty file)".to_string());
        } else {
            out.extend(doc.content().lines().map(str::to_string));
            out.push("=".repeat(40));
            out.push(format!("Lines: {}", doc.line_count()));
            out.push(format!("Characters: {}", doc.char_count()));
        }
        out
    }

    fn save_active(&mut self) -> Vec<String> {
        let doc = &mut self.docs[self.active];
        vec![persist(&mut self.store, doc)]
    }

    fn undo_active(&mut self) -> Vec<String> {
        let doc = &mut self.docs[self.active];
        if doc.undo() {
            let mut out = vec!["Undid last write".to_string(), "Current content:".to_string()];
            out.extend(preview(doc.content()));
            out
        } else {
            vec!["Nothing to undo".to_string()]
        }
    }

    fn list(&self) -> Vec<String> {
        let mut out = vec!["=== Open files ===".to_string()];
        for (i, doc) in self.docs.iter().enumerate() {
            let marker = if i == self.active { "> " } else { "  " };
            let status = if doc.is_dirty() { "unsaved*" } else { "saved" };
            out.push(format!("{marker}{}. {} ({status})", i + 1, doc.name()));
            out.push(format!(
                "    lines: {}, bytes: {}",
                doc.line_count(),
                doc.byte_count()
            ));
        }
        out
    }

    fn switch(&mut self, n: usize) -> Vec<String> {
        if n >= 1 && n <= self.docs.len() {
            self.active = n - 1;
            self.banner()
        } else {
            vec![format!("Invalid file number: {n}")]
        }
    }

    fn status(&self) -> Vec<String> {
        let doc = self.doc();
        let mut out = vec![
            "=== Status ===".to_string(),
            format!(
                "Current file: {} ({}/{})",
                doc.name(),
                self.active + 1,
                self.docs.len()
            ),
            format!("Saved: {}", if doc.is_dirty() { "no" } else { "yes" }),
            format!("History entries: {}", doc.history_len()),
            format!("Lines: {}", doc.line_count()),
            format!("Characters: {}", doc.char_count()),
            format!("Words: {}", doc.word_count()),
        ];
        let dirty = self.dirty_names();
        if !dirty.is_empty() {
            out.push("Unsaved files:".to_string());
            out.extend(dirty.into_iter().map(|name| format!("  {name}")));
        }
        out
    }

    fn show(&self, name: &str) -> Vec<String> {
        match self.docs.iter().find(|d| d.name() == name) {
            Some(doc) => {
                let mut out = vec![format!("=== {} ===", doc.name())];
                out.extend(doc.content().lines().map(str::to_string));
                out
            }
            None => vec![format!("File not loaded: {name}")],
        }
    }

    fn process_all(&mut self) -> Vec<String> {
        let mut out = self.save_all();
        out.push("Processing:".to_string());
        for doc in &self.docs {
            for (i, line) in doc.content().lines().enumerate() {
                out.push(format!("{}:{}: {line}", doc.name(), i + 1));
            }
        }
        out.push(format!("Processed {} file(s)", self.docs.len()));
        out
    }
}

/// Writes one document to the store; on success the document becomes clean,
/// on failure it stays dirty and the error is reported as a line.
fn persist<S: FileStore>(store: &mut S, doc: &mut Document) -> String {
    match store.write_all(doc.name(), doc.content()) {
        Ok(()) => {
            doc.mark_saved();
            format!("Saved {}", doc.name())
        }
        Err(e) => format!("Failed to save {}: {e:#}", doc.name()),
    }
}

/// Last three lines of a buffer, indented for display.
fn preview(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(3);
    lines[start..].iter().map(|l| format!("  {l}")).collect()
}
