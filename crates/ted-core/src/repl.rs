//! The interactive command loop.
//!
//! Drives a `Session` from a line source (stdin in the CLI, scripted lines in
//! tests) and writes every display line to a generic writer. The loop blocks
//! on each input line; end-of-input behaves like `exit`.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};

use crate::command::Command;
use crate::config::Config;
use crate::session::Session;
use crate::store::FileStore;

/// Command-source collaborator: one line of input per call, `None` at
/// end-of-input.
pub trait LineSource {
    fn next_line(&mut self) -> Option<String>;
}

/// Line source over any buffered reader.
pub struct ReaderSource<R: BufRead> {
    inner: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }
}

/// Runs a full editing session over `files`.
///
/// With no files given, one filename is read interactively. Returns once the
/// user exits (or input ends), after the unsaved-changes check.
pub fn run<S, I, W>(
    store: S,
    files: &[String],
    config: &Config,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    S: FileStore,
    I: LineSource,
    W: Write,
{
    let mut names = files.to_vec();
    if names.is_empty() {
        writeln!(out, "No file specified, create a new one:")?;
        write!(out, "Filename: ")?;
        out.flush()?;
        let Some(name) = input.next_line() else {
            bail!("no filename provided");
        };
        names.push(name);
    }

    let (mut session, lines) = Session::open(store, &names, config.history_limit);
    for line in &lines {
        writeln!(out, "{line}")?;
    }

    loop {
        write!(out, "\n[{}]> ", session.active_name())?;
        out.flush()?;

        let Some(line) = input.next_line() else {
            // End of input acts as an implicit exit.
            writeln!(out)?;
            break;
        };
        let cmd = Command::parse(&line);
        if cmd == Command::Exit {
            break;
        }
        for line in session.execute(cmd) {
            writeln!(out, "{line}")?;
        }
    }

    confirm_unsaved(&mut session, config, input, out)?;
    writeln!(out, "Goodbye!")?;
    Ok(())
}

/// Exit-time unsaved-changes check: lists dirty files and offers one y/n
/// save-all prompt. Declining (or end-of-input) discards nothing but writes
/// nothing either.
fn confirm_unsaved<S, I, W>(
    session: &mut Session<S>,
    config: &Config,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    S: FileStore,
    I: LineSource,
    W: Write,
{
    let dirty = session.dirty_names();
    if dirty.is_empty() || !config.confirm_save_on_exit {
        return Ok(());
    }

    writeln!(out, "Warning: unsaved changes in:")?;
    for name in &dirty {
        writeln!(out, "  {name}")?;
    }
    write!(out, "Save before exiting? (y/n): ")?;
    out.flush()?;

    if let Some(answer) = input.next_line()
        && answer.trim().eq_ignore_ascii_case("y")
    {
        for line in session.save_all() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
