//! Editor command parsing.
//!
//! One input line maps to one `Command`. Parsing is separate from effect
//! application so each command's effect can be tested without a live input
//! stream. Command words are case-insensitive; arguments keep their case.

/// A parsed editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `write <text>` — append a line to the active buffer.
    Write(String),
    /// `read` — display the active buffer with counts.
    Read,
    /// `save` — persist the active document.
    Save,
    /// `save_all` — persist every dirty document.
    SaveAll,
    /// `undo` — revert the active buffer one write.
    Undo,
    /// `list` — show all open documents.
    List,
    /// `switch <n>` — make the n-th document active (1-based).
    Switch(usize),
    /// `status` — show active-document details and unsaved files.
    Status,
    /// `show <filename>` — display a named open document.
    Show(String),
    /// `process_all` — save everything, then stream all files line by line.
    ProcessAll,
    /// `help` — usage text.
    Help,
    /// `exit` / `quit` — leave the session after the unsaved-changes check.
    Exit,
    /// Blank input; no effect.
    Empty,
    /// Anything that matched no command shape.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (input, ""),
        };

        match (word.to_ascii_lowercase().as_str(), rest) {
            ("write", text) if !text.is_empty() => Command::Write(text.to_string()),
            ("read", "") => Command::Read,
            ("save", "") => Command::Save,
            ("save_all", "") => Command::SaveAll,
            ("undo", "") => Command::Undo,
            ("list", "") => Command::List,
            // Digits only; signs, words, or a missing argument fall through.
            ("switch", n) if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => {
                match n.parse::<usize>() {
                    Ok(n) => Command::Switch(n),
                    Err(_) => Command::Unknown(input.to_string()),
                }
            }
            ("status", "") => Command::Status,
            ("show", name) if !name.is_empty() => Command::Show(name.to_string()),
            ("process_all", "") => Command::ProcessAll,
            ("help", "") => Command::Help,
            ("exit" | "quit", "") => Command::Exit,
            _ => Command::Unknown(input.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_keeps_argument_case_and_spaces() {
        assert_eq!(
            Command::parse("write Hello World"),
            Command::Write("Hello World".to_string())
        );
        assert_eq!(
            Command::parse("WRITE  spaced"),
            Command::Write("spaced".to_string())
        );
    }

    #[test]
    fn test_parse_bare_commands_case_insensitive() {
        assert_eq!(Command::parse("read"), Command::Read);
        assert_eq!(Command::parse("SAVE"), Command::Save);
        assert_eq!(Command::parse("save_all"), Command::SaveAll);
        assert_eq!(Command::parse("Undo"), Command::Undo);
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("status"), Command::Status);
        assert_eq!(Command::parse("process_all"), Command::ProcessAll);
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("QUIT"), Command::Exit);
    }

    #[test]
    fn test_parse_switch_requires_digits() {
        assert_eq!(Command::parse("switch 2"), Command::Switch(2));
        assert!(matches!(Command::parse("switch two"), Command::Unknown(_)));
        assert!(matches!(Command::parse("switch -1"), Command::Unknown(_)));
        assert!(matches!(Command::parse("switch"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert!(matches!(Command::parse("frobnicate"), Command::Unknown(_)));
        // Trailing arguments make a bare command unknown, not a variant.
        assert!(matches!(Command::parse("read this"), Command::Unknown(_)));
        assert!(matches!(Command::parse("write"), Command::Unknown(_)));
    }
}
