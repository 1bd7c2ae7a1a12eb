//! Core TED library (session state machine, command parsing, file store, config).

pub mod command;
pub mod config;
pub mod document;
pub mod repl;
pub mod session;
pub mod store;
