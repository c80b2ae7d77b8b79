//! Shell commands
//! 终端命令
//!
//! Parsing turns one input line into a [`Command`]; execution runs it
//! against the page view and tells the loop what to redraw.

pub mod execute;
pub mod parse;

pub use execute::{execute, Reply};
pub use parse::{Command, CommandParseError};
