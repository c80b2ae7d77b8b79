use std::str::FromStr;

use gp_core::ArtworkId;
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `page N [SIZE]`
    Page {
        page_number: u32,
        page_size: Option<u32>,
    },
    Next,
    Prev,
    Reload,
    /// `offset ROW`: open the page that contains row `ROW` (0-based).
    Offset(u64),
    /// `select ID...`: check these rows in addition to the ones already checked.
    Select(Vec<ArtworkId>),
    Toggle(ArtworkId),
    /// Check every row on the page.
    All,
    /// Uncheck every row on the page.
    None,
    /// Remove one entry from the selection summary.
    Remove(ArtworkId),
    /// Clear the selection on every page.
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{command}` takes no further arguments")]
    UnexpectedArgument { command: &'static str },

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

fn number<T: FromStr>(token: &str) -> Result<T, CommandParseError> {
    token
        .parse()
        .map_err(|_| CommandParseError::InvalidNumber(token.to_string()))
}

fn artwork_id(token: &str) -> Result<ArtworkId, CommandParseError> {
    token
        .parse()
        .map_err(|_| CommandParseError::InvalidNumber(token.to_string()))
}

fn no_more(command: &'static str, rest: &[&str]) -> Result<(), CommandParseError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CommandParseError::UnexpectedArgument { command })
    }
}

fn single<'a>(
    command: &'static str,
    expected: &'static str,
    rest: &[&'a str],
) -> Result<&'a str, CommandParseError> {
    match rest {
        [one] => Ok(*one),
        [] => Err(CommandParseError::MissingArgument { command, expected }),
        _ => Err(CommandParseError::UnexpectedArgument { command }),
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((head, rest)) = tokens.split_first() else {
            return Err(CommandParseError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "page" | "p" => match rest {
                [] => Err(CommandParseError::MissingArgument {
                    command: "page",
                    expected: "a page number",
                }),
                [page] => Ok(Command::Page {
                    page_number: number(page)?,
                    page_size: None,
                }),
                [page, size] => Ok(Command::Page {
                    page_number: number(page)?,
                    page_size: Some(number(size)?),
                }),
                _ => Err(CommandParseError::UnexpectedArgument { command: "page" }),
            },
            "next" | "n" => no_more("next", rest).map(|_| Command::Next),
            "prev" | "previous" => no_more("prev", rest).map(|_| Command::Prev),
            "reload" => no_more("reload", rest).map(|_| Command::Reload),
            "offset" => {
                let row = single("offset", "a row offset", rest)?;
                Ok(Command::Offset(number(row)?))
            }
            "select" | "s" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        command: "select",
                        expected: "one or more artwork ids",
                    });
                }
                let ids = rest
                    .iter()
                    .map(|token| artwork_id(token))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Command::Select(ids))
            }
            "toggle" | "t" => {
                let id = single("toggle", "an artwork id", rest)?;
                Ok(Command::Toggle(artwork_id(id)?))
            }
            "all" => no_more("all", rest).map(|_| Command::All),
            "none" => no_more("none", rest).map(|_| Command::None),
            "remove" | "rm" => {
                let id = single("remove", "an artwork id", rest)?;
                Ok(Command::Remove(artwork_id(id)?))
            }
            "clear" => no_more("clear", rest).map(|_| Command::Clear),
            "show" | "ls" => no_more("show", rest).map(|_| Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandParseError> {
        line.parse()
    }

    #[test]
    fn test_page_with_and_without_size() {
        assert_eq!(
            parse("page 3"),
            Ok(Command::Page {
                page_number: 3,
                page_size: None
            })
        );
        assert_eq!(
            parse("  PAGE 2   25 "),
            Ok(Command::Page {
                page_number: 2,
                page_size: Some(25)
            })
        );
    }

    #[test]
    fn test_page_argument_errors() {
        assert!(matches!(
            parse("page"),
            Err(CommandParseError::MissingArgument { command: "page", .. })
        ));
        assert_eq!(
            parse("page two"),
            Err(CommandParseError::InvalidNumber("two".into()))
        );
        assert_eq!(
            parse("page -1"),
            Err(CommandParseError::InvalidNumber("-1".into()))
        );
        assert_eq!(
            parse("page 1 2 3"),
            Err(CommandParseError::UnexpectedArgument { command: "page" })
        );
    }

    #[test]
    fn test_select_collects_ids() {
        assert_eq!(
            parse("select 27992 129884"),
            Ok(Command::Select(vec![
                ArtworkId::new(27992),
                ArtworkId::new(129884)
            ]))
        );
        assert!(matches!(
            parse("select"),
            Err(CommandParseError::MissingArgument { .. })
        ));
        assert_eq!(
            parse("select 1 x"),
            Err(CommandParseError::InvalidNumber("x".into()))
        );
    }

    #[test]
    fn test_single_id_commands() {
        assert_eq!(parse("toggle 7"), Ok(Command::Toggle(ArtworkId::new(7))));
        assert_eq!(parse("rm 7"), Ok(Command::Remove(ArtworkId::new(7))));
        assert_eq!(parse("offset 30"), Ok(Command::Offset(30)));
        assert_eq!(
            parse("remove 1 2"),
            Err(CommandParseError::UnexpectedArgument { command: "remove" })
        );
    }

    #[test]
    fn test_bare_commands() {
        assert_eq!(parse("next"), Ok(Command::Next));
        assert_eq!(parse("prev"), Ok(Command::Prev));
        assert_eq!(parse("reload"), Ok(Command::Reload));
        assert_eq!(parse("all"), Ok(Command::All));
        assert_eq!(parse("none"), Ok(Command::None));
        assert_eq!(parse("clear"), Ok(Command::Clear));
        assert_eq!(parse("show"), Ok(Command::Show));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(
            parse("clear everything"),
            Err(CommandParseError::UnexpectedArgument { command: "clear" })
        );
    }

    #[test]
    fn test_empty_and_unknown_input() {
        assert_eq!(parse("   "), Err(CommandParseError::Empty));
        assert_eq!(
            parse("frobnicate"),
            Err(CommandParseError::Unknown("frobnicate".into()))
        );
    }
}
