//! Interactive command loop
//!
//! Reads whitespace-separated commands from stdin, dispatches them against
//! the command table, and prints results. Errors from commands are
//! recoverable: they are printed and the loop continues. Commands run one at
//! a time; only the cache reaper runs concurrently with this loop.

mod commands;

use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{ApiClient, ApiError};
use crate::pagination::{Cursor, PaginationError};
use crate::pokedex::Pokedex;

/// Prompt shown before every command
const PROMPT: &str = "Pokedex > ";

/// Errors reported to the user by the command layer
#[derive(Debug, Error)]
pub enum ReplError {
    /// Input didn't match any command in the table
    #[error("command not found")]
    UnknownCommand,

    /// A command was invoked with the wrong arguments
    #[error("{0}")]
    Usage(&'static str),

    /// Navigation had nowhere to go
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// Fetching or decoding catalog data failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `inspect` was asked about a creature not in the Pokedex
    #[error("you haven't caught {0} yet")]
    NotCaught(String),
}

/// Whether the loop should keep reading commands
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// One entry in the command table, used by `help` and dispatch
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command the tool understands
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Displays a help message",
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
    },
    Command {
        name: "clear",
        description: "Clear the screen",
    },
    Command {
        name: "map",
        description: "Show locations in the pokemon world",
    },
    Command {
        name: "next",
        description: "Go to the next page when available",
    },
    Command {
        name: "previous",
        description: "Go to the previous page when available",
    },
    Command {
        name: "explore",
        description: "Explore the pokemon world area by area",
    },
    Command {
        name: "catch",
        description: "Catch a pokemon",
    },
    Command {
        name: "inspect",
        description: "Inspect a pokemon in your pokedex",
    },
    Command {
        name: "pokedex",
        description: "Show pokemon in your pokedex",
    },
];

/// Everything a command needs: the cache-backed client, pagination state for
/// the location listing, and the caught collection.
pub struct App {
    pub client: ApiClient,
    pub cursor: Cursor,
    pub dex: Pokedex,
}

impl App {
    /// Creates the REPL state around a catalog client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cursor: Cursor::new(),
            dex: Pokedex::new(),
        }
    }
}

/// Runs one command line against the app.
pub async fn dispatch(app: &mut App, command: &str, args: &[&str]) -> Result<Outcome, ReplError> {
    match command {
        "help" => commands::help(),
        "exit" => return commands::exit(),
        "clear" => commands::clear(),
        "map" => commands::map(app).await,
        "next" => commands::next(app).await,
        "previous" => commands::previous(app).await,
        "explore" => commands::explore(app, args).await,
        "catch" => commands::catch(app, args).await,
        "inspect" => commands::inspect(app, args),
        "pokedex" => commands::pokedex(app, args),
        _ => return Err(ReplError::UnknownCommand),
    }?;
    Ok(Outcome::Continue)
}

/// Reads commands from stdin until `exit` or end of input.
pub async fn run(app: &mut App) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match dispatch(app, command, &args).await {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue) => {}
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;

    fn test_app() -> App {
        App::new(ApiClient::new(Cache::new()))
    }

    #[tokio::test]
    async fn test_unknown_command_is_recoverable() {
        let mut app = test_app();
        let result = dispatch(&mut app, "teleport", &[]).await;
        assert!(matches!(result, Err(ReplError::UnknownCommand)));
    }

    #[tokio::test]
    async fn test_help_and_clear_continue_the_loop() {
        let mut app = test_app();
        assert_eq!(dispatch(&mut app, "help", &[]).await.unwrap(), Outcome::Continue);
        assert_eq!(dispatch(&mut app, "clear", &[]).await.unwrap(), Outcome::Continue);
    }

    #[tokio::test]
    async fn test_exit_quits_the_loop() {
        let mut app = test_app();
        assert_eq!(dispatch(&mut app, "exit", &[]).await.unwrap(), Outcome::Quit);
    }

    #[tokio::test]
    async fn test_next_before_any_page_reports_no_next_page() {
        let mut app = test_app();
        let result = dispatch(&mut app, "next", &[]).await;
        assert!(matches!(
            result,
            Err(ReplError::Pagination(PaginationError::NoNextPage))
        ));
    }

    #[tokio::test]
    async fn test_previous_before_any_page_reports_no_previous_page() {
        let mut app = test_app();
        let result = dispatch(&mut app, "previous", &[]).await;
        assert!(matches!(
            result,
            Err(ReplError::Pagination(PaginationError::NoPreviousPage))
        ));
    }

    #[tokio::test]
    async fn test_explore_requires_exactly_one_area() {
        let mut app = test_app();
        assert!(matches!(
            dispatch(&mut app, "explore", &[]).await,
            Err(ReplError::Usage(_))
        ));
        assert!(matches!(
            dispatch(&mut app, "explore", &["a", "b"]).await,
            Err(ReplError::Usage(_))
        ));
    }

    #[tokio::test]
    async fn test_inspect_uncaught_pokemon_errors() {
        let mut app = test_app();
        let result = dispatch(&mut app, "inspect", &["mewtwo"]).await;
        match result {
            Err(ReplError::NotCaught(name)) => assert_eq!(name, "mewtwo"),
            other => panic!("expected NotCaught, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_pokedex_rejects_arguments() {
        let mut app = test_app();
        assert!(matches!(
            dispatch(&mut app, "pokedex", &["extra"]).await,
            Err(ReplError::Usage(_))
        ));
    }

    #[test]
    fn test_command_table_covers_dispatch() {
        let names: Vec<&str> = COMMANDS.iter().map(|c| c.name).collect();
        for name in [
            "help", "exit", "clear", "map", "next", "previous", "explore", "catch", "inspect",
            "pokedex",
        ] {
            assert!(names.contains(&name), "missing command: {}", name);
        }
    }
}
