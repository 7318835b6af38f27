//! Console view layer for the to-do application.
//!
//! This module is the excluded-collaborator side of the architecture: it
//! reads store state and renders it, and it maps user input to actions for
//! the front-end to dispatch. Nothing here mutates state directly.

use crate::types::{AppState, TodoItem, VisibilityFilter};
use std::fmt::Write as _;
use thiserror::Error;

/// Items the current filter lets through, in display order.
///
/// Filtering is a derived view: it never changes the stored list.
#[must_use]
pub fn visible_todos(todos: &[TodoItem], filter: VisibilityFilter) -> Vec<&TodoItem> {
    todos
        .iter()
        .filter(|t| match filter {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !t.completed,
            VisibilityFilter::ShowCompleted => t.completed,
        })
        .collect()
}

/// Render the application state as console text.
///
/// One line per visible item, completed ones marked with `x`, followed by a
/// footer with the selected filter and the item counts.
#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    for todo in visible_todos(&state.todos, state.visibility_filter) {
        let marker = if todo.completed { "x" } else { " " };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "[{marker}] {}. {}", todo.id, todo.text);
    }

    let _ = writeln!(
        out,
        "show: {} ({} active, {} completed)",
        state.visibility_filter,
        state.active_count(),
        state.completed_count()
    );

    out
}

/// A parsed user command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new item with the given text
    Add {
        /// Trimmed, non-empty item text
        text: String,
    },
    /// Toggle the item with the given id
    Toggle {
        /// Numeric item id
        id: u64,
    },
    /// Select a visibility filter
    Filter {
        /// The filter to select
        filter: VisibilityFilter,
    },
    /// Print the current list
    List,
    /// Print usage help
    Help,
    /// Exit the application
    Quit,
}

/// Errors from parsing user input into a [`Command`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// `add` without any text
    #[error("to-do text cannot be empty")]
    EmptyText,

    /// `toggle` with a missing or non-numeric id
    #[error("invalid to-do id `{0}`")]
    InvalidId(String),

    /// `filter` with an unrecognized mode
    #[error("unknown filter `{0}` (expected all, active, or completed)")]
    UnknownFilter(String),

    /// Anything else
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (keyword, rest) = match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (input, ""),
        };

        match keyword {
            "add" => {
                if rest.is_empty() {
                    Err(CommandError::EmptyText)
                } else {
                    Ok(Self::Add {
                        text: rest.to_string(),
                    })
                }
            },
            "toggle" => rest
                .parse::<u64>()
                .map(|id| Self::Toggle { id })
                .map_err(|_| CommandError::InvalidId(rest.to_string())),
            "filter" => match rest {
                "all" => Ok(Self::Filter {
                    filter: VisibilityFilter::ShowAll,
                }),
                "active" => Ok(Self::Filter {
                    filter: VisibilityFilter::ShowActive,
                }),
                "completed" => Ok(Self::Filter {
                    filter: VisibilityFilter::ShowCompleted,
                }),
                other => Err(CommandError::UnknownFilter(other.to_string())),
            },
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
