//! Domain types for the to-do application.
//!
//! The state tree is deliberately small: an ordered list of items plus the
//! currently selected visibility filter. Everything here is plain owned
//! data; the store holds the only live copy.

use reflux_macros::Action;
use serde::{Deserialize, Serialize};

/// Unique identifier for a to-do item
///
/// Ids are assigned monotonically by the front-end that dispatches
/// [`TodoAction::AddTodo`] and are immutable once assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the to-do
    pub text: String,
    /// Whether the to-do is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed to-do item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Which items the view should display
///
/// A derived display mode only: changing it never touches the stored items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityFilter {
    /// Show every item
    #[default]
    ShowAll,
    /// Show items not yet completed
    ShowActive,
    /// Show completed items
    ShowCompleted,
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowAll => write!(f, "all"),
            Self::ShowActive => write!(f, "active"),
            Self::ShowCompleted => write!(f, "completed"),
        }
    }
}

/// State of the whole to-do application
///
/// `todos` keeps insertion order, which is also display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All items, in insertion order
    pub todos: Vec<TodoItem>,
    /// Currently selected visibility filter
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Number of items not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.len() - self.completed_count()
    }
}

/// Actions the application can dispatch
///
/// A closed sum type: each variant carries its own strongly-typed payload,
/// so there is no "unknown action" case for reducers to fall through on.
#[derive(Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new item with the given id and text
    AddTodo {
        /// Item identifier, assigned by the dispatching front-end
        id: TodoId,
        /// Text of the new item
        text: String,
    },

    /// Flip the completion flag of the item with the given id
    ///
    /// An id not present in the list makes this a no-op.
    ToggleTodo {
        /// Item to toggle
        id: TodoId,
    },

    /// Select which items the view displays
    SetVisibilityFilter {
        /// The filter to select
        filter: VisibilityFilter,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(42).to_string(), "42");
    }

    #[test]
    fn todo_item_new_is_not_completed() {
        let item = TodoItem::new(TodoId::new(0), "Buy milk");
        assert_eq!(item.id, TodoId::new(0));
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn todo_item_toggle_twice_restores() {
        let mut item = TodoItem::new(TodoId::new(0), "Buy milk");
        item.toggle();
        assert!(item.completed);
        item.toggle();
        assert!(!item.completed);
    }

    #[test]
    fn default_filter_shows_all() {
        assert_eq!(VisibilityFilter::default(), VisibilityFilter::ShowAll);
        assert_eq!(AppState::default().visibility_filter, VisibilityFilter::ShowAll);
    }

    #[test]
    fn app_state_counts() {
        let state = AppState {
            todos: vec![
                TodoItem::new(TodoId::new(0), "one"),
                TodoItem {
                    id: TodoId::new(1),
                    text: "two".to_string(),
                    completed: true,
                },
            ],
            visibility_filter: VisibilityFilter::ShowAll,
        };

        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn action_names() {
        use reflux_core::Action as _;

        let action = TodoAction::AddTodo {
            id: TodoId::new(0),
            text: "x".to_string(),
        };
        assert_eq!(action.name(), "AddTodo");
        assert_eq!(TodoAction::ToggleTodo { id: TodoId::new(0) }.name(), "ToggleTodo");
    }
}
