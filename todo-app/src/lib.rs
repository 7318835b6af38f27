//! To-do list application built on the Reflux architecture.
//!
//! This crate demonstrates a complete, minimal unidirectional application:
//!
//! - A small state tree ([`AppState`]: items plus visibility filter)
//! - A closed action type ([`TodoAction`]) with `#[derive(Action)]`
//! - Per-field reducers composed with `combine_reducers`/`scope_reducer`
//! - A console front-end that subscribes to the store and re-renders on
//!   every dispatch
//!
//! # Quick Start
//!
//! ```
//! use reflux_runtime::Store;
//! use todo_app::{AppState, TodoAction, TodoId, app_reducer};
//!
//! let mut store = Store::new(app_reducer());
//!
//! store.dispatch(TodoAction::AddTodo {
//!     id: TodoId::new(0),
//!     text: "Learn Reflux".to_string(),
//! });
//! store.dispatch(TodoAction::ToggleTodo { id: TodoId::new(0) });
//!
//! let state: &AppState = store.state();
//! assert_eq!(state.todos.len(), 1);
//! assert!(state.todos[0].completed);
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TodoListReducer, VisibilityFilterReducer, app_reducer};
pub use types::{AppState, TodoAction, TodoId, TodoItem, VisibilityFilter};
