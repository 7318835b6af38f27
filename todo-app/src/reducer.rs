//! Reducer logic for the to-do application.
//!
//! Three layers, leaf-first: item-level transitions, the list reducer that
//! delegates to them, and the filter reducer. [`app_reducer`] wires the two
//! field reducers into the root combinator.

use crate::types::{AppState, TodoAction, TodoItem, VisibilityFilter};
use reflux_core::{CombinedReducer, Reducer, combine_reducers, scope_reducer};

/// Item-level transitions.
///
/// Kept separate from the list reducer so the per-item rules can be stated
/// (and tested) without the surrounding collection.
mod item {
    use super::{TodoAction, TodoItem};

    /// Build the item an `AddTodo` action describes. There is no prior
    /// item; creation is the only transition that starts from nothing.
    pub(super) fn create(id: crate::types::TodoId, text: &str) -> TodoItem {
        TodoItem::new(id, text)
    }

    /// Apply an action to an existing item. Only `ToggleTodo` with a
    /// matching id changes anything; every other action leaves the item
    /// untouched.
    pub(super) fn reduce(item: &mut TodoItem, action: &TodoAction) {
        if let TodoAction::ToggleTodo { id } = action {
            if item.id == *id {
                item.toggle();
            }
        }
    }
}

/// Reducer for the ordered list of to-do items
///
/// Append-only: `AddTodo` pushes at the end, nothing ever removes or
/// reorders. `ToggleTodo` is delegated to the item layer for every element,
/// so an absent id falls through as a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoListReducer;

impl TodoListReducer {
    /// Creates a new `TodoListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoListReducer {
    type State = Vec<TodoItem>;
    type Action = TodoAction;

    fn initial_state(&self) -> Vec<TodoItem> {
        Vec::new()
    }

    fn reduce(&self, state: &mut Vec<TodoItem>, action: &TodoAction) {
        match action {
            TodoAction::AddTodo { id, text } => {
                state.push(item::create(*id, text));
            },
            TodoAction::ToggleTodo { .. } => {
                for todo in state.iter_mut() {
                    item::reduce(todo, action);
                }
            },
            TodoAction::SetVisibilityFilter { .. } => {},
        }
    }
}

/// Reducer for the visibility filter
///
/// Stores the payload of `SetVisibilityFilter` verbatim and ignores
/// everything else.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl VisibilityFilterReducer {
    /// Creates a new `VisibilityFilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;

    fn initial_state(&self) -> VisibilityFilter {
        VisibilityFilter::default()
    }

    fn reduce(&self, state: &mut VisibilityFilter, action: &TodoAction) {
        if let TodoAction::SetVisibilityFilter { filter } = action {
            *state = *filter;
        }
    }
}

/// The root reducer over [`AppState`]
///
/// One slot per state field. Every action is broadcast to both slots; each
/// sub-reducer ignores what it does not recognize, which is what keeps
/// `todos` and `visibility_filter` independent.
#[must_use]
pub fn app_reducer() -> CombinedReducer<AppState, TodoAction> {
    combine_reducers(vec![
        Box::new(scope_reducer(TodoListReducer::new(), |s: &mut AppState| {
            &mut s.todos
        })),
        Box::new(scope_reducer(
            VisibilityFilterReducer::new(),
            |s: &mut AppState| &mut s.visibility_filter,
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use proptest::prelude::*;
    use reflux_testing::ReducerTest;

    fn item(id: u64, text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_add_todo_appends() {
        ReducerTest::new(TodoListReducer::new())
            .given_state(vec![item(0, "Learn Reflux", false)])
            .when_action(TodoAction::AddTodo {
                id: TodoId::new(1),
                text: "Go shopping".to_string(),
            })
            .then_state(|todos| {
                assert_eq!(todos.len(), 2);
                assert_eq!(todos[0], item(0, "Learn Reflux", false));
                assert_eq!(todos[1], item(1, "Go shopping", false));
            })
            .run();
    }

    #[test]
    fn test_add_todo_starts_empty() {
        ReducerTest::new(TodoListReducer::new())
            .when_action(TodoAction::AddTodo {
                id: TodoId::new(0),
                text: "Learn Reflux".to_string(),
            })
            .then_state(|todos| {
                assert_eq!(todos.len(), 1);
                assert!(!todos[0].completed);
            })
            .run();
    }

    #[test]
    fn test_toggle_todo_flips_only_matching() {
        ReducerTest::new(TodoListReducer::new())
            .given_state(vec![item(0, "one", false), item(1, "two", false)])
            .when_action(TodoAction::ToggleTodo { id: TodoId::new(1) })
            .then_state(|todos| {
                assert!(!todos[0].completed);
                assert!(todos[1].completed);
            })
            .run();
    }

    #[test]
    fn test_toggle_todo_absent_id_is_noop() {
        let before = vec![item(0, "one", false), item(1, "two", true)];
        let expected = before.clone();

        ReducerTest::new(TodoListReducer::new())
            .given_state(before)
            .when_action(TodoAction::ToggleTodo { id: TodoId::new(99) })
            .then_state(move |todos| {
                assert_eq!(*todos, expected);
            })
            .run();
    }

    #[test]
    fn test_filter_reducer_stores_payload() {
        ReducerTest::new(VisibilityFilterReducer::new())
            .when_action(TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            })
            .then_state(|filter| {
                assert_eq!(*filter, VisibilityFilter::ShowCompleted);
            })
            .run();
    }

    #[test]
    fn test_filter_reducer_ignores_other_actions() {
        ReducerTest::new(VisibilityFilterReducer::new())
            .given_state(VisibilityFilter::ShowActive)
            .when_action(TodoAction::ToggleTodo { id: TodoId::new(0) })
            .then_state(|filter| {
                assert_eq!(*filter, VisibilityFilter::ShowActive);
            })
            .run();
    }

    #[test]
    fn test_app_reducer_initial_state() {
        let state = app_reducer().initial_state();
        assert!(state.todos.is_empty());
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
    }

    #[test]
    fn test_app_reducer_field_independence() {
        let reducer = app_reducer();
        let mut state = reducer.initial_state();

        reducer.reduce(
            &mut state,
            &TodoAction::AddTodo {
                id: TodoId::new(0),
                text: "Learn Reflux".to_string(),
            },
        );
        reducer.reduce(&mut state, &TodoAction::ToggleTodo { id: TodoId::new(0) });
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);

        let todos_before = state.todos.clone();
        reducer.reduce(
            &mut state,
            &TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            },
        );
        assert_eq!(state.todos, todos_before);
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowCompleted);
    }

    fn arb_todos() -> impl Strategy<Value = Vec<TodoItem>> {
        prop::collection::vec((any::<bool>(), "[a-z]{1,8}"), 0..8).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (completed, text))| TodoItem {
                    id: TodoId::new(i as u64),
                    text,
                    completed,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_add_appends_and_preserves_prefix(todos in arb_todos(), text in "[a-z]{1,8}") {
            let reducer = TodoListReducer::new();
            let fresh_id = TodoId::new(todos.len() as u64 + 100);

            let mut after = todos.clone();
            reducer.reduce(&mut after, &TodoAction::AddTodo { id: fresh_id, text: text.clone() });

            prop_assert_eq!(after.len(), todos.len() + 1);
            prop_assert_eq!(&after[..todos.len()], &todos[..]);
            let last = &after[after.len() - 1];
            prop_assert_eq!(last.id, fresh_id);
            prop_assert_eq!(&last.text, &text);
            prop_assert!(!last.completed);
        }

        #[test]
        fn prop_toggle_twice_is_identity(todos in arb_todos(), id in 0u64..16) {
            let reducer = TodoListReducer::new();
            let action = TodoAction::ToggleTodo { id: TodoId::new(id) };

            let mut after = todos.clone();
            reducer.reduce(&mut after, &action);
            reducer.reduce(&mut after, &action);

            prop_assert_eq!(after, todos);
        }

        #[test]
        fn prop_toggle_absent_id_is_noop(todos in arb_todos()) {
            let reducer = TodoListReducer::new();
            let absent = TodoId::new(u64::MAX);

            let mut after = todos.clone();
            reducer.reduce(&mut after, &TodoAction::ToggleTodo { id: absent });

            prop_assert_eq!(after, todos);
        }

        #[test]
        fn prop_set_filter_is_verbatim(todos in arb_todos()) {
            let reducer = app_reducer();
            let mut state = AppState { todos: todos.clone(), visibility_filter: VisibilityFilter::ShowAll };

            for filter in [VisibilityFilter::ShowActive, VisibilityFilter::ShowCompleted, VisibilityFilter::ShowAll] {
                reducer.reduce(&mut state, &TodoAction::SetVisibilityFilter { filter });
                prop_assert_eq!(state.visibility_filter, filter);
                prop_assert_eq!(&state.todos, &todos);
            }
        }
    }
}
