//! # Reflux Core
//!
//! Core traits and types for the Reflux architecture.
//!
//! This crate provides the fundamental abstractions for building
//! unidirectional, synchronous state containers using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned by the store
//! - **Action**: A closed sum type describing an intent to change state
//! - **Reducer**: Pure function `(&mut State, &Action) → ()` with an explicit
//!   initial state
//! - **Composition**: A root reducer assembled from per-field sub-reducers
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Single Owner of State (the store holds the only copy)
//! - Explicit Initialization (no implicit call-with-nothing bootstrapping)
//! - Total Reducers (unrecognized input is a no-op, never a fault)
//!
//! ## Example
//!
//! ```
//! use reflux_core::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn initial_state(&self) -> CounterState {
//!         CounterState::default()
//!     }
//!
//!     fn reduce(&self, state: &mut CounterState, action: &CounterAction) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//!
//! let reducer = CounterReducer;
//! let mut state = reducer.initial_state();
//! reducer.reduce(&mut state, &CounterAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Action module - the input type for reducers
///
/// Actions represent all possible state transitions in the system. They are
/// closed sum types: every transition the system supports is a variant, and
/// there is no "unknown action" at runtime.
pub mod action {
    /// Marker trait for action types.
    ///
    /// The only required behavior is a stable, human-readable name per
    /// variant, used by the store for structured logging. Implement it via
    /// `#[derive(Action)]` from `reflux-macros` rather than by hand.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use reflux_macros::Action;
    ///
    /// #[derive(Action, Clone, Debug)]
    /// enum TodoAction {
    ///     AddTodo { id: u64, text: String },
    ///     ToggleTodo { id: u64 },
    /// }
    ///
    /// let action = TodoAction::ToggleTodo { id: 0 };
    /// assert_eq!(reflux_core::Action::name(&action), "ToggleTodo");
    /// ```
    pub trait Action {
        /// The variant name of this action, for logging and diagnostics.
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for state transitions
///
/// Reducers are pure functions: deterministic, free of side effects, and
/// total over their action type. They contain all transition logic.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Associated Types
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// `reduce` must be deterministic, must not perform I/O, and must treat
    /// actions it does not recognize as no-ops. It receives the action by
    /// reference because the same action is broadcast to every sub-reducer
    /// of a combined reducer.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for VisibilityFilterReducer {
    ///     type State = VisibilityFilter;
    ///     type Action = TodoAction;
    ///
    ///     fn initial_state(&self) -> VisibilityFilter {
    ///         VisibilityFilter::default()
    ///     }
    ///
    ///     fn reduce(&self, state: &mut VisibilityFilter, action: &TodoAction) {
    ///         if let TodoAction::SetVisibilityFilter { filter } = action {
    ///             *state = *filter;
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The state this reducer starts from.
        ///
        /// Invoked exactly once, when a store (or a combined reducer) is
        /// constructed. This replaces the convention of calling a reducer
        /// with a missing prior state to obtain its default.
        fn initial_state(&self) -> Self::State;

        /// Apply an action to the state.
        ///
        /// The store holds the only reference to `state` during a dispatch,
        /// so no observer can see a partially-applied transition.
        fn reduce(&self, state: &mut Self::State, action: &Self::Action);
    }
}

// Re-export commonly used types
pub use action::Action;
pub use composition::{CombinedReducer, ScopedReducer, StateSlot, combine_reducers, scope_reducer};
pub use reducer::Reducer;
