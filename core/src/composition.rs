//! Reducer composition utilities
//!
//! This module provides utilities for assembling a root reducer out of
//! smaller ones:
//! - **`combine_reducers`**: run every slot reducer on every action
//! - **`scope_reducer`**: focus a reducer on a single field of a larger state
//!
//! The combined reducer is configuration-driven: the caller supplies an
//! ordered list of slots (typically one per state field), and every
//! dispatched action is broadcast to every slot unconditionally. This is a
//! deliberate broadcast, not a dispatch-by-type optimization — a slot whose
//! reducer does not recognize an action simply leaves its field untouched.
//!
//! # Examples
//!
//! ```
//! use reflux_core::{CombinedReducer, Reducer, combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CounterReducer;
//! struct NameReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!
//!     fn initial_state(&self) -> i32 {
//!         0
//!     }
//!
//!     fn reduce(&self, state: &mut i32, action: &AppAction) {
//!         if matches!(action, AppAction::Increment) {
//!             *state += 1;
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!
//!     fn initial_state(&self) -> String {
//!         String::new()
//!     }
//!
//!     fn reduce(&self, state: &mut String, action: &AppAction) {
//!         if let AppAction::SetName(name) = action {
//!             state.clone_from(name);
//!         }
//!     }
//! }
//!
//! let combined: CombinedReducer<AppState, AppAction> = combine_reducers(vec![
//!     Box::new(scope_reducer(CounterReducer, |s: &mut AppState| &mut s.count)),
//!     Box::new(scope_reducer(NameReducer, |s: &mut AppState| &mut s.name)),
//! ]);
//!
//! let mut state = combined.initial_state();
//! combined.reduce(&mut state, &AppAction::Increment);
//! combined.reduce(&mut state, &AppAction::SetName("Alice".to_string()));
//! assert_eq!(state.count, 1);
//! assert_eq!(state.name, "Alice");
//! ```

use crate::reducer::Reducer;

/// One entry of a combined reducer: a reducer bound to its place in the
/// parent state.
///
/// Implemented by [`ScopedReducer`]. A reducer over the whole parent state
/// scopes with the identity lens `|s| s`.
pub trait StateSlot<S, A> {
    /// Write this slot's initial sub-state into the parent state.
    ///
    /// Called once per slot, in slot order, when the combined reducer's
    /// [`Reducer::initial_state`] assembles the default state tree.
    fn write_initial(&self, state: &mut S);

    /// Apply an action to this slot's portion of the parent state.
    fn reduce(&self, state: &mut S, action: &A);
}

/// Scopes a reducer to operate on one field of a larger state.
///
/// The `lens` is a plain function from the parent state to the field the
/// reducer owns. Reducing through a scoped slot mutates that field in place;
/// the rest of the parent state is untouched by construction.
///
/// # Examples
///
/// ```
/// use reflux_core::{Reducer, scope_reducer, StateSlot};
///
/// #[derive(Clone, Debug, Default)]
/// struct ParentState {
///     value: i32,
///     label: String,
/// }
///
/// #[derive(Clone, Debug)]
/// enum ParentAction {
///     Add(i32),
/// }
///
/// struct ValueReducer;
///
/// impl Reducer for ValueReducer {
///     type State = i32;
///     type Action = ParentAction;
///
///     fn initial_state(&self) -> i32 {
///         5
///     }
///
///     fn reduce(&self, state: &mut i32, action: &ParentAction) {
///         let ParentAction::Add(n) = action;
///         *state += n;
///     }
/// }
///
/// let scoped = scope_reducer(ValueReducer, |p: &mut ParentState| &mut p.value);
///
/// let mut state = ParentState::default();
/// scoped.write_initial(&mut state);
/// assert_eq!(state.value, 5);
///
/// scoped.reduce(&mut state, &ParentAction::Add(3));
/// assert_eq!(state.value, 8);
/// assert_eq!(state.label, ""); // untouched
/// ```
#[must_use]
pub const fn scope_reducer<S, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
) -> ScopedReducer<S, R>
where
    R: Reducer,
{
    ScopedReducer { reducer, lens }
}

/// A reducer focused on one field of a parent state.
///
/// Created by [`scope_reducer`]. Implements [`StateSlot`], not [`Reducer`]:
/// it cannot produce a full parent state on its own, only its field of it.
pub struct ScopedReducer<S, R>
where
    R: Reducer,
{
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
}

impl<S, R> StateSlot<S, R::Action> for ScopedReducer<S, R>
where
    R: Reducer,
{
    fn write_initial(&self, state: &mut S) {
        *(self.lens)(state) = self.reducer.initial_state();
    }

    fn reduce(&self, state: &mut S, action: &R::Action) {
        self.reducer.reduce((self.lens)(state), action);
    }
}

/// Combines slot reducers into a single reducer over the composite state.
///
/// Each slot runs in order on every action. The composite initial state is
/// built once, at store construction: a `Default` shell with every slot's
/// [`Reducer::initial_state`] written through its lens.
///
/// # Type Parameters
///
/// - `S`: The composite state type
/// - `A`: The action type shared by all slots
#[must_use]
pub fn combine_reducers<S, A>(slots: Vec<Box<dyn StateSlot<S, A>>>) -> CombinedReducer<S, A>
where
    S: Default,
{
    CombinedReducer { slots }
}

/// A combined reducer that broadcasts every action to all of its slots.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: Default,
{
    slots: Vec<Box<dyn StateSlot<S, A>>>,
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: Default,
{
    type State = S;
    type Action = A;

    fn initial_state(&self) -> S {
        let mut state = S::default();
        for slot in &self.slots {
            slot.write_initial(&mut state);
        }
        state
    }

    fn reduce(&self, state: &mut S, action: &A) {
        for slot in &self.slots {
            slot.reduce(state, action);
        }
    }
}
