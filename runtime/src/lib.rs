//! # Reflux Runtime
//!
//! Runtime implementation for the Reflux architecture.
//!
//! This crate provides the Store: the single owner of application state,
//! the entry point for dispatching actions, and the change-notification
//! mechanism for whatever view layer consumes it.
//!
//! ## Core Components
//!
//! - **Store**: owns the state, applies the reducer on each dispatch, and
//!   notifies subscribed listeners synchronously
//! - **Subscription**: a stable, copyable handle used to remove a listener
//!
//! ## Example
//!
//! ```ignore
//! use reflux_runtime::Store;
//!
//! let mut store = Store::new(app_reducer());
//!
//! let subscription = store.subscribe(|state: &AppState| {
//!     render(state);
//! });
//!
//! store.dispatch(TodoAction::AddTodo { id: TodoId::new(0), text: "Learn Reflux".into() });
//!
//! store.unsubscribe(subscription);
//! ```

use reflux_core::{Action, Reducer};

/// Store module - the runtime for reducers
///
/// The store is deliberately synchronous and single-threaded: every
/// dispatch runs the reducer and all listener callbacks to completion
/// before returning. There is no effect system, no task spawning, and no
/// locking, because the entire state transition is an instantaneous pure
/// function application.
pub mod store {
    use super::{Action, Reducer};

    type Listener<S> = Box<dyn FnMut(&S)>;

    /// A stable handle for a registered listener.
    ///
    /// Returned by [`Store::subscribe`] and consumed by
    /// [`Store::unsubscribe`]. Handles are copyable and never reused within
    /// one store, so unsubscribing twice (or holding a stale handle) is a
    /// harmless no-op.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Subscription(u64);

    /// The Store - owner of current state and mediator of all transitions
    ///
    /// The Store manages:
    /// 1. State (owned exclusively; read via [`Store::state`])
    /// 2. Reducer (all transition logic)
    /// 3. Listener registry (notified after every dispatch, in
    ///    registration order)
    ///
    /// A store is an explicitly constructed value, not a global singleton.
    /// Pass it by `&mut` reference to whatever drives it.
    ///
    /// # Re-entrancy
    ///
    /// Listeners receive the new state by reference instead of reading it
    /// back from the store, and `dispatch` takes `&mut self`. Dispatching
    /// from inside a listener is therefore a borrow-check error, not a
    /// runtime hazard.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(app_reducer());
    /// store.dispatch(TodoAction::ToggleTodo { id });
    /// println!("{} todos", store.state().todos.len());
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: R::State,
        reducer: R,
        listeners: Vec<(Subscription, Listener<R::State>)>,
        next_subscription: u64,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::Action: Action,
    {
        /// Create a new store driven by the given reducer.
        ///
        /// The initial state is the reducer's [`Reducer::initial_state`],
        /// invoked exactly once here. For a combined reducer this assembles
        /// the whole default state tree slot by slot.
        #[must_use]
        pub fn new(reducer: R) -> Self {
            let state = reducer.initial_state();
            Self {
                state,
                reducer,
                listeners: Vec::new(),
                next_subscription: 0,
            }
        }

        /// Read the current state.
        ///
        /// This is a read-only snapshot view; state only ever changes
        /// through [`Store::dispatch`].
        pub const fn state(&self) -> &R::State {
            &self.state
        }

        /// Dispatch an action to the store.
        ///
        /// Applies the reducer to the current state, then invokes every
        /// registered listener with the new state, in registration order.
        /// Returns after all listeners complete.
        ///
        /// Unrecognized or inapplicable actions (for example toggling an id
        /// that is not present) reduce to no-ops by the reducer contract;
        /// listeners are still notified.
        pub fn dispatch(&mut self, action: R::Action) {
            tracing::debug!(action = action.name(), "dispatching action");
            self.reducer.reduce(&mut self.state, &action);

            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }

        /// Register a listener, invoked after every dispatch with the new
        /// state.
        ///
        /// Returns a [`Subscription`] handle for later removal. Listeners
        /// are invoked in registration order.
        pub fn subscribe<F>(&mut self, listener: F) -> Subscription
        where
            F: FnMut(&R::State) + 'static,
        {
            let subscription = Subscription(self.next_subscription);
            self.next_subscription += 1;
            self.listeners.push((subscription, Box::new(listener)));
            tracing::trace!(subscription = subscription.0, "listener subscribed");
            subscription
        }

        /// Remove the listener registered under `subscription`.
        ///
        /// Idempotent: removing an already-removed (or foreign) handle is a
        /// no-op. Remaining listeners keep their registration order.
        pub fn unsubscribe(&mut self, subscription: Subscription) {
            let before = self.listeners.len();
            self.listeners.retain(|(handle, _)| *handle != subscription);
            if self.listeners.len() < before {
                tracing::trace!(subscription = subscription.0, "listener unsubscribed");
            }
        }

        /// Number of currently registered listeners.
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.listeners.len()
        }
    }
}

pub use store::{Store, Subscription};
