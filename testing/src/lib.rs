//! # Reflux Testing
//!
//! Testing utilities and helpers for the Reflux architecture.
//!
//! This crate provides:
//! - A fluent Given/When/Then harness for reducers ([`ReducerTest`])
//! - Listener probes for store notification tests ([`probes`])
//!
//! ## Example
//!
//! ```ignore
//! use reflux_testing::ReducerTest;
//!
//! ReducerTest::new(TodoListReducer)
//!     .when_action(TodoAction::AddTodo { id: TodoId::new(0), text: "Learn Reflux".into() })
//!     .then_state(|todos| {
//!         assert_eq!(todos.len(), 1);
//!     })
//!     .run();
//! ```


/// Listener probes for store notification tests
///
/// A listener registered with a store is a boxed closure the test can no
/// longer inspect. These probes hand out closures that share an interior
/// counter or log with the test body, so assertions about invocation counts
/// and ordering stay readable.
pub mod probes {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Counts how many times its listener closure was invoked.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let counter = CountingListener::new();
    /// store.subscribe(counter.listener());
    /// store.dispatch(action);
    /// assert_eq!(counter.count(), 1);
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct CountingListener {
        invocations: Rc<Cell<usize>>,
    }

    impl CountingListener {
        /// Create a probe with a zeroed counter.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of times the listener has been invoked so far.
        #[must_use]
        pub fn count(&self) -> usize {
            self.invocations.get()
        }

        /// A listener closure that increments this probe's counter.
        pub fn listener<S>(&self) -> impl FnMut(&S) + 'static {
            let invocations = Rc::clone(&self.invocations);
            move |_| invocations.set(invocations.get() + 1)
        }
    }

    /// Records a tag per invocation, across any number of listeners.
    ///
    /// Hand each subscribed listener its own tag and assert on the combined
    /// log to verify notification order.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let recorder = RecordingListener::new();
    /// store.subscribe(recorder.listener("first"));
    /// store.subscribe(recorder.listener("second"));
    /// store.dispatch(action);
    /// assert_eq!(recorder.log(), vec!["first", "second"]);
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct RecordingListener {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl RecordingListener {
        /// Create a probe with an empty log.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// The tags recorded so far, in invocation order.
        #[must_use]
        pub fn log(&self) -> Vec<&'static str> {
            self.log.borrow().clone()
        }

        /// A listener closure that appends `tag` on every invocation.
        pub fn listener<S>(&self, tag: &'static str) -> impl FnMut(&S) + 'static {
            let log = Rc::clone(&self.log);
            move |_| log.borrow_mut().push(tag)
        }
    }
}

// Re-export commonly used items
pub use probes::{CountingListener, RecordingListener};
pub use reducer_test::ReducerTest;
