//! The state container: one owner, one writer, one way in.

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Observer<S> = Box<dyn FnMut(&S) + Send>;

/// Holds the current state and applies intents through a [`Reducer`].
///
/// Dispatch is synchronous: each intent runs the reducer to completion and
/// notifies observers before the next intent is processed. The store is a
/// plain value; construct one per use, there is no shared singleton.
pub struct Store<R: Reducer> {
    state: R::State,
    observers: Vec<(SubscriberId, Observer<R::State>)>,
    next_subscriber: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply one intent: run the reducer, store the result, notify observers.
    ///
    /// Returns a reference to the new state.
    pub fn dispatch(&mut self, intent: R::Intent) -> &R::State {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
        &self.state
    }

    /// Register an observer called with the new state after every dispatch.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriberId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if the id was not subscribed (or already removed).
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
