//! Store - holds application state and manages the Redux loop

use std::sync::mpsc::{channel, Receiver};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;

/// Holds the state, the middleware chain, and the action queue.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they execute in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through the middleware chain and the reducer,
    /// then any actions the chain queued while doing so.
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        self.pump();
    }

    /// Drain queued actions (from middleware or background fetch tasks) and
    /// run each through the full chain, in arrival order.
    pub fn pump(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let mut should_reduce = true;

            for middleware in &mut self.middleware {
                if !middleware.handle(&action, &self.state, &self.dispatcher) {
                    should_reduce = false;
                    break;
                }
            }

            if should_reduce {
                self.state = reduce(self.state.clone(), &action);
            }
        }
    }
}
