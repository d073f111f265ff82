//! Dispatcher for middleware action dispatch
//!
//! Middleware (and background fetch tasks) hand actions to the dispatcher
//! instead of mutating state; the store drains the channel and runs each
//! action through the full chain. Background results therefore enter the
//! same total order as key events, which is what makes "filter reset before
//! the next scroll" hold without locking.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
