//! SourceMiddleware - owns the injected log source and runs all fetches
//!
//! The only place the console touches I/O. Work runs on the tokio runtime;
//! results come back through the dispatcher as ordinary actions, entering the
//! same total order as key events, and the reducer applies a finished fetch
//! as one atomic swap.

use std::sync::Arc;

use modcon_source::LogSource;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct SourceMiddleware {
    source: Arc<dyn LogSource>,
    runtime: tokio::runtime::Handle,
}

impl SourceMiddleware {
    pub fn new(source: Arc<dyn LogSource>, runtime: tokio::runtime::Handle) -> Self {
        Self { source, runtime }
    }

    fn spawn_list(&self, dispatcher: Dispatcher) {
        let source = Arc::clone(&self.source);
        self.runtime.spawn(async move {
            match source.list_sources().await {
                Ok(names) => dispatcher.dispatch(Action::SourcesLoaded(names)),
                Err(e) => dispatcher.dispatch(Action::SourceListFailed(e.to_string())),
            }
        });
    }

    fn spawn_fetch(&self, name: String, dispatcher: Dispatcher) {
        let source = Arc::clone(&self.source);
        self.runtime.spawn(async move {
            match source.fetch(&name).await {
                Ok(text) => dispatcher.dispatch(Action::LogLoaded { source: name, text }),
                Err(e) => dispatcher.dispatch(Action::LoadFailed(e.to_string())),
            }
        });
    }

    fn spawn_clear(&self, name: String, dispatcher: Dispatcher) {
        let source = Arc::clone(&self.source);
        self.runtime.spawn(async move {
            match source.clear(&name).await {
                Ok(()) => dispatcher.dispatch(Action::SourceCleared(name)),
                Err(e) => dispatcher.dispatch(Action::ClearFailed(e.to_string())),
            }
        });
    }
}

impl Middleware for SourceMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap => {
                self.spawn_list(dispatcher.clone());
                true
            }

            Action::SourcesLoaded(names) => {
                // Nothing selected yet: pick the first discovered source.
                if state.selected.is_none() && !names.is_empty() {
                    dispatcher.dispatch(Action::SelectSource(0));
                }
                true
            }

            Action::SelectSource(index) => {
                if let Some(name) = state.sources.get(*index) {
                    self.spawn_fetch(name.clone(), dispatcher.clone());
                }
                true // reducer still records the selection
            }

            Action::NextSource | Action::PrevSource => {
                if state.sources.is_empty() {
                    return false;
                }
                let len = state.sources.len();
                let target = match (action, state.selected) {
                    (Action::NextSource, Some(current)) => (current + 1) % len,
                    (Action::PrevSource, Some(current)) => (current + len - 1) % len,
                    _ => 0,
                };
                dispatcher.dispatch(Action::SelectSource(target));
                false
            }

            Action::Refresh => {
                if let Some(name) = state.selected_name() {
                    self.spawn_fetch(name.to_string(), dispatcher.clone());
                }
                true
            }

            Action::ClearRequested => {
                if let Some(name) = state.selected_name() {
                    self.spawn_clear(name.to_string(), dispatcher.clone());
                }
                true
            }

            Action::SourceCleared(_) => {
                // Show the (now empty) file rather than the stale records.
                dispatcher.dispatch(Action::Refresh);
                true
            }

            _ => true,
        }
    }
}
