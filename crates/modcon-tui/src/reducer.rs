//! Reducer
//!
//! Pure state transitions. Actions are reduced to completion in dispatch
//! order, so a filter change has already reset the scroll offset by the time
//! a queued scroll action is reduced — the ordering invariant lives here and
//! in `LogViewState`, not in the views.

use chrono::Local;

use crate::actions::Action;
use crate::state::{AppState, FILTER_CYCLE};

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        // Raw keys are translated (and consumed) by the keyboard middleware.
        Action::KeyPressed(_) => {}
        // Bootstrap only triggers discovery in the source middleware.
        Action::Bootstrap => {}

        Action::SourcesLoaded(names) => {
            state.sources = names.clone();
            state.source_list_error = None;
        }

        Action::SourceListFailed(error) => {
            state.source_list_error = Some(error.clone());
        }

        Action::SelectSource(index) => {
            if *index < state.sources.len() {
                state.selected = Some(*index);
                // A new source starts over: filter back to `all`, scroll to
                // the top, previous records discarded in one swap.
                state.filter_index = 0;
                state.logs.begin_source();
            }
        }

        // Translated into SelectSource by the source middleware.
        Action::NextSource | Action::PrevSource => {}

        Action::Refresh => {}

        Action::LogLoaded { source, text } => {
            // A fetch that finished after the user moved on is stale; the
            // renderer must never see another source's records.
            if state.selected_name() == Some(source.as_str()) {
                state.logs.finish_load(text, Local::now());
            } else {
                log::debug!("dropping stale fetch result for {source}");
            }
        }

        Action::LoadFailed(error) => {
            state.logs.fail_load(error.clone());
        }

        Action::ClearRequested => {}

        // The source middleware follows up with a Refresh.
        Action::SourceCleared(_) => {}

        Action::ClearFailed(error) => {
            log::warn!("clear failed: {error}");
        }

        Action::CycleFilter => {
            state.filter_index = (state.filter_index + 1) % FILTER_CYCLE.len();
            state.logs.set_filter(state.filter());
        }

        Action::SetFilter(filter) => {
            if let Some(index) = FILTER_CYCLE.iter().position(|f| f == filter) {
                state.filter_index = index;
            }
            state.logs.set_filter(*filter);
        }

        Action::ScrollUp(rows) => {
            state.logs.scroll_by(-(*rows as isize));
        }

        Action::ScrollDown(rows) => {
            state.logs.scroll_by(*rows as isize);
        }

        Action::PageUp => {
            let page = page_size(&state);
            state.logs.scroll_by(-(page as isize));
        }

        Action::PageDown => {
            let page = page_size(&state);
            state.logs.scroll_by(page as isize);
        }

        Action::ScrollToTop => {
            state.logs.scroll_to(0);
        }

        Action::ScrollToBottom => {
            state.logs.scroll_to_bottom();
        }

        Action::ViewportResized(height) => {
            state.logs.set_viewport_height(*height);
        }

        Action::ToggleTimestamps => {
            state.show_absolute_time = !state.show_absolute_time;
        }

        Action::Quit => {
            state.running = false;
        }
    }

    state
}

fn page_size(state: &AppState) -> usize {
    state.logs.geometry().viewport_height.saturating_sub(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcon_log_parser::{LevelFilter, LogLevel};
    use modcon_viewer::{LoadState, Placeholder};

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state = reduce(
            state,
            &Action::SourcesLoaded(vec!["module.log".into(), "error.log".into()]),
        );
        state = reduce(state, &Action::SelectSource(0));
        state = reduce(
            state,
            &Action::LogLoaded {
                source: "module.log".into(),
                text: "2024-01-01 12:00:00 [ERROR] disk full\n\
                       [INFO] 2024-01-01 12:05:00 ok\n"
                    .into(),
            },
        );
        state
    }

    #[test]
    fn test_select_source_resets_filter_and_loads() {
        let mut state = loaded_state();
        state = reduce(state, &Action::CycleFilter);
        assert_ne!(state.filter(), LevelFilter::All);

        state = reduce(state, &Action::SelectSource(1));
        assert_eq!(state.filter(), LevelFilter::All);
        assert_eq!(state.logs.load_state(), &LoadState::Loading);
        assert_eq!(state.logs.store().len(), 0);
    }

    #[test]
    fn test_stale_fetch_result_is_dropped() {
        let mut state = loaded_state();
        assert_eq!(state.logs.store().len(), 2);

        state = reduce(
            state,
            &Action::LogLoaded {
                source: "error.log".into(),
                text: "ERROR 2024-01-01 10:00:00 stale\n".into(),
            },
        );
        // Still the records of module.log.
        assert_eq!(state.logs.store().len(), 2);
        assert_eq!(state.logs.store().records()[0].message, "disk full");
    }

    #[test]
    fn test_filter_cycle_wraps_and_filters() {
        let mut state = loaded_state();

        state = reduce(state, &Action::SetFilter(LevelFilter::Only(LogLevel::Error)));
        assert_eq!(state.logs.store().filtered_len(), 1);

        for _ in 0..FILTER_CYCLE.len() {
            state = reduce(state, &Action::CycleFilter);
        }
        // Full cycle lands back where it started.
        assert_eq!(state.filter(), LevelFilter::Only(LogLevel::Error));
    }

    #[test]
    fn test_filter_change_resets_scroll_before_scroll_applies() {
        let mut state = AppState::default();
        state = reduce(state, &Action::SourcesLoaded(vec!["a.log".into()]));
        state = reduce(state, &Action::SelectSource(0));

        let mut text = String::new();
        for i in 0..100 {
            let level = if i % 4 == 0 { "ERROR" } else { "INFO" };
            text.push_str(&format!("2024-01-01 10:00:00 [{level}] line {i}\n"));
        }
        state = reduce(
            state,
            &Action::LogLoaded {
                source: "a.log".into(),
                text,
            },
        );
        assert_eq!(state.logs.scroll_offset(), 80); // bottom of 100 rows

        // Filter then scroll, in dispatch order.
        state = reduce(state, &Action::SetFilter(LevelFilter::Only(LogLevel::Error)));
        assert_eq!(state.logs.scroll_offset(), 0);
        state = reduce(state, &Action::ScrollDown(1000));
        // Clamped against the filtered length (25 rows), not the stale 100.
        assert_eq!(state.logs.scroll_offset(), 5);
    }

    #[test]
    fn test_load_failure_shows_error_placeholder() {
        let mut state = loaded_state();
        state = reduce(state, &Action::SelectSource(1));
        state = reduce(state, &Action::LoadFailed("tail: permission denied".into()));
        assert_eq!(
            state.logs.placeholder(),
            Some(Placeholder::FetchFailed("tail: permission denied".into()))
        );
    }

    #[test]
    fn test_paging_and_edges() {
        let mut state = loaded_state();
        state = reduce(state, &Action::ScrollToTop);
        assert_eq!(state.logs.scroll_offset(), 0);
        state = reduce(state, &Action::PageDown);
        // Only 2 records in a 20-row viewport; nothing to scroll.
        assert_eq!(state.logs.scroll_offset(), 0);
    }

    #[test]
    fn test_viewport_resize_flows_to_geometry() {
        let mut state = loaded_state();
        state = reduce(state, &Action::ViewportResized(42));
        assert_eq!(state.logs.geometry().viewport_height, 42);
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Quit);
        assert!(!state.running);
    }

    #[test]
    fn test_toggle_timestamps() {
        let state = reduce(AppState::default(), &Action::ToggleTimestamps);
        assert!(state.show_absolute_time);
    }
}
