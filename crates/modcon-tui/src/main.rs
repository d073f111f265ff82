use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

use modcon_config::AppConfig;
use modcon_source::{CommandLogSource, DirLogSource, LogSource, MockLogSource};

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::Action;
use middleware::{
    keyboard::KeyboardMiddleware, logging::LoggingMiddleware, source::SourceMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();
    log::info!("Starting modcon (log file: {})", log_file.display());

    let config = AppConfig::load();
    let demo = std::env::args().any(|arg| arg == "--demo");

    // The source implementation is chosen once here and injected; everything
    // downstream only sees the LogSource trait.
    let source: Arc<dyn LogSource> = if demo {
        log::info!("Demo mode: using mock log source");
        Arc::new(MockLogSource::new())
    } else if config.shell_fetch {
        Arc::new(CommandLogSource::new(&config.logs_dir, config.tail_lines))
    } else {
        Arc::new(DirLogSource::new(&config.logs_dir, config.tail_lines))
    };

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::new(config.buffer_rows));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SourceMiddleware::new(
        source,
        runtime.handle().clone(),
    )));

    // Discover log files before the first frame
    store.dispatch(Action::Bootstrap);

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting modcon");
    result.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        // Apply background fetch results queued since the last tick
        store.pump();

        // Keep the windower's viewport in sync with the terminal size
        let viewport = views::list_viewport_height(terminal.size()?.height);
        if viewport != store.state().logs.geometry().viewport_height {
            store.dispatch(Action::ViewportResized(viewport));
        }

        // Render
        terminal.draw(|frame| {
            views::render(store.state(), frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::KeyPressed(key));
                }
            }
        }
    }

    Ok(())
}
