use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

/// Browser bookmarks popup for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to /tmp/bookmarktui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Chromium `Bookmarks` file (overrides `bookmarks_path`)
    #[arg(short, long)]
    bookmarks: Option<PathBuf>,

    /// Command used to open urls, e.g. "firefox --new-tab"
    #[arg(long)]
    open_command: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod storage;
mod ui;
mod utils;

use api::{BookmarkStore, ChromiumBookmarks, CommandOpener, TabOpener};
use config::Config;
use logic::pinned::PinnedSet;
use services::{LoaderRequest, LoaderResponse};
use storage::{KvStore, MemoryStore, SqliteStore};

pub(crate) fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "{} {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            msg
        );
    }
}

pub struct App {
    pub model: model::Model,

    store: Box<dyn KvStore>,
    opener: Box<dyn TabOpener>,
    loader_tx: tokio::sync::mpsc::UnboundedSender<LoaderRequest>,
    loader_rx: tokio::sync::mpsc::UnboundedReceiver<LoaderResponse>,
}

impl App {
    fn new(
        indent_width: u16,
        pinned: PinnedSet,
        store: Box<dyn KvStore>,
        opener: Box<dyn TabOpener>,
        loader_tx: tokio::sync::mpsc::UnboundedSender<LoaderRequest>,
        loader_rx: tokio::sync::mpsc::UnboundedReceiver<LoaderResponse>,
    ) -> Self {
        Self {
            model: model::Model::new(indent_width, pinned),
            store,
            opener,
            loader_tx,
            loader_rx,
        }
    }
}

/// Locate the config file; `Ok(None)` means "run with defaults"
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/bookmarktui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("bookmarktui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Open the pinned-set store, degrading to an in-memory one
fn open_store(config: &Config) -> (Box<dyn KvStore>, Option<anyhow::Error>) {
    let path = config
        .storage_path
        .clone()
        .unwrap_or_else(SqliteStore::default_path);

    match SqliteStore::open(&path) {
        Ok(store) => {
            log_debug(&format!("Storage opened at {:?}", path));
            (Box::new(store), None)
        }
        Err(e) => {
            log_debug(&format!(
                "Failed to open storage, pins will not survive restart: {}",
                logic::errors::format_error_chain(&e)
            ));
            (Box::new(MemoryStore::new()), Some(e))
        }
    }
}

/// Read the pinned set; on a failed read the stored list is left untouched
///
/// Pins made this session then go to an in-memory store, so the next persist
/// cannot overwrite entries that were never loaded.
fn load_pinned(store: Box<dyn KvStore>) -> (Box<dyn KvStore>, PinnedSet, Option<anyhow::Error>) {
    match PinnedSet::load(store.as_ref()) {
        Ok(pinned) => {
            log_debug(&format!("Loaded {} pinned bookmarks", pinned.len()));
            (store, pinned, None)
        }
        Err(e) => {
            log_debug(&format!(
                "Failed to load pinned bookmarks, pins will not be saved: {}",
                logic::errors::format_error_chain(&e)
            ));
            (Box::new(MemoryStore::new()), PinnedSet::new(), Some(e))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration (every key has a default)
    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::load(&path)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if let Some(path) = args.bookmarks {
        config.bookmarks_path = Some(path);
    }
    if let Some(command) = args.open_command {
        config.open_command = Some(command);
    }

    let bookmarks_path = config.resolve_bookmarks_path().unwrap_or_else(|| {
        log_debug("Could not locate a bookmarks file for this platform");
        PathBuf::new()
    });
    let chromium = ChromiumBookmarks::new(bookmarks_path);
    log_debug(&format!("Reading bookmarks from: {:?}", chromium.path()));
    let bookmark_store: Arc<dyn BookmarkStore> = Arc::new(chromium);

    let open_command = config.resolve_open_command();
    let opener = CommandOpener::from_command_line(&open_command)
        .or_else(|| CommandOpener::from_command_line(logic::platform::default_open_command()))
        .ok_or_else(|| anyhow::anyhow!("No command available to open urls"))?;
    log_debug(&format!("Opening urls with: {}", opener.program()));

    let (store, open_error) = open_store(&config);
    let (store, pinned, load_error) = load_pinned(store);

    // Initialize app
    let (loader_tx, loader_rx) = services::loader::spawn_loader_service(bookmark_store);
    let mut app = App::new(
        config.indent_width(),
        pinned,
        store,
        Box::new(opener),
        loader_tx,
        loader_rx,
    );
    if let Some(e) = open_error.or(load_error) {
        app.model
            .show_toast(format!("Error: {}", logic::errors::format_error_message(&e)));
    }
    app.start();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Apply completed tree fetches (non-blocking)
        app.process_loader_responses();

        // Short poll so fetch results show up without waiting for input
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
