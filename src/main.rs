use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    sync::atomic::{AtomicBool, Ordering},
    sync::{Arc, Mutex},
    time::Duration,
};

use logtui::app::App;
use logtui::config::Config;
use logtui::handlers::handle_key;
use logtui::logic::platform;
use logtui::services::spawn_export_worker;
use logtui::store::LoggerStore;
use logtui::ui;

/// Log Console TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to /tmp/logtui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Seed the store with sample messages
    #[arg(long)]
    demo: bool,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/logtui-debug.log")
    {
        let _ = writeln!(file, "{}", msg);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    let config = Config::load(args.config.as_deref())?;
    log_debug(&format!("config loaded: {:?}", config));

    // Capability is resolved once per process; the decision logic only ever
    // sees it as a value.
    let capability = platform::resolve();
    log_debug(&format!("platform capability: {:?}", capability));

    let session = std::process::id() as u64;
    let mut store = LoggerStore::new(session);
    if args.demo {
        store.seed_demo();
    }
    let store = Arc::new(Mutex::new(store));

    let export_tx = spawn_export_worker(Arc::clone(&store), config.export_dir());
    let mut app = App::new(store, config, capability, export_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        // Pick up a finished export, if one was in flight
        app.poll_export();

        if app.should_quit {
            return Ok(());
        }
    }
}
