use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use coursefind::app::{self, App};
use coursefind::catalog::{CatalogClient, CatalogState};
use coursefind::config::{self, ConfigResult};
use coursefind::logging;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Search the course catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "coursefind", version, about)]
struct Args {
    /// Base URL of the course API, e.g. http://localhost:3000 (overrides config)
    #[arg(long, value_name = "BASE_URL")]
    url: Option<String>,

    /// Config file to use instead of ~/.config/coursefind/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("coursefind: logging disabled: {}", e);
    }

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(url) = args.url {
        config.catalog.base_url = url;
    }

    let client = CatalogClient::from_config(&config.catalog)?;
    log::info!("Fetching catalog from {}", client.url());

    // Mount: the one catalog fetch starts here
    let mut app = App::new(CatalogState::start(client), warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|_| run(terminal, &mut app));

    // Restore terminal
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    if let Some(output) = app.final_output() {
        println!("{}", output);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| app::render(app, frame))?;

        if event::poll(TICK_RATE)? {
            app::handle_event(app, event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
