use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use omnibar::app::config::{self, Config};
use omnibar::app::{r#loop::run_loop, state::AppState};
use omnibar::infrastructure::http::HttpSearchClient;
use omnibar::logging;

/// Global search for the project-management console.
#[derive(Parser, Debug)]
#[command(name = "omnibar", version, about)]
struct Cli {
    /// Base URL of the API, e.g. https://pm.example.com/api
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token; falls back to $OMNIBAR_ACCESS_TOKEN, then the config file
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,

    /// Config file (default: ~/.config/omnibar/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (default: ~/.config/omnibar/omnibar.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_panic_hook();

    // Everything that can fail on bad input happens BEFORE terminal setup,
    // so an error never leaves the terminal in raw mode.
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(
        cli.api_url,
        cli.token,
        std::env::var(config::TOKEN_ENV_VAR).ok(),
    );

    if let Some(path) = cli.log_file.or_else(config::default_log_path) {
        logging::init(&path)?;
    }
    tracing::info!(api = %config.api_base_url, theme = config.theme.label(), "starting");

    let client = HttpSearchClient::new(
        &config.api_base_url,
        config.access_token.clone(),
        config.search.request_timeout(),
    )?;
    if config.access_token.is_none() {
        tracing::warn!("no access token configured; searches will return nothing");
    }
    let app_state = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, Arc::new(client)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        println!("{:?}", err);
    }

    Ok(())
}
