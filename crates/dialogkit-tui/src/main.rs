//! dialogkit demo
//!
//! Manages a list of named widgets through the confirm and input dialogs.

use std::io;
use std::panic;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use dialogkit_tui::app::ReentryConfig;
use dialogkit_tui::ui::ThemeVariant;
use dialogkit_tui::{logging, App, EventHandler, TuiConfig};

/// Terminal demo of the dialogkit confirm and input dialogs
#[derive(Parser, Debug)]
#[command(name = "dialogkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the high-contrast theme
    #[arg(long)]
    high_contrast: bool,

    /// Simulated latency of create/rename in milliseconds
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Allow submitting again while a submission is pending
    #[arg(long)]
    concurrent_submit: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Args {
    /// Load the config file and apply command-line overrides
    fn resolve_config(&self) -> TuiConfig {
        let mut config = match &self.config {
            Some(path) => TuiConfig::load_from(path),
            None => TuiConfig::load(),
        };
        if self.high_contrast {
            config.theme = ThemeVariant::HighContrast;
        }
        if let Some(delay) = self.submit_delay_ms {
            config.submit_delay_ms = delay;
        }
        if self.concurrent_submit {
            config.reentry = ReentryConfig::Concurrent;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve_config();

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.save_config {
        let path = config
            .persist(args.config.as_deref())
            .context("saving configuration")?;
        println!("Saved configuration to {}", path.display());
        return Ok(());
    }

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    let log_path = logging::default_log_path();
    logging::init(log_path.as_deref());
    tracing::info!(?config, "dialogkit starting");

    let result = run_app(config).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {:#}", e);
    }

    result
}

async fn run_app(config: TuiConfig) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(config.tick_rate());
    let mut app = App::new(config, events.sender());
    let result = app.run(&mut terminal, &mut events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}
