use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod content;
mod gemini;
mod grid;
mod handler;
mod link;
mod tui;
mod ui;

use app::App;
use config::Config;
use content::Language;
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "dream-edited")]
#[command(about = "Terminal portfolio with an animated grid hero and AI chat", version)]
struct Cli {
    /// UI language (EN or PT)
    #[arg(short, long)]
    lang: Option<String>,

    /// Gemini model for the Neural Link chat
    #[arg(short, long)]
    model: Option<String>,

    /// Write diagnostics to this file (the terminal owns stderr)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let config = Config::load().unwrap_or_else(|_| Config::new());
    let lang = cli.lang.as_deref().and_then(Language::from_str);
    let mut app = App::new(&config, lang, cli.model);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let result = run(&mut app, &mut terminal, &mut events).await;

    tui::restore()?;
    result
}

async fn run(app: &mut App, terminal: &mut tui::Tui, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event).await?,
            None => break,
        }
    }
    Ok(())
}
