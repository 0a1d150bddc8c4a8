use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use four_in_a_row::config::AppConfig;
use four_in_a_row::ui::App;

/// Play Four in a Row in the terminal.
#[derive(Parser)]
#[command(name = "four-in-a-row", about = "A Connect-Four-style terminal game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Override the default board width (1-10)
    #[arg(long)]
    width: Option<usize>,

    /// Override the default board height (1-10)
    #[arg(long)]
    height: Option<usize>,

    /// Override the computer's thinking delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Disable sound cues
    #[arg(long)]
    silent: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.default_width = width;
    }
    if let Some(height) = cli.height {
        config.board.default_height = height;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.computer.think_delay_ms = delay_ms;
    }
    if cli.silent {
        config.sound.enabled = false;
    }
    config.validate().context("invalid configuration")?;

    run(&config).context("terminal error")
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore the terminal even when the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
