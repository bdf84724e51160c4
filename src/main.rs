use std::io;
use std::path::PathBuf;

use clap::Parser;
use connect_four_tui::config::AppConfig;
use connect_four_tui::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

#[derive(Debug, Parser)]
#[command(name = "connect-four", about = "Connect Four against a rule-based computer opponent")]
struct Cli {
    /// Path to the TOML config file; defaults are used if it does not exist
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed the opponent and the first-player coin flip for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&config, cli.seed) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &AppConfig, seed: Option<u64>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, seed);
    let res = app.run(&mut terminal);

    // Restore terminal, even when the app loop returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
