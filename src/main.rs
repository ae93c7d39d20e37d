use anyhow::Result;
use clap::Parser;
use keycalc::config::{self, Config};
use keycalc::shell::{Shell, render_display, run_keys};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keypad calculator for the terminal.
///
/// Type keys such as `3 + 4 * 2 =` and press Enter. `c` clears, `~` toggles
/// the sign, `%` divides by one hundred, `copy` copies the display and `quit`
/// exits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate these keys, print the display and exit
    #[arg(short, long)]
    keys: Option<String>,

    /// Group digits with thousand separators
    #[arg(short, long)]
    group_digits: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config.or_else(config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if args.group_digits {
        config.display.group_digits = true;
    }

    if let Some(keys) = args.keys {
        let response = run_keys(&keys)?;
        println!("{}", render_display(&response.display, &config.display));
        if let Some(err) = response.error {
            return Err(err.into());
        }
        return Ok(());
    }

    let stdin = io::stdin();
    Shell::new(config, stdin.lock(), io::stdout()).run()
}
