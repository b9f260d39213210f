//! State CLI: inspect and change the persisted theme and accent.
//!
//! Operates on the same JSON state file an embedding application would
//! hand to [`FileStorage`], so `duotone theme set dark` is equivalent to
//! the user flipping the in-app toggle.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use duotone::{
    AccentController, ColorMode, FileStorage, HexColor, NullSurface, ThemeController,
    DEFAULT_ACCENT,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// State file to operate on (defaults to the per-user config location).
    #[arg(long)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect or change the theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Inspect or change the accent color.
    Accent {
        #[command(subcommand)]
        action: AccentAction,
    },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    /// Print the effective theme.
    Get,
    /// Store an explicit preference (`light` or `dark`).
    Set { mode: ColorMode },
    /// Flip the effective theme and store the result.
    Toggle,
    /// Forget the stored preference and follow the OS again.
    Clear,
}

#[derive(Debug, Subcommand)]
enum AccentAction {
    /// Print the accent color.
    Get,
    /// Store an accent color (`#rgb` or `#rrggbb`).
    Set { color: HexColor },
    /// Forget the stored accent.
    Clear,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = match args.state {
        Some(path) => path,
        None => FileStorage::default_path()
            .context("no per-user config directory on this platform; pass --state")?,
    };
    let storage = Rc::new(FileStorage::open(path));

    match args.command {
        Command::Theme { action } => {
            let themes = ThemeController::new(Rc::clone(&storage), NullSurface);
            themes.init();
            match action {
                ThemeAction::Get => {}
                ThemeAction::Set { mode } => themes.set(mode),
                ThemeAction::Toggle => themes.toggle(),
                ThemeAction::Clear => themes.clear_preference(),
            }
            println!("{}", themes.effective());
        }
        Command::Accent { action } => {
            let accents = AccentController::new(Rc::clone(&storage), NullSurface);
            accents.init();
            match action {
                AccentAction::Get => {}
                AccentAction::Set { color } => accents.apply(color, true),
                AccentAction::Clear => accents.clear(),
            }
            println!("{}", accents.current().unwrap_or(DEFAULT_ACCENT));
        }
    }

    Ok(())
}
