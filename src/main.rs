mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tetrosnake: {e}");
            return ExitCode::from(2);
        }
    };
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tetrosnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config.tuning).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Parsed command-line arguments
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Cli {
    /// Path to a configuration file given on the command line
    config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.  Returns `Ok(None)` if the program
    /// should exit without running the game (e.g., after printing the help
    /// message).
    fn from_env() -> Result<Option<Cli>, lexopt::Error> {
        let mut cli = Cli::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    cli.config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    println!("Usage: tetrosnake [-c|--config <PATH>]");
                    println!();
                    println!("Steer the snake into falling tetrominoes to eat them before");
                    println!("they pile up into terrain.");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <PATH>  Read configuration from <PATH>");
                    println!("  -h, --help           Show this help message and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!(concat!("tetrosnake ", env!("CARGO_PKG_VERSION")));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(cli))
    }

    /// Load configuration from the file given on the command line or, if no
    /// file was given, from the default path.  A missing file is only an
    /// error when its path was supplied explicitly.
    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(path) = self.config.as_deref() {
            Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        } else {
            match Config::default_path() {
                Ok(path) => {
                    Config::load(&path, true).context("failed to load default configuration")
                }
                // No config directory on this system; run with defaults.
                Err(_) => Ok(Config::default()),
            }
        }
    }
}
