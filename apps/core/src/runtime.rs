use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::inventory::CommandInventory;
use crate::provider::{ProviderError, SearchProvider, SearchProviderPort};
use crate::{logging, transport};

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Provider(ProviderError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Provider(error) => write!(f, "provider error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ProviderError> for RuntimeError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// One query from the command line, names printed to stdout.
    Search(Vec<String>),
    /// One JSON request per stdin line, one JSON response per stdout line.
    Serve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub mode: RunMode,
}

pub fn parse_cli_args(args: &[String]) -> Result<RunOptions, String> {
    let mut config_path = None;
    let mut mode = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                config_path = Some(PathBuf::from(value));
            }
            "--serve" => mode = Some(RunMode::Serve),
            "--search" => {
                let terms: Vec<String> = iter.by_ref().cloned().collect();
                mode = Some(RunMode::Search(terms));
            }
            "--help" => {
                return Err("usage: vmsearch-core [--config <path>] (--serve | --search <terms>...)"
                    .to_string())
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(RunOptions {
        config_path,
        mode: mode.ok_or("one of --serve or --search is required")?,
    })
}

pub fn run_with_options(options: RunOptions) -> Result<(), RuntimeError> {
    if let Err(error) = logging::init() {
        eprintln!("[vmsearch-core] logging unavailable: {error}");
    }

    let config = config::load(options.config_path.as_deref())?;
    let source = CommandInventory::new(config.list_command.clone());
    let mut provider = SearchProvider::new(config, source);

    match options.mode {
        RunMode::Search(terms) => {
            let ids = provider.initial_search(&terms, None)?;
            for meta in provider.resolve_metas(&ids) {
                println!("{}\t{}", meta.id, meta.name);
            }
            Ok(())
        }
        RunMode::Serve => serve(&mut provider),
    }
}

fn serve(provider: &mut dyn SearchProviderPort) -> Result<(), RuntimeError> {
    logging::info("serving requests on stdin");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = transport::handle_json(provider, &line);
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }

    Ok(())
}
