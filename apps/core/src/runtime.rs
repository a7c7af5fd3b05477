use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::contract::{CoreRequest, QueryRequest};
use crate::core_service::{CoreService, ServiceError};
use crate::logging;
use crate::transport;

const USAGE: &str = "usage: ctrl-core [--config PATH] [--db PATH] [--query TEXT] [--serve]";

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
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

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub one_shot_query: Option<String>,
    pub serve: bool,
}

pub fn parse_cli_args(args: &[String]) -> Result<RuntimeOptions, String> {
    let mut options = RuntimeOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("--config requires a path\n{USAGE}"))?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--db" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("--db requires a path\n{USAGE}"))?;
                options.database_path = Some(PathBuf::from(value));
            }
            "--query" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("--query requires text\n{USAGE}"))?;
                options.one_shot_query = Some(value.clone());
            }
            "--serve" => options.serve = true,
            other => return Err(format!("unknown argument: {other}\n{USAGE}")),
        }
    }

    Ok(options)
}

pub fn run_with_options(options: RuntimeOptions) -> Result<(), RuntimeError> {
    if let Err(error) = logging::init() {
        eprintln!("[ctrl-core] file logging unavailable: {error}");
    }
    if std::env::var_os("CTRL_CORE_DEBUG").is_some() {
        logging::enable_debug();
    }

    let mut config = config::load(options.config_path.as_deref())?;
    if let Some(database_path) = options.database_path {
        config.database_path = database_path;
    }
    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[ctrl-core] wrote default config to {}",
            config.config_path.display()
        );
    }
    println!(
        "[ctrl-core] startup config_path={} database_path={}",
        config.config_path.display(),
        config.database_path.display(),
    );

    let clipboard_enabled = config.clipboard.enabled;
    let mut service = CoreService::new(config)?.with_runtime_providers();
    let indexed = service.reload_data();
    println!("[ctrl-core] startup indexed_records={indexed}");
    let file_names = service.rebuild_file_index();
    println!("[ctrl-core] startup indexed_file_names={file_names}");
    if clipboard_enabled {
        service.set_clipboard_monitoring(true);
    }

    if let Some(query) = options.one_shot_query {
        let response = transport::handle_request(&mut service, CoreRequest::Query(QueryRequest { query }));
        println!(
            "{}",
            serde_json::to_string(&response).expect("transport response should serialize")
        );
        return Ok(());
    }

    if options.serve {
        println!("[ctrl-core] serving line-delimited JSON on stdin/stdout");
        return serve_stdin(&mut service).map_err(RuntimeError::Io);
    }

    println!("[ctrl-core] startup checks complete; pass --serve to keep running");
    Ok(())
}

/// One request per line in, one response per line out. EOF on stdin is a
/// clean shutdown.
fn serve_stdin(service: &mut CoreService) -> Result<(), std::io::Error> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let response = transport::handle_json(service, trimmed);
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    Ok(())
}
