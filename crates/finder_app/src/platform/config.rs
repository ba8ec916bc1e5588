//! Command-line arguments and the optional RON settings file.
//!
//! Precedence: command line, then settings file, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use finder_engine::EngineConfig;
use finder_logging::finder_info;
use serde::Deserialize;

use super::logging::LogDestination;

/// Search a movie catalog and extract reviews of the chosen movie.
#[derive(Parser, Debug)]
#[command(name = "review-finder")]
#[command(about = "Search movies on TMDB and extract their reviews", long_about = None)]
pub struct Cli {
    /// TMDB API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// RON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Program that checks for and extracts reviews
    #[arg(long)]
    pub executor: Option<PathBuf>,

    /// Directory the extractor saves reviews into
    #[arg(long)]
    pub reviews_dir: Option<PathBuf>,

    /// Maximum number of search results to show
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log file used by the `file` and `both` destinations
    #[arg(long, default_value = "review_finder.log")]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Overrides read from the settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub tmdb_base_url: Option<String>,
    pub search_language: Option<String>,
    pub detail_language: Option<String>,
    pub search_timeout_secs: Option<u64>,
    pub detail_timeout_secs: Option<u64>,
    pub detail_concurrency: Option<usize>,
    pub synopsis_limit: Option<usize>,
    pub executor: Option<PathBuf>,
    pub check_timeout_secs: Option<u64>,
    pub extract_timeout_secs: Option<u64>,
    pub reviews_dir: Option<PathBuf>,
    pub max_results: Option<usize>,
}

pub fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let config = ron::from_str(&content)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    finder_info!("Loaded settings from {:?}", path);
    Ok(config)
}

pub fn resolve(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let file = match &cli.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    Ok(merge(cli, file))
}

fn merge(cli: &Cli, file: FileConfig) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.tmdb.api_key = cli.api_key.clone();

    if let Some(base_url) = file.tmdb_base_url {
        config.tmdb.base_url = base_url;
    }
    if let Some(language) = file.search_language {
        config.tmdb.search_language = language;
    }
    if let Some(language) = file.detail_language {
        config.tmdb.detail_language = language;
    }
    if let Some(secs) = file.search_timeout_secs {
        config.tmdb.search_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.detail_timeout_secs {
        config.tmdb.detail_timeout = Duration::from_secs(secs);
    }
    if let Some(concurrency) = file.detail_concurrency {
        config.tmdb.detail_concurrency = concurrency.max(1);
    }
    if let Some(limit) = file.synopsis_limit {
        config.tmdb.synopsis_limit = limit;
    }
    if let Some(secs) = file.check_timeout_secs {
        config.executor.check_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.extract_timeout_secs {
        config.executor.extract_timeout = Duration::from_secs(secs);
    }

    if let Some(program) = cli.executor.clone().or(file.executor) {
        config.executor.program = program;
    }
    if let Some(dir) = cli.reviews_dir.clone().or(file.reviews_dir) {
        config.reviews_dir = dir;
    }
    if let Some(max) = cli.max_results.or(file.max_results) {
        config.max_results = max.max(1);
    }
    config
}
