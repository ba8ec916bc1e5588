use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    ExecutorSettings, MovieSearch, ProcessGateway, ReviewGateway, ReviewStore, SearchError,
    TmdbClient, TmdbSettings,
};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub tmdb: TmdbSettings,
    pub executor: ExecutorSettings,
    pub reviews_dir: PathBuf,
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tmdb: TmdbSettings::default(),
            executor: ExecutorSettings::default(),
            reviews_dir: PathBuf::from("reviews"),
            max_results: 10,
        }
    }
}

/// The collaborators a session talks to, bundled behind their traits.
#[derive(Clone)]
pub struct Engine {
    pub search: Arc<dyn MovieSearch>,
    pub gateway: Arc<dyn ReviewGateway>,
    pub store: ReviewStore,
    pub max_results: usize,
}

impl Engine {
    /// Builds the production engine: TMDB over HTTP plus the process gateway.
    pub fn from_config(config: EngineConfig) -> Result<Self, SearchError> {
        let search = TmdbClient::new(config.tmdb)?;
        Ok(Self {
            search: Arc::new(search),
            gateway: Arc::new(ProcessGateway::new(config.executor)),
            store: ReviewStore::new(config.reviews_dir),
            max_results: config.max_results,
        })
    }
}
