//! Review finder engine: catalog search, executor gateway and review files.
mod engine;
mod filename;
mod gateway;
mod search;
mod store;
mod types;

pub use engine::{Engine, EngineConfig};
pub use filename::{extractor_review_filename, normalize_title, review_filename};
pub use gateway::{ExecutorSettings, ProcessGateway, ReviewGateway};
pub use search::{MovieSearch, TmdbClient, TmdbSettings, NO_SYNOPSIS};
pub use store::ReviewStore;
pub use types::{ExecutorError, SearchError, StoreError};
