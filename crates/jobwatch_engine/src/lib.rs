//! JobWatch engine: backend API access, fetch execution and local storage.
mod api;
mod runner;
mod storage;
mod types;

pub use api::{ApiClient, DataSource};
pub use runner::QueryRunner;
pub use storage::{LocalStorage, StorageError, STORAGE_FILENAME};
pub use types::{ClientSettings, EngineEvent, NetworkError, DEFAULT_API_URL};
