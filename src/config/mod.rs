pub mod settings;

pub use settings::{resolve_database_path, AppConfig, DatabaseSettings, SearchSettings};
