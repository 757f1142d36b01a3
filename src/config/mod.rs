pub mod settings;

pub use settings::{AppConfig, DataSettings, LiveSettings, DATA_DIR_ENV};
