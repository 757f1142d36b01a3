use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "TOURNAMENT_HUB_DATA_DIR";

#[derive(Debug, Clone, Default)]
pub struct DataSettings {
    /// Directory of JSON record files; the embedded mock data is used when unset
    pub data_dir: Option<PathBuf>,
}

impl DataSettings {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LiveSettings {
    /// Required prefix of a stream URL (case-sensitive)
    pub url_prefix: &'static str,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self { url_prefix: "http" }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub data: DataSettings,
    pub live: LiveSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::from_env(),
            live: LiveSettings::default(),
        }
    }

    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.data.data_dir = dir;
        }
        self
    }
}
