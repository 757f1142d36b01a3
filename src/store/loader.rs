use anyhow::Result;
use log::{debug, error};
use std::future::Future;

use super::files::FileSource;
use super::mock::MockSource;
use super::source::RecordSource;
use crate::config::DataSettings;
use crate::domain::{HomeFeed, LiveData, ProfileData, RankingsData, Tournament, TournamentDetails};
use crate::errors::load_context;

/// Await a screen's initial load, falling back to the empty default.
///
/// Failures are logged and swallowed; the screen renders whatever default it
/// started with.
pub async fn load_or_default<T, F>(collection: &str, load: F) -> T
where
    T: Default,
    F: Future<Output = Result<T>>,
{
    match load.await {
        Ok(records) => {
            debug!("Loaded {} data", collection);
            records
        }
        Err(e) => {
            error!("{}: {:#}", load_context(collection), e);
            T::default()
        }
    }
}

/// Source selected from configuration
#[derive(Debug, Clone)]
pub enum DataSource {
    Mock(MockSource),
    Files(FileSource),
}

impl DataSource {
    pub fn from_settings(settings: &DataSettings) -> Self {
        match &settings.data_dir {
            Some(dir) => {
                debug!("Using record files from {}", dir.display());
                DataSource::Files(FileSource::new(dir))
            }
            None => DataSource::Mock(MockSource::new()),
        }
    }
}

impl RecordSource for DataSource {
    async fn home_feed(&self) -> Result<HomeFeed> {
        match self {
            DataSource::Mock(s) => s.home_feed().await,
            DataSource::Files(s) => s.home_feed().await,
        }
    }

    async fn rankings(&self) -> Result<RankingsData> {
        match self {
            DataSource::Mock(s) => s.rankings().await,
            DataSource::Files(s) => s.rankings().await,
        }
    }

    async fn tournaments(&self) -> Result<Vec<Tournament>> {
        match self {
            DataSource::Mock(s) => s.tournaments().await,
            DataSource::Files(s) => s.tournaments().await,
        }
    }

    async fn tournament_details(&self, id: i64) -> Result<TournamentDetails> {
        match self {
            DataSource::Mock(s) => s.tournament_details(id).await,
            DataSource::Files(s) => s.tournament_details(id).await,
        }
    }

    async fn live(&self) -> Result<LiveData> {
        match self {
            DataSource::Mock(s) => s.live().await,
            DataSource::Files(s) => s.live().await,
        }
    }

    async fn profile(&self) -> Result<ProfileData> {
        match self {
            DataSource::Mock(s) => s.profile().await,
            DataSource::Files(s) => s.profile().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_failure_falls_back_to_default() {
        let data: RankingsData =
            load_or_default("rankings", async { Err(anyhow::anyhow!("connection refused")) }).await;

        assert!(data.players.is_empty());
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let source = MockSource::new();
        let data = load_or_default("live", source.live()).await;

        assert!(!data.past_events.is_empty());
    }

    #[test]
    fn test_source_selection() {
        let mock = DataSource::from_settings(&DataSettings::default());
        assert!(matches!(mock, DataSource::Mock(_)));

        let settings = DataSettings {
            data_dir: Some(PathBuf::from("/srv/records")),
        };
        match DataSource::from_settings(&settings) {
            DataSource::Files(files) => assert_eq!(files.data_dir(), PathBuf::from("/srv/records")),
            other => panic!("expected file source, got {other:?}"),
        }
    }
}
