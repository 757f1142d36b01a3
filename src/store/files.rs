use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::source::{find_details, RecordSource};
use crate::domain::{HomeFeed, LiveData, ProfileData, RankingsData, Tournament, TournamentDetails};

/// JSON record files read from a directory, one file per collection
#[derive(Debug, Clone)]
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn build_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }

    async fn read_json<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Result<T> {
        let path = self.build_path(name);
        debug!("Reading records from {}", path.display());

        let json = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })
    }
}

impl RecordSource for FileSource {
    async fn home_feed(&self) -> Result<HomeFeed> {
        self.read_json("home").await
    }

    async fn rankings(&self) -> Result<RankingsData> {
        self.read_json("rankings").await
    }

    async fn tournaments(&self) -> Result<Vec<Tournament>> {
        self.read_json("tournaments").await
    }

    async fn tournament_details(&self, id: i64) -> Result<TournamentDetails> {
        let all = self.read_json("tournament_details").await?;
        find_details(all, id)
    }

    async fn live(&self) -> Result<LiveData> {
        self.read_json("live").await
    }

    async fn profile(&self) -> Result<ProfileData> {
        self.read_json("profile").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_collection_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rankings.json"),
            r#"{"players": [{"id": 1, "name": "Ann", "points": 12}]}"#,
        )
        .unwrap();

        let source = FileSource::new(dir.path());
        let data = source.rankings().await.unwrap();

        assert_eq!(data.players.len(), 1);
        assert_eq!(data.players[0].name, "Ann");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());

        let err = source.live().await.unwrap_err();
        assert!(format!("{err:#}").contains("live.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("profile.json"), "{ not json").unwrap();

        let source = FileSource::new(dir.path());
        assert!(source.profile().await.is_err());
    }
}
