use anyhow::Result;
use serde::Deserialize;

use super::source::{find_details, RecordSource};
use crate::domain::{HomeFeed, LiveData, ProfileData, RankingsData, Tournament, TournamentDetails};
use crate::errors::with_parse_context;

const HOME_JSON: &str = include_str!("../../data/home.json");
const RANKINGS_JSON: &str = include_str!("../../data/rankings.json");
const TOURNAMENTS_JSON: &str = include_str!("../../data/tournaments.json");
const TOURNAMENT_DETAILS_JSON: &str = include_str!("../../data/tournament_details.json");
const LIVE_JSON: &str = include_str!("../../data/live.json");
const PROFILE_JSON: &str = include_str!("../../data/profile.json");

/// Mock records bundled into the binary, standing in for a future API
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }

    fn parse<T: for<'de> Deserialize<'de>>(json: &str, name: &str) -> Result<T> {
        with_parse_context(serde_json::from_str(json), &format!("bundled {} data", name))
    }
}

impl RecordSource for MockSource {
    async fn home_feed(&self) -> Result<HomeFeed> {
        Self::parse(HOME_JSON, "home")
    }

    async fn rankings(&self) -> Result<RankingsData> {
        Self::parse(RANKINGS_JSON, "rankings")
    }

    async fn tournaments(&self) -> Result<Vec<Tournament>> {
        Self::parse(TOURNAMENTS_JSON, "tournaments")
    }

    async fn tournament_details(&self, id: i64) -> Result<TournamentDetails> {
        let all = Self::parse(TOURNAMENT_DETAILS_JSON, "tournament details")?;
        find_details(all, id)
    }

    async fn live(&self) -> Result<LiveData> {
        Self::parse(LIVE_JSON, "live")
    }

    async fn profile(&self) -> Result<ProfileData> {
        Self::parse(PROFILE_JSON, "profile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_data_parses() {
        let source = MockSource::new();

        assert!(!source.home_feed().await.unwrap().upcoming.is_empty());
        assert!(!source.rankings().await.unwrap().players.is_empty());
        assert_eq!(source.tournaments().await.unwrap().len(), 5);
        assert!(!source.live().await.unwrap().tournaments.is_empty());
        assert!(!source.profile().await.unwrap().user.tournament_points.is_empty());
    }

    #[tokio::test]
    async fn test_tournament_details_by_id() {
        let source = MockSource::new();

        let details = source.tournament_details(1).await.unwrap();
        assert_eq!(details.name, "Tournament A");

        assert!(source.tournament_details(999).await.is_err());
    }

    #[tokio::test]
    async fn test_ranking_ids_are_unique() {
        let players = MockSource::new().rankings().await.unwrap().players;

        let mut ids: Vec<i64> = players.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), players.len());
    }
}
