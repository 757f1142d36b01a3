use serde::Serialize;

use crate::domain::{RecentResult, UpcomingTournament};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub upcoming: Vec<UpcomingTournament>,
    pub recent_results: Vec<RecentResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub rank: usize,
    pub player_id: i64,
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCard {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub can_join: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPlayerRow {
    pub rank: usize,
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetailView {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub registered_players: Vec<RegisteredPlayerRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCard {
    pub id: i64,
    pub tournament: String,
    #[serde(rename = "match")]
    pub match_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastEventRow {
    pub id: i64,
    pub tournament: String,
    #[serde(rename = "match")]
    pub match_name: String,
    pub url: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveView {
    pub current_live: Vec<LiveCard>,
    pub past_events: Vec<PastEventRow>,
    pub tournaments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsRow {
    pub tournament: String,
    pub points: i64,
    pub rank: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub total_points: i64,
    pub overall_rank: i64,
    pub tournament_points: Vec<PointsRow>,
}
