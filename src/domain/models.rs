use serde::{Deserialize, Serialize};

/// Tournament listed on the tournaments screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub allow_join: bool,
}

/// Player entry of the rankings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingsData {
    pub players: Vec<Player>,
}

/// Points earned by the profile user at a single tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentPointsRecord {
    pub id: i64,
    /// Denormalized, not a reference to a `Tournament`.
    pub tournament: String,
    pub points: i64,
    /// Display only, may disagree with the sort order.
    pub rank: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    pub id: i64,
    pub tournament: String,
    #[serde(rename = "match")]
    pub match_name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveData {
    pub current_live: Vec<LiveEvent>,
    pub past_events: Vec<LiveEvent>,
    /// Tournament names offered when going live
    pub tournaments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    pub tournament_points: Vec<TournamentPointsRecord>,
    /// Authoritative, never recomputed from `tournament_points`.
    pub total_points: i64,
    pub overall_rank: i64,
}

impl ProfileUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: ProfileUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredPlayer {
    pub name: String,
    #[serde(default)]
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetails {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub registered_players: Vec<RegisteredPlayer>,
}

// --- Home feed ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingTournament {
    pub id: i64,
    pub date: String,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentResult {
    pub tournament: String,
    pub champ: String,
    pub runner_up: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    pub upcoming: Vec<UpcomingTournament>,
    pub recent_results: Vec<RecentResult>,
}
