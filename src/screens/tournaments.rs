use log::info;
use thiserror::Error;

use crate::domain::{Tournament, TournamentDetails};
use crate::projection::{numbered, registered_players_by_points};
use crate::store::{load_or_default, RecordSource};
use crate::views::{RegisteredPlayerRow, TournamentCard, TournamentDetailView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("no tournament with id {0}")]
    UnknownTournament(i64),
    #[error("{0} is not open for sign-up")]
    NotOpen(String),
}

pub struct TournamentsScreen {
    tournaments: Vec<Tournament>,
}

impl TournamentsScreen {
    pub async fn load<S: RecordSource>(source: &S) -> Self {
        let tournaments = load_or_default("tournaments", source.tournaments()).await;
        info!("Tournaments: {} listed", tournaments.len());
        Self { tournaments }
    }

    pub fn view(&self) -> Vec<TournamentCard> {
        self.tournaments
            .iter()
            .map(|t| TournamentCard {
                id: t.id,
                name: t.name.clone(),
                date: t.date.clone(),
                location: t.location.clone(),
                can_join: t.allow_join,
            })
            .collect()
    }

    /// Notice shown for the join action
    pub fn join(&self, id: i64) -> Result<String, JoinError> {
        let tournament = self
            .tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(JoinError::UnknownTournament(id))?;

        if !tournament.allow_join {
            return Err(JoinError::NotOpen(tournament.name.clone()));
        }
        Ok(format!("Sign up for {} coming soon!", tournament.name))
    }
}

/// Registered players of one tournament, ranked by points
pub struct TournamentDetailsScreen {
    details: Option<TournamentDetails>,
}

impl TournamentDetailsScreen {
    pub async fn load<S: RecordSource>(source: &S, id: i64) -> Self {
        let load = async { source.tournament_details(id).await.map(Some) };
        let details = load_or_default("tournament details", load)
            .await
            .map(|mut details: TournamentDetails| {
                details.registered_players = registered_players_by_points(&details.registered_players);
                info!("{}: {} registered players", details.name, details.registered_players.len());
                details
            });
        Self { details }
    }

    /// `None` while nothing could be loaded
    pub fn view(&self) -> Option<TournamentDetailView> {
        let details = self.details.as_ref()?;
        let registered_players = numbered(&details.registered_players)
            .into_iter()
            .map(|row| RegisteredPlayerRow {
                rank: row.position,
                name: row.item.name.clone(),
                points: row.item.points,
            })
            .collect();

        Some(TournamentDetailView {
            id: details.id,
            name: details.name.clone(),
            date: details.date.clone(),
            location: details.location.clone(),
            registered_players,
        })
    }
}
