use log::info;

use crate::domain::Player;
use crate::projection::{numbered, rankings_by_points};
use crate::store::{load_or_default, RecordSource};
use crate::views::RankingRow;

pub struct RankingsScreen {
    players: Vec<Player>,
}

impl RankingsScreen {
    pub async fn load<S: RecordSource>(source: &S) -> Self {
        let data = load_or_default("rankings", source.rankings()).await;
        let players = rankings_by_points(&data.players);
        info!("Rankings: {} players", players.len());
        Self { players }
    }

    /// Players by points, highest first
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn view(&self) -> Vec<RankingRow> {
        numbered(&self.players)
            .into_iter()
            .map(|row| RankingRow {
                rank: row.position,
                player_id: row.item.id,
                name: row.item.name.clone(),
                points: row.item.points,
            })
            .collect()
    }
}
