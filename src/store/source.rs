use anyhow::Result;

use crate::domain::{HomeFeed, LiveData, ProfileData, RankingsData, Tournament, TournamentDetails};

/// Where each screen's backing collection comes from.
///
/// Every method is async even though the bundled sources resolve immediately,
/// so a network-backed source can be dropped in without touching callers.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn home_feed(&self) -> Result<HomeFeed>;

    async fn rankings(&self) -> Result<RankingsData>;

    async fn tournaments(&self) -> Result<Vec<Tournament>>;

    async fn tournament_details(&self, id: i64) -> Result<TournamentDetails>;

    async fn live(&self) -> Result<LiveData>;

    async fn profile(&self) -> Result<ProfileData>;
}

pub(crate) fn find_details(all: Vec<TournamentDetails>, id: i64) -> Result<TournamentDetails> {
    all.into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| anyhow::anyhow!("No details found for tournament {}", id))
}
