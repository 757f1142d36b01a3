use log::info;

use crate::domain::HomeFeed;
use crate::store::{load_or_default, RecordSource};
use crate::views::HomeView;

/// Upcoming tournaments and recent results, shown in source order
pub struct HomeScreen {
    feed: HomeFeed,
}

impl HomeScreen {
    pub async fn load<S: RecordSource>(source: &S) -> Self {
        let feed = load_or_default("home", source.home_feed()).await;
        info!(
            "Home: {} upcoming tournaments, {} recent results",
            feed.upcoming.len(),
            feed.recent_results.len()
        );
        Self { feed }
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            upcoming: self.feed.upcoming.clone(),
            recent_results: self.feed.recent_results.clone(),
        }
    }
}
