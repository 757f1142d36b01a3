use chrono::NaiveDate;
use log::{info, warn};

use crate::config::LiveSettings;
use crate::domain::{LiveEvent, LiveEventCollection};
use crate::live::{LiveSessionBuilder, LiveSessionError};
use crate::projection::past_events_by_date;
use crate::store::{load_or_default, RecordSource};
use crate::views::{display_date, LiveCard, LiveView, PastEventRow};

/// Current streams, past streams and the go-live form
pub struct LiveScreen {
    current: LiveEventCollection,
    past: Vec<LiveEvent>,
    tournaments: Vec<String>,
    builder: LiveSessionBuilder,
}

impl LiveScreen {
    pub async fn load<S: RecordSource>(source: &S, settings: &LiveSettings) -> Self {
        let data = load_or_default("live", source.live()).await;
        let past = past_events_by_date(&data.past_events);
        info!(
            "Live: {} current, {} past events",
            data.current_live.len(),
            past.len()
        );

        Self {
            current: LiveEventCollection::from_events(data.current_live),
            past,
            tournaments: data.tournaments,
            builder: LiveSessionBuilder::new(settings),
        }
    }

    pub fn current(&self) -> &LiveEventCollection {
        &self.current
    }

    /// Past events, most recent first
    pub fn past(&self) -> &[LiveEvent] {
        &self.past
    }

    pub fn builder(&self) -> &LiveSessionBuilder {
        &self.builder
    }

    pub fn start_draft(&mut self) {
        self.builder.start(&self.tournaments);
    }

    pub fn builder_mut(&mut self) -> &mut LiveSessionBuilder {
        &mut self.builder
    }

    pub fn submit_draft(&mut self, today: NaiveDate) -> Result<LiveEvent, LiveSessionError> {
        self.builder.submit(&mut self.current, today).inspect_err(|e| {
            warn!("{}: {}", e.title(), e);
        })
    }

    pub fn cancel_draft(&mut self) {
        self.builder.cancel();
    }

    pub fn view(&self) -> LiveView {
        LiveView {
            current_live: self
                .current
                .as_slice()
                .iter()
                .map(|e| LiveCard {
                    id: e.id,
                    tournament: e.tournament.clone(),
                    match_name: e.match_name.clone(),
                    url: e.url.clone(),
                })
                .collect(),
            past_events: self
                .past
                .iter()
                .map(|e| PastEventRow {
                    id: e.id,
                    tournament: e.tournament.clone(),
                    match_name: e.match_name.clone(),
                    url: e.url.clone(),
                    date: e.date.as_deref().map(display_date),
                })
                .collect(),
            tournaments: self.tournaments.clone(),
        }
    }
}
