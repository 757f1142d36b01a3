use chrono::NaiveDate;
use log::{debug, info};

use super::draft::Draft;
use super::errors::LiveSessionError;
use crate::config::LiveSettings;
use crate::domain::{LiveEvent, LiveEventCollection};
use crate::formatting::format_numeric;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Drafting(Draft),
}

/// Go-live form: drafts a stream and commits it to the live events
#[derive(Debug, Clone)]
pub struct LiveSessionBuilder {
    state: SessionState,
    tournaments: Vec<String>,
    url_prefix: &'static str,
}

impl LiveSessionBuilder {
    pub fn new(settings: &LiveSettings) -> Self {
        Self {
            state: SessionState::Idle,
            tournaments: Vec::new(),
            url_prefix: settings.url_prefix,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            SessionState::Drafting(draft) => Some(draft),
            SessionState::Idle => None,
        }
    }

    pub fn is_drafting(&self) -> bool {
        self.draft().is_some()
    }

    /// Open the form with the first offered tournament selected.
    ///
    /// An open draft is kept as is.
    pub fn start(&mut self, tournaments: &[String]) {
        if self.is_drafting() {
            debug!("Live draft already open");
            return;
        }
        self.tournaments = tournaments.to_vec();
        let tournament = tournaments.first().cloned().unwrap_or_default();
        debug!("Opening live draft for {:?}", tournament);
        self.state = SessionState::Drafting(Draft::new(tournament));
    }

    pub fn select_tournament(&mut self, name: &str) -> Result<(), LiveSessionError> {
        let offered = self.tournaments.iter().any(|t| t == name);
        let draft = self.draft_mut()?;
        if !offered {
            return Err(LiveSessionError::UnknownTournament(name.to_string()));
        }
        draft.tournament = name.to_string();
        Ok(())
    }

    pub fn set_player1(&mut self, name: &str) -> Result<(), LiveSessionError> {
        self.draft_mut()?.player1 = name.to_string();
        Ok(())
    }

    pub fn set_player2(&mut self, name: &str) -> Result<(), LiveSessionError> {
        self.draft_mut()?.player2 = name.to_string();
        Ok(())
    }

    pub fn set_url(&mut self, url: &str) -> Result<(), LiveSessionError> {
        self.draft_mut()?.url = url.to_string();
        Ok(())
    }

    /// Whether the save action should be enabled
    pub fn is_valid(&self) -> bool {
        self.draft().is_some_and(Draft::is_complete)
    }

    /// Validate the draft and append it to `live`.
    ///
    /// On failure the draft stays open and untouched so it can be corrected.
    pub fn submit(
        &mut self,
        live: &mut LiveEventCollection,
        today: NaiveDate,
    ) -> Result<LiveEvent, LiveSessionError> {
        let draft = self.draft().ok_or(LiveSessionError::NotDrafting)?;

        if !draft.url.starts_with(self.url_prefix) {
            return Err(LiveSessionError::InvalidUrl);
        }
        if !draft.has_both_players() {
            return Err(LiveSessionError::MissingPlayerNames);
        }

        let id = live.next_id().ok_or(LiveSessionError::IdsExhausted)?;
        let event = LiveEvent {
            id,
            tournament: draft.tournament.clone(),
            match_name: draft.match_name(),
            url: draft.url.clone(),
            date: Some(format_numeric(today)),
        };
        live.push(event.clone());
        self.state = SessionState::Idle;

        info!("Went live: {} ({})", event.match_name, event.tournament);
        Ok(event)
    }

    /// Discard the draft without validation
    pub fn cancel(&mut self) {
        if self.is_drafting() {
            debug!("Discarding live draft");
        }
        self.state = SessionState::Idle;
    }

    fn draft_mut(&mut self) -> Result<&mut Draft, LiveSessionError> {
        match &mut self.state {
            SessionState::Drafting(draft) => Ok(draft),
            SessionState::Idle => Err(LiveSessionError::NotDrafting),
        }
    }
}

impl Default for LiveSessionBuilder {
    fn default() -> Self {
        Self::new(&LiveSettings::default())
    }
}
