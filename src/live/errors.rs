use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiveSessionError {
    #[error("Please enter a valid Facebook Live URL.")]
    InvalidUrl,
    #[error("Please enter both player names.")]
    MissingPlayerNames,
    #[error("{0:?} is not one of the offered tournaments")]
    UnknownTournament(String),
    #[error("no live draft is open")]
    NotDrafting,
    #[error("No more live events can be added in this session.")]
    IdsExhausted,
}

impl LiveSessionError {
    /// Heading of the notification shown for this error
    pub fn title(&self) -> &'static str {
        match self {
            LiveSessionError::InvalidUrl => "Invalid URL",
            LiveSessionError::MissingPlayerNames => "Missing Info",
            LiveSessionError::UnknownTournament(_) => "Unknown Tournament",
            LiveSessionError::NotDrafting | LiveSessionError::IdsExhausted => "Go Live",
        }
    }
}
