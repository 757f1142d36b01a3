/// Fields of a live stream not yet committed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub tournament: String,
    pub player1: String,
    pub player2: String,
    pub url: String,
}

impl Draft {
    pub fn new(tournament: String) -> Self {
        Self {
            tournament,
            ..Self::default()
        }
    }

    /// All text fields filled in, ignoring surrounding whitespace
    pub fn is_complete(&self) -> bool {
        self.has_both_players() && !self.url.trim().is_empty()
    }

    pub fn has_both_players(&self) -> bool {
        !self.player1.trim().is_empty() && !self.player2.trim().is_empty()
    }

    pub fn match_name(&self) -> String {
        format!("{} vs {}", self.player1, self.player2)
    }
}
