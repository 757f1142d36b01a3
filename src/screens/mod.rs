pub mod home;
pub mod live;
pub mod profile;
pub mod rankings;
pub mod tournaments;

pub use home::HomeScreen;
pub use live::LiveScreen;
pub use profile::ProfileScreen;
pub use rankings::RankingsScreen;
pub use tournaments::{JoinError, TournamentDetailsScreen, TournamentsScreen};
