pub mod numbering;
pub mod sorting;

pub use numbering::{numbered, Numbered};
pub use sorting::{
    past_events_by_date, points_history_by_date, project, rankings_by_points,
    registered_players_by_points, SortOrder,
};
