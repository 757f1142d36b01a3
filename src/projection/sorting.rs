use chrono::NaiveDate;
use log::warn;

use crate::domain::{LiveEvent, Player, RegisteredPlayer, TournamentPointsRecord};
use crate::formatting::parse_slash_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Return a reordered copy of `items`, sorted by `key`.
///
/// The sort is stable in both directions: items with equal keys keep their
/// relative input order. The input slice is never modified, and `key` is
/// called exactly once per item.
pub fn project<T, K, F>(items: &[T], mut key: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, &T)> = items.iter().map(|item| (key(item), item)).collect();
    match order {
        SortOrder::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        // b against a, so equal keys keep input order
        SortOrder::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

pub fn rankings_by_points(players: &[Player]) -> Vec<Player> {
    project(players, |p| p.points, SortOrder::Desc)
}

pub fn registered_players_by_points(players: &[RegisteredPlayer]) -> Vec<RegisteredPlayer> {
    project(players, |p| p.points, SortOrder::Desc)
}

/// Most recent first; events without a usable date go last
pub fn past_events_by_date(events: &[LiveEvent]) -> Vec<LiveEvent> {
    project(events, |e| date_key("live event", e.id, e.date.as_deref()), SortOrder::Desc)
}

/// Most recent first; records without a usable date go last
pub fn points_history_by_date(records: &[TournamentPointsRecord]) -> Vec<TournamentPointsRecord> {
    project(records, |r| date_key("points record", r.id, Some(&r.date)), SortOrder::Desc)
}

/// `None` (the smallest key) for a missing or unreadable date
fn date_key(kind: &str, id: i64, raw: Option<&str>) -> Option<NaiveDate> {
    let Some(raw) = raw else {
        warn!("{kind} {id} has no date, sorting it last");
        return None;
    };
    parse_slash_date(raw)
        .inspect_err(|e| warn!("{kind} {id}: {e}, sorting it last"))
        .ok()
}
