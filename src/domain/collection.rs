use log::warn;

use super::models::LiveEvent;

/// Live events of the current session, in insertion order
///
/// Identifiers come from a counter rather than the current length, so one
/// collection never hands out the same identifier twice.
#[derive(Debug, Clone)]
pub struct LiveEventCollection {
    events: Vec<LiveEvent>,
    /// `None` once `i64::MAX` has been used
    next_id: Option<i64>,
}

impl LiveEventCollection {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: Some(1),
        }
    }

    pub fn from_events(events: Vec<LiveEvent>) -> Self {
        let next_id = match events.iter().map(|e| e.id).max() {
            Some(max) => max.max(0).checked_add(1),
            None => Some(1),
        };
        if next_id.is_none() {
            warn!("Live event ids exhausted, no new events can be added");
        }
        Self { events, next_id }
    }

    /// Reserve the identifier for the next appended event, `None` when exhausted
    pub fn next_id(&mut self) -> Option<i64> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    pub fn push(&mut self, event: LiveEvent) {
        if let Some(next) = self.next_id {
            if event.id >= next {
                self.next_id = event.id.checked_add(1);
            }
        }
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn as_slice(&self) -> &[LiveEvent] {
        &self.events
    }
}

impl Default for LiveEventCollection {
    fn default() -> Self {
        Self::new()
    }
}
