//! Read-only views over loaded events and participations.

use hashbrown::{HashMap, HashSet};

use crate::{
    record::{Event, Participation},
    types::Timestamp,
};

/// Event name to the distinct user names taking part in it.
pub type ParticipantIndex = HashMap<String, HashSet<String>>;

/// Events strictly after `now`, soonest first.
pub fn upcoming_events(events: &[Event], now: Timestamp) -> Vec<&Event> {
    let mut out: Vec<&Event> = events.iter().filter(|ev| ev.date_time > now).collect();
    out.sort_by_key(|ev| ev.date_time);
    out
}

/// Events strictly before `now`, most recent first.
pub fn past_events(events: &[Event], now: Timestamp) -> Vec<&Event> {
    let mut out: Vec<&Event> = events.iter().filter(|ev| ev.date_time < now).collect();
    out.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    out
}

/// Groups participations by event name. Repeated pairs collapse.
pub fn participations_by_event<'a, I>(participations: I) -> ParticipantIndex
where
    I: IntoIterator<Item = &'a Participation>,
{
    let mut index = ParticipantIndex::new();
    for p in participations {
        index
            .entry(p.event_name.clone())
            .or_default()
            .insert(p.user_name.clone());
    }
    index
}
