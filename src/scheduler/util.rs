use crate::model::{Event, EventId};

pub(super) fn find_event_index(events: &[Event], id: EventId) -> Option<usize> {
    events.iter().position(|e| e.id == id)
}
