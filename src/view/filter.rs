//! Search filtering for the meeting gallery

use crate::types::Meeting;

/// Whether a topic matches a free-text search term.
///
/// Both sides are lower-cased; an empty term matches every topic.
pub fn topic_matches(topic: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    topic.to_lowercase().contains(&term.to_lowercase())
}

/// Meetings whose topic contains the search term, in their original order,
/// each paired with its index in `meetings`.
pub fn filter_meetings<'a>(meetings: &'a [Meeting], term: &str) -> Vec<(usize, &'a Meeting)> {
    meetings
        .iter()
        .enumerate()
        .filter(|(_, meeting)| topic_matches(&meeting.topic, term))
        .collect()
}
