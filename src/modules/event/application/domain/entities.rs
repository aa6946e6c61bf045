use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use super::schedule;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Canonical "YYYY-MM-DD HH:MM:SS" for rows written by this service;
    /// legacy rows may carry other shapes and are parsed leniently.
    pub event_datetime: String,
    pub location: Option<String>,
    pub created_by: Option<Uuid>,
    pub visible_to_all: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// The visibility filter: an event is readable when it is public or the
    /// caller created it. Evaluated on every non-admin read path.
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        self.visible_to_all || self.created_by == Some(user_id)
    }

    /// Lenient read-side parse. `None` means the stored value is unusable
    /// for time-based reasoning; the event itself stays listable.
    pub fn parsed_datetime(&self) -> Option<NaiveDateTime> {
        schedule::parse_lenient(&self.event_datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(created_by: Option<Uuid>, visible_to_all: bool) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "standup".to_string(),
            description: None,
            event_datetime: "2024-03-01 09:30:00".to_string(),
            location: None,
            created_by,
            visible_to_all,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn public_events_are_visible_to_everyone() {
        let e = event(Some(Uuid::new_v4()), true);
        assert!(e.is_visible_to(Uuid::new_v4()));
    }

    #[test]
    fn private_events_are_visible_to_owner_only() {
        let owner = Uuid::new_v4();
        let e = event(Some(owner), false);
        assert!(e.is_visible_to(owner));
        assert!(!e.is_visible_to(Uuid::new_v4()));
    }

    #[test]
    fn orphaned_private_event_is_visible_to_nobody() {
        let e = event(None, false);
        assert!(!e.is_visible_to(Uuid::new_v4()));
    }
}
