use async_trait::async_trait;
use tracing::warn;

use crate::modules::auth::application::domain::entities::Identity;
use crate::modules::event::application::domain::{entities::Event, schedule};
use crate::modules::event::application::ports::outgoing::EventQuery;

/// The caller's event view: everything they may read plus the subset
/// starting within the notification window.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventListing {
    pub events: Vec<Event>,
    pub notifications: Vec<Event>,
    pub notify_hours: i64,
}

#[async_trait]
pub trait IListEventsUseCase: Send + Sync {
    async fn execute(&self, actor: &Identity) -> EventListing;
}

#[derive(Clone)]
pub struct ListEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListEventsUseCase for ListEventsUseCase<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, actor: &Identity) -> EventListing {
        // Availability over historical correctness: a failing read degrades
        // to an empty listing instead of a 500.
        let mut events = match self.query.list_for_user(actor.user_id).await {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "Event listing query failed; returning empty listing");
                Vec::new()
            }
        };

        // The adapter already filters in SQL; re-applying the domain
        // predicate keeps the invariant independent of any one adapter.
        events.retain(|event| event.is_visible_to(actor.user_id));

        // SQL orders by the raw text column, which mis-sorts legacy
        // `T`-separated rows against canonical rows on the same day.
        schedule::sort_chronological(&mut events);

        let notifications = schedule::upcoming_soon(
            &events,
            chrono::Utc::now().naive_utc(),
            schedule::NOTIFY_WINDOW_HOURS,
        );

        EventListing {
            events,
            notifications,
            notify_hours: schedule::NOTIFY_WINDOW_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::event::application::ports::outgoing::EventQueryError;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    struct MockEventQuery {
        result: Result<Vec<Event>, EventQueryError>,
    }

    #[async_trait]
    impl EventQuery for MockEventQuery {
        async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<Event>, EventQueryError> {
            self.result.clone()
        }

        async fn list_all(&self) -> Result<Vec<Event>, EventQueryError> {
            unimplemented!("not used in ListEventsUseCase tests")
        }
    }

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: "caller".to_string(),
            role: Role::User,
        }
    }

    fn event(datetime: &str, created_by: Option<Uuid>, visible_to_all: bool) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "e".to_string(),
            description: None,
            event_datetime: datetime.to_string(),
            location: None,
            created_by,
            visible_to_all,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn foreign_private_events_are_dropped_even_if_the_store_leaks_them() {
        let actor = identity();
        let mine = event("2030-01-01 10:00:00", Some(actor.user_id), false);
        let public = event("2030-01-02 10:00:00", Some(Uuid::new_v4()), true);
        let leaked = event("2030-01-03 10:00:00", Some(Uuid::new_v4()), false);

        let use_case = ListEventsUseCase::new(MockEventQuery {
            result: Ok(vec![mine.clone(), public.clone(), leaked]),
        });

        let listing = use_case.execute(&actor).await;
        assert_eq!(listing.events.len(), 2);
        assert!(listing.events.iter().any(|e| e.id == mine.id));
        assert!(listing.events.iter().any(|e| e.id == public.id));
    }

    #[tokio::test]
    async fn unparseable_datetime_stays_listed_but_never_notifies() {
        let actor = identity();
        let broken = event("not a datetime", Some(actor.user_id), false);

        let use_case = ListEventsUseCase::new(MockEventQuery {
            result: Ok(vec![broken.clone()]),
        });

        let listing = use_case.execute(&actor).await;
        assert_eq!(listing.events.len(), 1);
        assert!(listing.notifications.is_empty());
    }

    #[tokio::test]
    async fn events_inside_the_window_are_flagged() {
        let actor = identity();
        let soon = Utc::now().naive_utc() + Duration::hours(2);
        let later = Utc::now().naive_utc() + Duration::hours(48);

        let soon_event = event(
            &soon.format("%Y-%m-%d %H:%M:%S").to_string(),
            Some(actor.user_id),
            false,
        );
        let later_event = event(
            &later.format("%Y-%m-%d %H:%M:%S").to_string(),
            Some(actor.user_id),
            false,
        );

        let use_case = ListEventsUseCase::new(MockEventQuery {
            result: Ok(vec![soon_event.clone(), later_event]),
        });

        let listing = use_case.execute(&actor).await;
        assert_eq!(listing.events.len(), 2);
        assert_eq!(listing.notifications.len(), 1);
        assert_eq!(listing.notifications[0].id, soon_event.id);
        assert_eq!(listing.notify_hours, 24);
    }

    #[tokio::test]
    async fn legacy_rows_sort_by_parsed_time_not_text() {
        let actor = identity();
        // Text order from the store: ' ' sorts before 'T', so the 09:00
        // canonical row arrives ahead of the earlier legacy 08:00 row.
        let canonical = event("2030-01-01 09:00:00", Some(actor.user_id), false);
        let legacy = event("2030-01-01T08:00", Some(actor.user_id), false);

        let use_case = ListEventsUseCase::new(MockEventQuery {
            result: Ok(vec![canonical.clone(), legacy.clone()]),
        });

        let listing = use_case.execute(&actor).await;
        assert_eq!(listing.events[0].id, legacy.id);
        assert_eq!(listing.events[1].id, canonical.id);
    }

    #[tokio::test]
    async fn query_failure_degrades_to_empty_listing() {
        let use_case = ListEventsUseCase::new(MockEventQuery {
            result: Err(EventQueryError::DatabaseError("relation missing".to_string())),
        });

        let listing = use_case.execute(&identity()).await;
        assert!(listing.events.is_empty());
        assert!(listing.notifications.is_empty());
    }
}
