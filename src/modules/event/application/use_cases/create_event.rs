use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Identity;
use crate::modules::event::application::domain::{entities::Event, schedule};
use crate::modules::event::application::ports::outgoing::EventRepository;

/// Raw form fields as the presentation layer hands them over.
#[derive(Debug, Clone)]
pub struct NewEventInput {
    pub title: String,
    pub description: String,
    pub event_datetime: String,
    pub location: String,
    pub want_public: bool,
}

#[derive(Debug, Clone)]
pub enum CreateEventError {
    EmptyTitle,
    EmptyDateTime,
    InvalidDateTime,
    RepositoryError(String),
}

impl std::fmt::Display for CreateEventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateEventError::EmptyTitle => write!(f, "Title is required"),
            CreateEventError::EmptyDateTime => write!(f, "Event date/time is required"),
            CreateEventError::InvalidDateTime => {
                write!(f, "Invalid date/time format")
            }
            CreateEventError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateEventError {}

#[async_trait]
pub trait ICreateEventUseCase: Send + Sync {
    async fn execute(&self, actor: &Identity, input: NewEventInput)
        -> Result<Event, CreateEventError>;
}

#[derive(Clone)]
pub struct CreateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn optional(field: String) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[async_trait]
impl<R> ICreateEventUseCase for CreateEventUseCase<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Identity,
        input: NewEventInput,
    ) -> Result<Event, CreateEventError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(CreateEventError::EmptyTitle);
        }

        let raw_datetime = input.event_datetime.trim();
        if raw_datetime.is_empty() {
            return Err(CreateEventError::EmptyDateTime);
        }

        let parsed =
            schedule::parse_input(raw_datetime).ok_or(CreateEventError::InvalidDateTime)?;

        // Only admins may publish. A non-admin asking for public visibility
        // is downgraded to private, not rejected.
        let visible_to_all = input.want_public && actor.role.is_admin();

        let event = Event {
            id: Uuid::new_v4(),
            title,
            description: optional(input.description),
            event_datetime: schedule::to_canonical(parsed),
            location: optional(input.location),
            created_by: Some(actor.user_id),
            visible_to_all,
            created_at: chrono::Utc::now(),
        };

        self.repository
            .insert_event(event)
            .await
            .map_err(|e| CreateEventError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::event::application::ports::outgoing::EventRepositoryError;

    struct MockEventRepository;

    #[async_trait]
    impl EventRepository for MockEventRepository {
        async fn insert_event(&self, event: Event) -> Result<Event, EventRepositoryError> {
            Ok(event)
        }

        async fn delete_event(&self, _event_id: Uuid) -> Result<(), EventRepositoryError> {
            unimplemented!("not used in CreateEventUseCase tests")
        }
    }

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: "caller".to_string(),
            role,
        }
    }

    fn input(datetime: &str, want_public: bool) -> NewEventInput {
        NewEventInput {
            title: "Team sync".to_string(),
            description: "weekly".to_string(),
            event_datetime: datetime.to_string(),
            location: "".to_string(),
            want_public,
        }
    }

    #[tokio::test]
    async fn non_admin_public_request_is_silently_downgraded() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::User);

        let event = use_case
            .execute(&actor, input("2024-03-01T09:30", true))
            .await
            .unwrap();

        assert!(!event.visible_to_all);
        assert_eq!(event.created_by, Some(actor.user_id));
    }

    #[tokio::test]
    async fn admin_public_request_is_honored() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::Admin);

        let event = use_case
            .execute(&actor, input("2024-03-01T09:30", true))
            .await
            .unwrap();

        assert!(event.visible_to_all);
    }

    #[tokio::test]
    async fn admin_private_request_stays_private() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::Admin);

        let event = use_case
            .execute(&actor, input("2024-03-01T09:30", false))
            .await
            .unwrap();

        assert!(!event.visible_to_all);
    }

    #[tokio::test]
    async fn datetime_is_normalized_to_canonical_form() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::User);

        let event = use_case
            .execute(&actor, input("2024-03-01T09:30", false))
            .await
            .unwrap();

        assert_eq!(event.event_datetime, "2024-03-01 09:30:00");
    }

    #[tokio::test]
    async fn space_separated_input_with_seconds_is_accepted() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::User);

        let event = use_case
            .execute(&actor, input("2024-03-01 09:30:00", false))
            .await
            .unwrap();

        assert_eq!(event.event_datetime, "2024-03-01 09:30:00");
    }

    #[tokio::test]
    async fn unsupported_format_is_a_validation_error() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::User);

        let result = use_case
            .execute(&actor, input("03/01/2024 9:30am", false))
            .await;

        assert!(matches!(result, Err(CreateEventError::InvalidDateTime)));
    }

    #[tokio::test]
    async fn empty_title_and_datetime_are_rejected() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::User);

        let mut no_title = input("2024-03-01T09:30", false);
        no_title.title = "  ".to_string();
        assert!(matches!(
            use_case.execute(&actor, no_title).await,
            Err(CreateEventError::EmptyTitle)
        ));

        let no_dt = input("", false);
        assert!(matches!(
            use_case.execute(&actor, no_dt).await,
            Err(CreateEventError::EmptyDateTime)
        ));
    }

    #[tokio::test]
    async fn blank_optional_fields_become_none() {
        let use_case = CreateEventUseCase::new(MockEventRepository);
        let actor = identity(Role::User);

        let mut raw = input("2024-03-01T09:30", false);
        raw.description = "   ".to_string();
        raw.location = " HQ ".to_string();

        let event = use_case.execute(&actor, raw).await.unwrap();
        assert_eq!(event.description, None);
        assert_eq!(event.location, Some("HQ".to_string()));
    }
}
