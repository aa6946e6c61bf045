use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Identity, User};
use crate::modules::auth::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::auth::application::use_cases::promote_user::{
    IPromoteUserUseCase, PromoteError,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError,
};
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::use_cases::create_event::{
    CreateEventError, ICreateEventUseCase, NewEventInput,
};
use crate::modules::event::application::use_cases::delete_event::{
    DeleteEventError, IDeleteEventUseCase,
};
use crate::modules::event::application::use_cases::list_all_events::{
    IListAllEventsUseCase, ListAllEventsError,
};
use crate::modules::event::application::use_cases::list_events::{
    EventListing, IListEventsUseCase,
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _username: String, _password: String) -> Result<User, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPromoteUserUseCase;

#[async_trait]
impl IPromoteUserUseCase for StubPromoteUserUseCase {
    async fn execute(&self, _target_username: &str) -> Result<(), PromoteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateEventUseCase;

#[async_trait]
impl ICreateEventUseCase for StubCreateEventUseCase {
    async fn execute(
        &self,
        _actor: &Identity,
        _input: NewEventInput,
    ) -> Result<Event, CreateEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListEventsUseCase;

#[async_trait]
impl IListEventsUseCase for StubListEventsUseCase {
    async fn execute(&self, _actor: &Identity) -> EventListing {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAllEventsUseCase;

#[async_trait]
impl IListAllEventsUseCase for StubListAllEventsUseCase {
    async fn execute(&self) -> Result<Vec<Event>, ListAllEventsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteEventUseCase;

#[async_trait]
impl IDeleteEventUseCase for StubDeleteEventUseCase {
    async fn execute(&self, _event_id: Uuid) -> Result<(), DeleteEventError> {
        unimplemented!("Not used in this test")
    }
}
