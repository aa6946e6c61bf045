use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::use_cases::{
    list_users::IListUsersUseCase, login_user::ILoginUserUseCase,
    promote_user::IPromoteUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::modules::event::application::use_cases::{
    create_event::ICreateEventUseCase, delete_event::IDeleteEventUseCase,
    list_all_events::IListAllEventsUseCase, list_events::IListEventsUseCase,
};
use crate::tests::support::auth_helper::test_token_provider;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    promote_user: Arc<dyn IPromoteUserUseCase + Send + Sync>,
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    create_event: Arc<dyn ICreateEventUseCase + Send + Sync>,
    list_events: Arc<dyn IListEventsUseCase + Send + Sync>,
    list_all_events: Arc<dyn IListAllEventsUseCase + Send + Sync>,
    delete_event: Arc<dyn IDeleteEventUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            promote_user: Arc::new(StubPromoteUserUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            create_event: Arc::new(StubCreateEventUseCase),
            list_events: Arc::new(StubListEventsUseCase),
            list_all_events: Arc::new(StubListAllEventsUseCase),
            delete_event: Arc::new(StubDeleteEventUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_promote_user(
        mut self,
        uc: impl IPromoteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promote_user = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_create_event(
        mut self,
        uc: impl ICreateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_event = Arc::new(uc);
        self
    }

    pub fn with_list_events(mut self, uc: impl IListEventsUseCase + Send + Sync + 'static) -> Self {
        self.list_events = Arc::new(uc);
        self
    }

    pub fn with_list_all_events(
        mut self,
        uc: impl IListAllEventsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_all_events = Arc::new(uc);
        self
    }

    pub fn with_delete_event(
        mut self,
        uc: impl IDeleteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_event = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            promote_user_use_case: self.promote_user,
            list_users_use_case: self.list_users,
            create_event_use_case: self.create_event,
            list_events_use_case: self.list_events,
            list_all_events_use_case: self.list_all_events,
            delete_event_use_case: self.delete_event,
        })
    }

    /// State plus a real JWT provider, for routes behind the guards.
    pub fn build_with_tokens(
        self,
    ) -> (
        web::Data<AppState>,
        web::Data<Arc<dyn TokenProvider + Send + Sync>>,
    ) {
        (self.build(), test_token_provider())
    }
}
