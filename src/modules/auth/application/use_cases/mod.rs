pub mod list_users;
pub mod login_user;
pub mod promote_user;
pub mod register_user;
pub mod seed_admin;
