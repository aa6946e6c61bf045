mod list_users;
mod login_user;
mod promote_user;
mod register_user;

pub use list_users::{__path_list_users_handler, list_users_handler, UserSummary};
pub use login_user::{
    __path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo,
};
pub use promote_user::{__path_promote_user_handler, promote_user_handler, PromoteResponse};
pub use register_user::{
    __path_register_user_handler, register_user_handler, RegisterRequestDto, RegisteredUser,
};
