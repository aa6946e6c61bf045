mod response;

pub use response::{custom_json_config, ApiError, ApiFailure, ApiResponse};
