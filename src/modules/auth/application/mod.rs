pub mod domain;
pub mod guards;
pub mod ports;
pub mod use_cases;
