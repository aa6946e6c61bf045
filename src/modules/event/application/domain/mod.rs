pub mod entities;
pub mod schedule;
