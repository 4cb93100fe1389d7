pub mod account;
pub mod admin;
pub mod attendance;
pub mod dashboard;
pub mod highlight;
pub mod schedule;
pub mod student;
