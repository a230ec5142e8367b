pub mod availability;
pub mod event_type;
pub mod user;
