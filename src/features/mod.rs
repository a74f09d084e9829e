pub mod action_items;
pub mod auth;
pub mod meetings;
pub mod rate_limits;
pub mod users;
