pub mod gallery;
pub mod matches;
pub mod messages;
pub mod payments;
pub mod player_month;
pub mod registration;
