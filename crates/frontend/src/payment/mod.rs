pub mod api;
pub mod card;
pub mod outcome;
pub mod redirect;
pub mod stripe;
pub mod transfer;
pub mod ui;

pub use outcome::PaymentOutcome;
