pub mod api;
mod state;
mod view;

pub use view::RegistrantsPage;
