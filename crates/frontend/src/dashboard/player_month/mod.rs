pub mod api;
mod form;
mod view;

pub use view::PlayerMonthPage;
