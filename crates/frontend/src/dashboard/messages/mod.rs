pub mod api;
mod view;

pub use view::MessagesPage;
