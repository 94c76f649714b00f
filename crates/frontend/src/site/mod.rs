pub mod api;
pub mod contact;
pub mod home;
pub mod programs;

pub use contact::ContactPage;
pub use home::HomePage;
pub use programs::ProgramsPage;
