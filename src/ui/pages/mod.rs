//! Application pages
//!
//! - Home page
//! - Student editor page (create and edit)
//! - Not found page

mod home;
mod not_found;
mod student;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use student::StudentPage;
