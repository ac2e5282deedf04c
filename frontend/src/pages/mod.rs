//! Routed pages.
//!
//! Static pages read their copy from [`crate::content`]; each tool page in
//! [`tools`] owns an [`IntakeHandle`](crate::components::IntakeHandle) and a
//! [`ProcessRunner`](crate::services::ProcessRunner) for its lifetime.

mod about;
mod faq;
mod home;
mod not_found;
pub mod tools;

pub use about::AboutPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use not_found::NotFound;
