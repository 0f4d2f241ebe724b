//! Page content of the routed pages.

mod about;
mod home;

pub use about::about;
pub use home::home;
