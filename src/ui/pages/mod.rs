//! Routed pages

mod landing;
mod not_found;

pub use landing::{LandingPage, PageContent};
pub use not_found::NotFoundPage;
