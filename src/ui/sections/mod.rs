//! Page sections, top to bottom

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod services;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use navbar::{BrandMark, NavigationBar};
pub use services::{ServiceCard, ServicesSection};
