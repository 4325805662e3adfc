pub mod backdrop;
pub mod browser;
pub mod form;
pub mod icon;
pub mod motion;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod sections;

#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use backdrop::{AnimatedBackdrop, BackdropVariant};
pub use icon::Icon;
pub use reveal::{RevealOnScroll, StaggerItem, StaggeredReveal};
pub use scroll::{ScrollContext, provide_scroll_context, use_scroll_context};
