//! Page content and presentational state, independent of the DOM

pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod seo;

pub use animation::{Easing, Frame, Repeat, Timeline};
pub use contact::{ContactField, ContactForm};
pub use content::{Glyph, NavLink, ServiceOffering, Shape, StatEntry};
pub use nav::MenuState;
pub use reveal::RevealState;
pub use scroll::ScrollPosition;
