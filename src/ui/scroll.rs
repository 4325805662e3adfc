//! Shared page scroll offset
//!
//! One window scroll listener feeds a single signal; every component that
//! reacts to scrolling reads it through [`use_scroll_context`] instead of
//! registering a listener of its own.

use leptos::prelude::*;

use crate::core::ScrollPosition;

/// Read-only view of the page scroll offset
#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// Latest sampled vertical offset
    pub position: ReadSignal<ScrollPosition>,
}

/// Current window scroll offset, or the top of the page when unavailable
#[cfg(feature = "hydrate")]
fn read_scroll_position() -> ScrollPosition {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .map(ScrollPosition::from)
        .unwrap_or_default()
}

/// Provide scroll context to the application
pub fn provide_scroll_context() -> ScrollContext {
    let (position, set_position) = signal(ScrollPosition::TOP);

    #[cfg(feature = "hydrate")]
    {
        // Pick up a restored scroll offset once the page has hydrated
        Effect::new(move |_| set_position.set(read_scroll_position()));

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            set_position.set(read_scroll_position());
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_position;
    }

    let ctx = ScrollContext { position };
    provide_context(ctx);
    ctx
}

/// Use scroll context from anywhere in the component tree
pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext should be provided")
}
