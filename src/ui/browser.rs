//! Thin wrappers over browser navigation
//!
//! Both helpers are no-ops during server rendering. Failures are logged and
//! otherwise ignored: the page has no way to recover from them.

/// Smoothly scroll the element with `id` into view
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        match element {
            Some(element) => {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => leptos::logging::warn!("scroll target #{id} not found"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Hand a `mailto:` URI to the visitor's mail client
///
/// There is no success signal: whether a mail client opens is up to the host.
pub fn open_mail_client(uri: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("no window to open the mail client from");
            return;
        };
        if let Err(err) = window.location().set_href(uri) {
            leptos::logging::warn!("failed to open mail client: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uri;
    }
}
