//! Scroll-triggered reveal wrappers
//!
//! Provides:
//! - `use_reveal` hook backed by an `IntersectionObserver`
//! - `RevealOnScroll` fade/slide-in wrapper
//! - `StaggeredReveal` container and `StaggerItem` children that enter in
//!   child order once the container is visible

use leptos::html;
use leptos::prelude::*;

use crate::core::RevealState;
use crate::core::reveal::{stagger_delay, transition_style};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Observer watching one element until its first intersection
#[cfg(feature = "hydrate")]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl RevealObserver {
    /// Start observing `element`.
    ///
    /// `on_report` receives whether the element intersects the viewport and
    /// returns `true` once nothing more needs observing.
    fn observe(
        element: &web_sys::Element,
        mut on_report: impl FnMut(bool) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if on_report(intersecting) {
                    observer.disconnect();
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(crate::core::reveal::ROOT_MARGIN);

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Track whether `target` has entered the viewport.
///
/// The returned signal flips to `true` on the first intersection and stays
/// there for the lifetime of the calling component. The observer is torn down
/// with the component.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let state = RwSignal::new(RevealState::Hidden);

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<RevealObserver>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if state.get_untracked().is_revealed() {
                return;
            }

            let report = move |intersecting: bool| {
                let mut current = state.get_untracked();
                let transitioned = current.observe(intersecting);
                if transitioned {
                    state.set(current);
                }
                current.is_revealed()
            };

            match RevealObserver::observe(&element, report) {
                Ok(watcher) => observer.set_value(Some(watcher)),
                Err(err) => {
                    leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
                    state.set(RevealState::Revealed);
                }
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|watcher| watcher.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }

    Signal::derive(move || state.get().is_revealed())
}

/// Fade and slide children up the first time they scroll into view
#[component]
pub fn RevealOnScroll(
    /// Seconds to wait after entering the viewport
    #[prop(default = 0.0)]
    delay: f64,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            class:revealed=move || revealed.get()
            style=transition_style(delay)
        >
            {children()}
        </div>
    }
}

/// Visibility of the nearest `StaggeredReveal` container
#[derive(Clone, Copy)]
pub struct StaggerContext {
    pub visible: Signal<bool>,
}

/// Container whose `StaggerItem` children enter one after another
#[component]
pub fn StaggeredReveal(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_reveal(node);
    provide_context(StaggerContext { visible });

    view! {
        <div
            node_ref=node
            class=format!("stagger {class}")
            class:revealed=move || visible.get()
        >
            {children()}
        </div>
    }
}

/// Visibility signal and timing style for the child at `index`.
///
/// Outside a `StaggeredReveal` the item is always visible.
fn use_stagger_item(index: usize) -> (Signal<bool>, String) {
    let visible = use_context::<StaggerContext>()
        .map(|ctx| ctx.visible)
        .unwrap_or_else(|| Signal::stored(true));
    (visible, transition_style(stagger_delay(index)))
}

/// Generic child of a `StaggeredReveal`
#[component]
pub fn StaggerItem(
    /// Position among the container's children
    index: usize,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let (visible, style) = use_stagger_item(index);

    view! {
        <div
            class=format!("stagger-item {class}")
            class:revealed=move || visible.get()
            style=style
        >
            {children()}
        </div>
    }
}
