//! Per-frame animation driver
//!
//! [`use_timeline`] samples a [`Timeline`] on every `requestAnimationFrame`
//! tick and writes the result to an element's inline `transform`, and to its
//! `opacity` when the timeline has an opacity track. The frame
//! loop belongs to the calling component and is cancelled when the component
//! is cleaned up.

use leptos::html;
use leptos::prelude::*;

use crate::core::Timeline;

#[cfg(feature = "hydrate")]
mod frame_loop {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    type FrameClosure = Closure<dyn FnMut(f64)>;

    /// A `requestAnimationFrame` loop reporting seconds since its first frame.
    ///
    /// The loop re-registers itself every frame until the callback returns
    /// `false`, [`stop`](Self::stop) is called or the loop is dropped.
    pub struct FrameLoop {
        inner: Rc<FrameInner>,
    }

    struct FrameInner {
        closure: RefCell<Option<FrameClosure>>,
        running: Cell<bool>,
        raf_id: Cell<i32>,
        started_at: Cell<Option<f64>>,
    }

    impl FrameLoop {
        /// Start the loop; `None` without a window
        pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let inner = Rc::new(FrameInner {
                closure: RefCell::new(None),
                running: Cell::new(true),
                raf_id: Cell::new(0),
                started_at: Cell::new(None),
            });

            // Weak so the closure stored in `inner` does not keep `inner` alive
            let weak = Rc::downgrade(&inner);
            let closure = FrameClosure::new(move |timestamp_ms: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.running.get() {
                    return;
                }

                let started_at = inner.started_at.get().unwrap_or(timestamp_ms);
                inner.started_at.set(Some(started_at));

                if !on_frame((timestamp_ms - started_at) / 1000.0) {
                    inner.running.set(false);
                    return;
                }

                let next = web_sys::window().and_then(|window| {
                    let closure = inner.closure.borrow();
                    closure.as_ref().and_then(|closure| {
                        window
                            .request_animation_frame(closure.as_ref().unchecked_ref())
                            .ok()
                    })
                });
                match next {
                    Some(id) => inner.raf_id.set(id),
                    None => inner.running.set(false),
                }
            });

            let id = window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .ok()?;
            inner.raf_id.set(id);
            *inner.closure.borrow_mut() = Some(closure);

            Some(Self { inner })
        }

        /// Cancel the pending frame
        pub fn stop(&self) {
            if !self.inner.running.replace(false) {
                return;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(self.inner.raf_id.get());
            }
        }
    }

    impl Drop for FrameLoop {
        fn drop(&mut self) {
            self.stop();
            self.inner.closure.borrow_mut().take();
        }
    }
}

/// Run `timeline` on the element behind `target` for as long as the calling
/// component lives.
pub fn use_timeline(target: NodeRef<html::Div>, timeline: Timeline) {
    #[cfg(feature = "hydrate")]
    {
        use frame_loop::FrameLoop;

        let driver = StoredValue::new_local(None::<FrameLoop>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            let style = element.style();
            let timeline = timeline.clone();
            let fades = timeline.animates_opacity();

            let frame_loop = FrameLoop::start(move |elapsed| {
                let frame = timeline.sample(elapsed);
                let _ = style.set_property("transform", &frame.to_transform());
                if fades {
                    let _ = style.set_property("opacity", &frame.to_opacity());
                }
                !timeline.is_finished(elapsed)
            });
            if frame_loop.is_none() {
                leptos::logging::warn!("requestAnimationFrame unavailable, animation skipped");
            }
            driver.set_value(frame_loop);
        });

        on_cleanup(move || {
            driver.try_update_value(|frame_loop| frame_loop.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, timeline);
    }
}
