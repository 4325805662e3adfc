//! Top navigation bar
//!
//! Switches to a compact style once the page is scrolled and carries a
//! collapsible menu for narrow screens.

use std::time::Duration;

use leptos::prelude::AnimatedShow;
use leptos::prelude::*;

use crate::core::Glyph;
use crate::core::content::{BRAND_NAME, CONTACT_HREF, NAV_LINKS};
use crate::core::nav::{self, MenuState};
use crate::ui::icon::Icon;
use crate::ui::scroll::use_scroll_context;

/// Length of the mobile menu collapse transition
const MENU_TRANSITION: Duration = Duration::from_millis(300);

#[component]
pub fn NavigationBar() -> impl IntoView {
    let scroll = use_scroll_context();
    let scrolled = Memo::new(move |_| nav::is_scrolled(scroll.position.get().offset()));

    let menu = RwSignal::new(MenuState::default());
    let menu_open = Signal::derive(move || menu.get().is_open());
    let close_menu =
        move |_: leptos::ev::MouseEvent| menu.update(|state| *state = state.link_activated());

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="navbar-container">
                <a href="#" class="navbar-logo enter-slide">
                    <div class="logo-icon"></div>
                    <BrandMark class="logo-text" />
                </a>

                // Desktop links
                <div class="navbar-links">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            view! {
                                <a
                                    href=link.href
                                    class="nav-link enter-drop"
                                    style=format!("animation-delay: {:.1}s;", i as f64 * 0.1)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=CONTACT_HREF class="nav-cta enter-pop">
                        "Contactar"
                    </a>
                </div>

                <button
                    class="mobile-toggle"
                    on:click=move |_| menu.update(|state| *state = state.toggled())
                    aria-label=move || menu.get().aria_label()
                    aria-expanded=move || menu_open.get().to_string()
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon glyph=Glyph::Close size=24 /> }
                        } else {
                            view! { <Icon glyph=Glyph::Menu size=24 /> }
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <AnimatedShow
                when=menu_open
                show_class="mobile-menu-enter"
                hide_class="mobile-menu-exit"
                hide_delay=MENU_TRANSITION
            >
                <div class="mobile-menu">
                    <div class="mobile-menu-inner">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="mobile-link" on:click=close_menu>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a href=CONTACT_HREF class="mobile-cta" on:click=close_menu>
                            "Contactar Ahora →"
                        </a>
                    </div>
                </div>
            </AnimatedShow>
        </nav>
    }
}

/// Company name with the second word highlighted
#[component]
pub fn BrandMark(#[prop(default = "brand")] class: &'static str) -> impl IntoView {
    let (first, rest) = BRAND_NAME.split_once(' ').unwrap_or((BRAND_NAME, ""));

    view! {
        <div class=class>
            {first} " " <span>{rest}</span>
        </div>
    }
}
