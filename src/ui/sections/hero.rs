use leptos::html;
use leptos::prelude::*;

use crate::core::Glyph;
use crate::core::animation::scroll_bounce;
use crate::core::content::{CONTACT_HREF, SERVICES_HREF};
use crate::core::scroll::parallax_offset;
use crate::ui::backdrop::AnimatedBackdrop;
use crate::ui::icon::Icon;
use crate::ui::motion::use_timeline;
use crate::ui::scroll::use_scroll_context;

/// Landing banner with a parallax background and two calls to action
#[component]
pub fn HeroSection() -> impl IntoView {
    let scroll = use_scroll_context();
    let background_offset = Memo::new(move |_| parallax_offset(scroll.position.get()));

    let indicator = NodeRef::<html::Div>::new();
    use_timeline(indicator, scroll_bounce());

    view! {
        <section class="hero-section">
            <div
                class="hero-gradient-bg"
                style:transform=move || format!("translateY({:.2}px)", background_offset.get())
            ></div>
            <div class="hero-overlay"></div>
            <div class="hero-noise"></div>

            <AnimatedBackdrop />

            <div class="hero-content">
                <div class="hero-badge enter-pop">
                    <span class="badge-dot"></span>
                    "GLOBAL TRADING & LOGISTICS"
                </div>

                <h1 class="hero-title enter-rise delay-200">
                    "El camino al"
                    <span class="hero-title-accent">"Amanecer Global"</span>
                </h1>

                <p class="hero-subtitle enter-rise delay-400">
                    "Uniendo la riqueza natural de México con la tecnología del futuro."
                </p>

                <div class="hero-buttons enter-rise delay-600">
                    <a href=SERVICES_HREF class="btn-primary">
                        "Nuestras Divisiones"
                        <Icon glyph=Glyph::ChevronDown size=18 />
                    </a>
                    <a href=CONTACT_HREF class="btn-secondary">
                        "Hablemos de Negocios"
                    </a>
                </div>
            </div>

            // Scroll indicator
            <div node_ref=indicator class="scroll-line" aria-hidden="true">
                <div class="scroll-line-inner"></div>
            </div>
        </section>
    }
}
