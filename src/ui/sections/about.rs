use leptos::html;
use leptos::prelude::*;

use crate::core::content::{BRAND_NAME, CONTACT_HREF, STATS, anchors};
use crate::core::reveal::{stat_delay, transition_style};
use crate::core::{Glyph, StatEntry};
use crate::ui::backdrop::{AnimatedBackdrop, BackdropVariant};
use crate::ui::icon::Icon;
use crate::ui::reveal::{RevealOnScroll, use_reveal};

/// Company narrative and headline figures
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=anchors::ABOUT class="about-section">
            <div class="about-gradient"></div>
            <AnimatedBackdrop variant=BackdropVariant::About />

            <div class="container about-container">
                <div class="about-text">
                    <RevealOnScroll>
                        <div class="about-label">
                            <div class="label-line"></div>
                            <span>"Nuestra Esencia"</span>
                        </div>
                        <h2 class="about-title">
                            "Visión sin fronteras."
                            <span class="about-title-muted">"Raíces profundas."</span>
                        </h2>
                        <p class="about-description">
                            {format!(
                                "En {BRAND_NAME}, entendemos el amanecer como una oportunidad constante. \
                                 Integramos la potencia industrial de México con los estándares globales más exigentes."
                            )}
                        </p>
                        <p class="about-description">
                            "Operamos en la intersección de la logística tradicional y la inteligencia \
                             artificial, creando valor sostenible que perdura."
                        </p>
                        <a href=CONTACT_HREF class="about-link">
                            "Conoce al equipo"
                            <Icon glyph=Glyph::ArrowRight size=16 />
                        </a>
                    </RevealOnScroll>
                </div>

                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| view! { <StatCard index=index stat=*stat /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Stat card with its own viewport trigger
#[component]
fn StatCard(index: usize, stat: StatEntry) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);

    view! {
        <div
            node_ref=node
            class="stat-card reveal reveal-short"
            class:revealed=move || revealed.get()
            style=transition_style(stat_delay(index))
        >
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
