//! Services grid
//!
//! Three offering cards that enter one after another once the grid scrolls
//! into view. Every card leads to the contact form.

use leptos::prelude::*;

use crate::core::content::{SERVICES, anchors};
use crate::core::{Glyph, ServiceOffering};
use crate::ui::backdrop::{AnimatedBackdrop, BackdropVariant};
use crate::ui::browser::scroll_to_anchor;
use crate::ui::icon::Icon;
use crate::ui::reveal::{RevealOnScroll, StaggerItem, StaggeredReveal};

/// Section every service card leads to
pub const CARD_TARGET: &str = anchors::CONTACT;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=anchors::SERVICES class="services-section">
            <AnimatedBackdrop variant=BackdropVariant::Services />
            <div class="container">
                <RevealOnScroll>
                    <div class="section-header">
                        <span class="section-label">"Nuestros Servicios"</span>
                        <h2 class="section-title">"Pilares de Negocio"</h2>
                        <div class="section-line"></div>
                        <p class="section-subtitle">
                            "Infraestructura, comercio y tecnología convergen en nuestras soluciones."
                        </p>
                    </div>
                </RevealOnScroll>

                <StaggeredReveal class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, offering)| {
                            view! {
                                <StaggerItem index=index>
                                    <ServiceCard offering=*offering />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggeredReveal>
            </div>
        </section>
    }
}

/// Summary card for one offering
///
/// A click anywhere on the card scrolls to the contact form.
#[component]
pub fn ServiceCard(offering: ServiceOffering) -> impl IntoView {
    view! {
        <div
            class="service-card"
            role="link"
            tabindex="0"
            on:click=move |_| scroll_to_anchor(CARD_TARGET)
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    scroll_to_anchor(CARD_TARGET);
                }
            }
        >
            <div class="service-card-glow" style:background=offering.accent_color></div>
            <div class="service-card-pattern"></div>

            <div class="service-card-content">
                <div class="service-icon">
                    <Icon glyph=offering.glyph class="icon" size=28 />
                </div>

                <h3 class="service-title">{offering.title}</h3>
                <p class="service-description">{offering.description}</p>

                <div class="service-link">
                    "Explorar"
                    <Icon glyph=Glyph::ArrowRight size=14 />
                </div>
            </div>
        </div>
    }
}
