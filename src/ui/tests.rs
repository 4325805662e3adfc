//! Server-side rendering tests for the page components

use chrono::Datelike;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::core::content::{LEGAL_NAME, anchors};
use crate::ui::backdrop::{AnimatedBackdrop, BackdropVariant};
use crate::ui::reveal::{StaggerItem, StaggeredReveal};
use crate::ui::pages::PageContent;
use crate::ui::provide_scroll_context;
use crate::ui::sections::{ContactSection, FooterSection, NavigationBar, ServicesSection};

fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new_root(None);
    owner.with(|| {
        provide_scroll_context();
        view().to_html()
    })
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not rendered"))
}

// ============================================================================
// Page
// ============================================================================

#[test]
fn test_page_sections_render_in_order() {
    let html = render(|| view! { <PageContent /> });

    let order = [
        "<nav".to_string(),
        "hero-section".to_string(),
        format!("id=\"{}\"", anchors::SERVICES),
        format!("id=\"{}\"", anchors::ABOUT),
        format!("id=\"{}\"", anchors::CONTACT),
        "<footer".to_string(),
    ];
    let positions: Vec<usize> = order.iter().map(|needle| position(&html, needle)).collect();

    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "sections out of order: {positions:?}"
    );
}

#[test]
fn test_page_renders_each_section_once() {
    let html = render(|| view! { <PageContent /> });

    assert_eq!(html.matches("<nav").count(), 1);
    assert_eq!(html.matches("<main").count(), 1);
    assert_eq!(html.matches("<footer").count(), 1);
}

// ============================================================================
// Sections
// ============================================================================

#[test]
fn test_navbar_starts_unscrolled_with_menu_closed() {
    let html = render(|| view! { <NavigationBar /> });

    assert!(!html.contains("scrolled"));
    assert!(!html.contains("mobile-menu"));
    assert!(html.contains("aria-label=\"Abrir menú\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("href=\"#divisiones\""));
    assert!(html.contains("href=\"#nosotros\""));
}

#[test]
fn test_services_render_three_cards() {
    let html = render(|| view! { <ServicesSection /> });

    assert_eq!(html.matches("class=\"service-card\"").count(), 3);
    assert!(html.contains("Trading Global"));
    assert!(html.contains("data-glyph=\"cpu\""));
}

#[test]
fn test_service_cards_are_keyboard_links() {
    let html = render(|| view! { <ServicesSection /> });

    assert_eq!(html.matches("role=\"link\"").count(), 3);
    assert_eq!(html.matches("tabindex=\"0\"").count(), 3);
}

#[test]
fn test_contact_info_panel() {
    let html = render(|| view! { <ContactSection /> });

    assert!(html.contains("class=\"contact-fade-top\""));
    assert!(html.contains("¿Listo para iniciar un nuevo proyecto o expandir sus operaciones?"));
    assert!(html.contains("Nuestro equipo está listo para ayudar."));
    assert!(html.contains(">Email</span>"));
    assert!(html.contains("data-glyph=\"globe\""));
    assert!(html.contains("class=\"contact-decoration\""));
    assert!(!html.contains("Email Directo"));
}

#[test]
fn test_contact_form_fields() {
    let html = render(|| view! { <ContactSection /> });

    assert!(html.contains("type=\"email\""));
    assert!(html.contains("placeholder=\"nombre@empresa.com\""));
    assert!(html.contains("<textarea"));
    assert_eq!(html.matches("required").count(), 3);
    assert!(html.contains("karen@alborvia.com"));
}

#[test]
fn test_footer_shows_current_year() {
    let html = render(|| view! { <FooterSection /> });
    let year = chrono::Local::now().year();

    assert!(html.contains(&format!("© {year} {LEGAL_NAME}")));
    assert!(html.contains("Privacidad"));
    assert!(html.contains("Términos"));
}

// ============================================================================
// Backdrop
// ============================================================================

#[test]
fn test_backdrop_draws_all_shapes() {
    let html = render(|| view! { <AnimatedBackdrop variant=BackdropVariant::About /> });

    assert_eq!(html.matches("class=\"geo-shape ").count(), 8);
    assert_eq!(html.matches("<svg").count(), 3);
    assert!(html.contains("data-variant=\"about\""));
}

// ============================================================================
// Reveal
// ============================================================================

const STYLESHEET: &str = include_str!("../../style/main.css");

#[test]
fn test_stagger_container_starts_hidden() {
    let html = render(|| {
        view! {
            <StaggeredReveal class="grid">
                <StaggerItem index=0>"a"</StaggerItem>
                <StaggerItem index=1>"b"</StaggerItem>
            </StaggeredReveal>
        }
    });

    assert!(html.contains("class=\"stagger grid\""));
    assert_eq!(html.matches("stagger-item").count(), 2);
    assert!(!html.contains("revealed"));
    assert!(html.contains("--reveal-delay: 0.2s;"));
}

#[test]
fn test_stagger_container_fades_in() {
    let hidden = STYLESHEET
        .split(".stagger {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("stylesheet has a .stagger rule");
    assert!(hidden.contains("opacity: 0;"));
    assert!(hidden.contains("transition: opacity"));

    let shown = STYLESHEET
        .split(".stagger.revealed {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("stylesheet has a .stagger.revealed rule");
    assert!(shown.contains("opacity: 1;"));
}
