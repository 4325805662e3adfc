//! Landing page
//!
//! The whole site is this one scrolling page: navigation, hero, services,
//! about, contact and footer, always in that order.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::SITE_URL;
use crate::core::seo::{Organization, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::ui::sections::{
    AboutSection, ContactSection, FooterSection, HeroSection, NavigationBar, ServicesSection,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <PageContent />
    }
}

/// Page body without document metadata
#[component]
pub fn PageContent() -> impl IntoView {
    view! {
        <div class="app">
            <NavigationBar />
            <main>
                <HeroSection />
                <ServicesSection />
                <AboutSection />
                <ContactSection />
            </main>
            <FooterSection />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let json_ld = Organization::default().to_json_ld().unwrap_or_else(|err| {
        leptos::logging::warn!("failed to serialize JSON-LD: {err}");
        String::new()
    });

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:locale" content="es_MX" />

        <Link rel="canonical" href=SITE_URL />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}
