//! Not found page
//!
//! Shown for every path other than `/`; the server answers with 404.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::Glyph;
use crate::core::content::BRAND_NAME;
use crate::ui::icon::Icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Página no encontrada | {BRAND_NAME}") />
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Página no encontrada"</h2>
            <p class="not-found-description">
                "La página que buscas no existe o fue movida."
            </p>
            <a href="/" class="btn-primary">
                "Volver al inicio"
                <Icon glyph=Glyph::ArrowRight size=18 />
            </a>
        </div>
    }
}
