use leptos::prelude::*;

use crate::core::Glyph;

/// Inline SVG icon
///
/// Every [`Glyph`] maps to a fixed set of stroke paths on a 24x24 grid.
#[component]
pub fn Icon(
    /// Which icon to draw
    glyph: Glyph,
    /// CSS classes for styling
    #[prop(default = "icon")]
    class: &'static str,
    /// Rendered width and height in px
    #[prop(default = 20)]
    size: u32,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            data-glyph=glyph.to_string()
            aria-hidden="true"
        >
            <GlyphPaths glyph=glyph />
        </svg>
    }
}

#[component]
fn GlyphPaths(glyph: Glyph) -> impl IntoView {
    match glyph {
        Glyph::TrendingUp => view! {
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
            <polyline points="16 7 22 7 22 13" />
        }
        .into_any(),
        Glyph::Globe => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
            <path d="M2 12h20" />
        }
        .into_any(),
        Glyph::Cpu => view! {
            <rect width="16" height="16" x="4" y="4" rx="2" />
            <rect width="6" height="6" x="9" y="9" rx="1" />
            <path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
        }
        .into_any(),
        Glyph::ArrowRight => view! {
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        }
        .into_any(),
        Glyph::Menu => view! {
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        }
        .into_any(),
        Glyph::Close => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_any(),
        Glyph::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_any(),
        Glyph::ChevronDown => view! { <path d="m6 9 6 6 6-6" /> }.into_any(),
        Glyph::Send => view! {
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        }
        .into_any(),
        Glyph::User => view! {
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        }
        .into_any(),
        Glyph::MessageSquare => view! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        }
        .into_any(),
    }
}
