//! Decorative floating shapes layered behind page sections

use derive_more::Display;
use leptos::html;
use leptos::prelude::*;

use crate::core::Shape;
use crate::core::animation::backdrop_drift;
use crate::core::content::SHAPES;
use crate::ui::motion::use_timeline;

/// Section a backdrop is placed in
///
/// Only exposed as a `data-variant` attribute; every variant draws the same
/// shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum BackdropVariant {
    #[default]
    #[display("default")]
    Default,
    #[display("services")]
    Services,
    #[display("about")]
    About,
    #[display("contact")]
    Contact,
}

/// Eight drifting shapes plus three static outline graphics
#[component]
pub fn AnimatedBackdrop(
    #[prop(default = BackdropVariant::Default)] variant: BackdropVariant,
) -> impl IntoView {
    view! {
        <div class="geometric-bg" data-variant=variant.to_string() aria-hidden="true">
            {SHAPES.iter().map(|shape| view! { <FloatingShape shape=*shape /> }).collect_view()}

            <svg class="geo-svg geo-svg-1" viewBox="0 0 100 100" fill="none">
                <polygon
                    points="50,5 95,27.5 95,72.5 50,95 5,72.5 5,27.5"
                    stroke="currentColor"
                    stroke-width="0.5"
                />
            </svg>
            <svg class="geo-svg geo-svg-2" viewBox="0 0 100 100" fill="none">
                <circle
                    cx="50"
                    cy="50"
                    r="45"
                    stroke="currentColor"
                    stroke-width="0.5"
                    stroke-dasharray="4 4"
                />
                <circle cx="50" cy="50" r="30" stroke="currentColor" stroke-width="0.5" />
            </svg>
            <svg class="geo-svg geo-svg-3" viewBox="0 0 100 100" fill="none">
                <polygon points="50,10 90,90 10,90" stroke="currentColor" stroke-width="0.5" />
            </svg>
        </div>
    }
}

#[component]
fn FloatingShape(shape: Shape) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    use_timeline(node, backdrop_drift(shape.duration));

    view! { <div node_ref=node class=shape.class style=shape.style()></div> }
}
