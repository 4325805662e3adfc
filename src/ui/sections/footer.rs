use chrono::Datelike;
use leptos::prelude::*;

use crate::core::content::copyright_notice;
use crate::ui::sections::navbar::BrandMark;

#[component]
pub fn FooterSection() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-container">
                <BrandMark class="footer-brand" />
                <p class="footer-copyright">{copyright_notice(year)}</p>
                <div class="footer-links">
                    <a href="#">"Privacidad"</a>
                    <a href="#">"Términos"</a>
                </div>
            </div>
        </footer>
    }
}
