//! Contact section
//!
//! Contact details next to a three-field form. Submitting opens the
//! visitor's mail client with the message pre-filled and clears the form.

use leptos::prelude::*;

use crate::core::content::{CONTACT_EMAIL, OFFICES, anchors};
use crate::core::{ContactField, ContactForm, Glyph};
use crate::ui::backdrop::{AnimatedBackdrop, BackdropVariant};
use crate::ui::browser::open_mail_client;
use crate::ui::form::{FormField, TextAreaField};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnScroll;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let field_value =
        move |field: ContactField| Signal::derive(move || form.with(|f| f.get(field).to_string()));
    let field_input = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|f| f.set(field, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut uri = String::new();
        form.update(|f| uri = f.submit());
        open_mail_client(&uri);
    };

    view! {
        <section id=anchors::CONTACT class="contact-section">
            <AnimatedBackdrop variant=BackdropVariant::Contact />
            <div class="contact-fade-top"></div>

            <div class="container contact-container">
                <RevealOnScroll class="contact-info">
                    <h2 class="contact-title">"Hablemos"</h2>
                    <p class="contact-description">
                        "¿Listo para iniciar un nuevo proyecto o expandir sus operaciones? \
                         Nuestro equipo está listo para ayudar."
                    </p>

                    <div class="contact-details">
                        <div class="contact-detail">
                            <div class="contact-detail-icon">
                                <Icon glyph=Glyph::Mail size=20 />
                            </div>
                            <div>
                                <span class="contact-detail-label">"Email"</span>
                                <p class="contact-detail-value">{CONTACT_EMAIL}</p>
                            </div>
                        </div>
                        <div class="contact-detail">
                            <div class="contact-detail-icon">
                                <Icon glyph=Glyph::Globe size=20 />
                            </div>
                            <div>
                                <span class="contact-detail-label">"Oficinas"</span>
                                <p class="contact-detail-value">{OFFICES}</p>
                            </div>
                        </div>
                    </div>

                    <div class="contact-decoration">
                        <Icon glyph=Glyph::Send size=32 />
                    </div>
                </RevealOnScroll>

                <RevealOnScroll delay=0.2 class="contact-form-wrapper">
                    <form class="contact-form" on:submit=on_submit>
                        <FormField
                            label="Nombre"
                            glyph=Glyph::User
                            required=true
                            placeholder="Tu nombre"
                            value=field_value(ContactField::Name)
                            on_input=field_input(ContactField::Name)
                        />
                        <FormField
                            label="Email"
                            glyph=Glyph::Mail
                            required=true
                            input_type="email"
                            placeholder="nombre@empresa.com"
                            value=field_value(ContactField::Email)
                            on_input=field_input(ContactField::Email)
                        />
                        <TextAreaField
                            label="Mensaje"
                            glyph=Glyph::MessageSquare
                            required=true
                            placeholder="¿En qué podemos ayudarte?"
                            value=field_value(ContactField::Message)
                            on_input=field_input(ContactField::Message)
                        />
                        <button type="submit" class="btn-submit">
                            "Enviar Mensaje"
                            <Icon glyph=Glyph::Send size=18 />
                        </button>
                    </form>
                </RevealOnScroll>
            </div>
        </section>
    }
}
