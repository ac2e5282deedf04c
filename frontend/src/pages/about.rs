use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::config::APP_NAME;
use crate::content::{about_faq, ABOUT_INTRO, ABOUT_SECTIONS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=format!("About | {}", APP_NAME)/>
        <div class="page about-page">
            <h1>{format!("About {}", APP_NAME)}</h1>
            <p class="lead">{ABOUT_INTRO}</p>

            <div class="about-grid">
                {ABOUT_SECTIONS
                    .into_iter()
                    .map(|section| view! {
                        <div class="about-card">
                            <h3>{section.title}</h3>
                            <p>{section.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="cta">
                <h2>"Ready to get started?"</h2>
                <A href="/" class="primary-button">"Explore Our Tools"</A>
            </div>

            <h2>"Frequently Asked Questions"</h2>
            <div class="faq-preview">
                {about_faq()
                    .iter()
                    .map(|item| view! {
                        <div class="faq-item">
                            <h3>{item.title}</h3>
                            <p>{item.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <A href="/faq" class="outline-button">"View all FAQs"</A>
        </div>
    }
}
