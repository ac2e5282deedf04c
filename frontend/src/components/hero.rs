//! Hero section component

use leptos::*;
use leptos_router::A;

use crate::content::{HERO_SUBTITLE, HERO_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{HERO_TITLE}</h1>
            <p class="subtitle">{HERO_SUBTITLE}</p>
            <div class="hero-actions">
                <a href="#tools" class="primary-button">"Explore Tools"</a>
                <A href="/about" class="outline-button">"Learn More"</A>
            </div>
        </div>
    }
}
