use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::config::APP_NAME;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text=format!("Page not found | {}", APP_NAME)/>
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" class="primary-button">"Back to Home"</A>
        </div>
    }
}
