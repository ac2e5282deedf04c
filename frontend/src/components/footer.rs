//! Footer component

use chrono::Datelike;
use leptos::*;
use leptos_router::A;

use crate::config::{APP_NAME, BRAND_ICON, POLICY_LINKS, RETENTION_NOTICE};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div class="footer-brand">
                <A href="/" class="logo">
                    <span class="logo-icon">{BRAND_ICON}</span>
                    {APP_NAME}
                </A>
                <p>{copyright(year)}</p>
            </div>
            <div class="footer-links">
                {POLICY_LINKS
                    .into_iter()
                    .map(|(label, href)| view! { <A href=href class="footer-link">{label}</A> })
                    .collect_view()}
            </div>
            <p class="footer-notice">{RETENTION_NOTICE}</p>
        </footer>
    }
}

fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, APP_NAME)
}
