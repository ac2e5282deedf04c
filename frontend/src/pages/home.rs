use leptos::*;
use leptos_meta::Title;
use leptos_router::A;
use pdftools::ToolKind;

use crate::components::Hero;
use crate::config::APP_NAME;
use crate::content::FEATURES;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Free Online PDF Toolkit", APP_NAME)/>
        <Hero/>

        <section id="tools" class="tools-section">
            <h2>"All PDF Tools"</h2>
            <div class="tool-grid">
                {ToolKind::ALL
                    .into_iter()
                    .map(|tool| view! { <ToolCard tool=tool/> })
                    .collect_view()}
            </div>
        </section>

        <section class="features-section">
            <h2>"Why Choose Our PDF Tools?"</h2>
            <div class="feature-grid">
                {FEATURES
                    .into_iter()
                    .map(|feature| view! {
                        <div class="feature-card">
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ToolCard(tool: ToolKind) -> impl IntoView {
    view! {
        <A href=tool.href() class="tool-card-link">
            <div class="tool-card">
                <span class="tool-icon">{tool.icon()}</span>
                <h3>{tool.nav_name()}</h3>
                <p>{tool.card_description()}</p>
            </div>
        </A>
    }
}
