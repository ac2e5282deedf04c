//! Shared frame of every tool page.

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;
use pdftools::ToolKind;

use crate::config::{APP_NAME, TOOL_PRIVACY_NOTICE};

#[component]
pub fn ToolLayout(tool: ToolKind, children: Children) -> impl IntoView {
    view! {
        <Title text=format!("{} | {}", tool.page_title(), APP_NAME)/>
        <div class="tool-page">
            <div class="breadcrumb">
                <A href="/" class="back-link">"‹"</A>
                <A href="/">"Home"</A>
                " / "
                <span class="current">{tool.page_title()}</span>
            </div>

            <div class="tool-heading">
                <span class="tool-icon">{tool.icon()}</span>
                <h1>{tool.page_title()}</h1>
            </div>
            <p class="tool-description">{tool.page_description()}</p>

            <div class="tool-card">{children()}</div>

            <div class="tool-about">
                <h3>"About this tool"</h3>
                <p>{TOOL_PRIVACY_NOTICE}</p>
            </div>
        </div>
    }
}
