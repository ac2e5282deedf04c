use leptos::*;
use leptos_router::A;
use pdftools::ToolKind;

use crate::config::{APP_NAME, BRAND_ICON};
use crate::types::Theme;

#[component]
pub fn SiteHeader(theme: RwSignal<Theme>) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    let on_theme_click = move |_| {
        theme.update(|t| *t = t.toggled());
        log::debug!("theme switched to {:?}", theme.get_untracked());
    };

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">
                    <span class="logo-icon">{BRAND_ICON}</span>
                    {APP_NAME}
                </A>
                <nav class="main-nav">
                    <div class="menu" on:mouseleave=move |_| set_menu_open.set(false)>
                        <button
                            class="menu-trigger"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "All Tools ▾"
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="menu-content" on:click=move |_| set_menu_open.set(false)>
                                {ToolKind::ALL
                                    .into_iter()
                                    .map(|tool| view! {
                                        <A href=tool.href() class="menu-item">{tool.nav_name()}</A>
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                    <A href="/about" class="nav-link">"About"</A>
                    <A href="/faq" class="nav-link">"FAQ"</A>
                </nav>
            </div>
            <div class="header-right">
                <button class="theme-toggle" title="Toggle theme" on:click=on_theme_click>
                    {move || theme.get().toggle_icon()}
                </button>
            </div>
        </header>
    }
}
