//! PDF Tools - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend offering merge, split, compress, convert, edit,
//! protect and unlock tools over simulated processing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (theme)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SiteHeader (tools menu, about, FAQ, theme toggle)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /            HomePage (hero, tool grid, features)       │
//! │  ├── /about       AboutPage                                  │
//! │  ├── /faq         FaqPage                                    │
//! │  └── /tools/:slug ToolLayout                                 │
//! │                   ├── Dropzone (IntakeHandle)                │
//! │                   ├── tool options                           │
//! │                   └── ProcessPanel (ProcessRunner)           │
//! │                       └── DownloadButton                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SiteFooter                                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Theme, download state and errors
//! - [`content`] - Static copy for the home, about and FAQ pages
//! - [`components`] - UI components (header, dropzone, process panel, etc.)
//! - [`services`] - Browser file access, downloads and processing runs
//! - [`pages`] - Routed pages

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use pdftools::ToolKind;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use types::{AppError, AppResult, DownloadState, Theme};

use pages::tools::{
    CompressPage, ConvertPage, EditPage, MergePage, OfficePage, ProtectPage, SplitPage,
    UnlockPage,
};
use pages::{AboutPage, FaqPage, HomePage, NotFound};

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = create_rw_signal(Theme::default());

    view! {
        <Router>
            <div class=move || format!("app {}", theme.get().css_class())>
                <components::SiteHeader theme=theme/>
                <main class="container">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/faq" view=FaqPage/>
                        <Route path=ToolKind::Merge.href() view=MergePage/>
                        <Route path=ToolKind::Split.href() view=SplitPage/>
                        <Route path=ToolKind::Compress.href() view=CompressPage/>
                        <Route path=ToolKind::ConvertToPdf.href() view=ConvertPage/>
                        <Route path=ToolKind::PdfToOffice.href() view=OfficePage/>
                        <Route path=ToolKind::Edit.href() view=EditPage/>
                        <Route path=ToolKind::Protect.href() view=ProtectPage/>
                        <Route path=ToolKind::Unlock.href() view=UnlockPage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <components::SiteFooter/>
            </div>
        </Router>
    }
}
