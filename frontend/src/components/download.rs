//! Download button for a finished tool run.
//!
//! Idle → Downloading (1.5 s) → Downloaded (3 s) → Idle.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use pdftools::{DownloadArtifact, DownloadSpec};

use crate::config::{DOWNLOADED_RESET_MS, DOWNLOAD_DELAY_MS};
use crate::services::trigger_download;
use crate::types::DownloadState;

#[component]
pub fn DownloadButton(spec: DownloadSpec) -> impl IntoView {
    let state = create_rw_signal(DownloadState::Idle);
    let artifact = store_value(DownloadArtifact::from_spec(&spec));

    let on_click = move |_| {
        if state.get_untracked().is_busy() {
            return;
        }
        state.set(DownloadState::Downloading);

        spawn_local(async move {
            TimeoutFuture::new(DOWNLOAD_DELAY_MS).await;
            let Some(result) = artifact.try_with_value(trigger_download) else {
                return;
            };
            if let Err(e) = result {
                log::error!("❌ {}", e);
                let _ = state.try_set(DownloadState::Idle);
                return;
            }
            if state.try_set(DownloadState::Downloaded).is_some() {
                return;
            }

            TimeoutFuture::new(DOWNLOADED_RESET_MS).await;
            let _ = state.try_set(DownloadState::Idle);
        });
    };

    view! {
        <button
            class=move || state.get().css_class()
            disabled=move || state.get().is_busy()
            on:click=on_click
        >
            {move || state.get().label()}
        </button>
    }
}
