//! Convert to PDF: the category tabs swap the dropzone's accepted types.

use leptos::*;
use pdftools::tools::{ConvertCategory, ConvertRequest};
use pdftools::{ToolKind, ToolRequest};

use crate::components::{Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::page_intake;
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::ConvertToPdf;

#[component]
pub fn ConvertPage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);
    let category = create_rw_signal(ConvertCategory::default());

    let select = move |next: ConvertCategory| {
        if category.get_untracked() == next {
            return;
        }
        log::debug!("convert category: {}", next.label());
        category.set(next);
        runner.reset();
        intake.reconfigure(next.intake_config());
    };

    let on_process = move |_| {
        let request = ConvertRequest {
            files: intake.files.get_untracked(),
            category: category.get_untracked(),
        };
        runner.run(ToolRequest::ConvertToPdf(request));
    };

    view! {
        <ToolLayout tool=TOOL>
            <div class="tabs">
                {ConvertCategory::ALL
                    .into_iter()
                    .map(|c| view! {
                        <button
                            class="tab"
                            class:active=move || category.get() == c
                            on:click=move |_| select(c)
                        >
                            {c.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <p class="muted">{move || category.get().description()}</p>

            <Dropzone intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <ProcessPanel tool=TOOL runner=runner on_process=on_process/>
            </Show>
        </ToolLayout>
    }
}
