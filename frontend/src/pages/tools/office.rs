use leptos::*;
use pdftools::tools::{OfficeFormat, OfficeRequest};
use pdftools::{ToolKind, ToolRequest};

use crate::components::{Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::{page_intake, SelectedFile};
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::PdfToOffice;

#[component]
pub fn OfficePage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);
    let format = create_rw_signal(OfficeFormat::default());

    let on_process = move |_| {
        let request = OfficeRequest {
            file: intake.first(),
            format: format.get_untracked(),
        };
        runner.run(ToolRequest::PdfToOffice(request));
    };

    view! {
        <ToolLayout tool=TOOL>
            <div class="tabs">
                {OfficeFormat::ALL
                    .into_iter()
                    .map(|f| view! {
                        <button
                            class="tab"
                            class:active=move || format.get() == f
                            on:click=move |_| {
                                format.set(f);
                                runner.reset();
                            }
                        >
                            {f.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <p class="muted">{move || format.get().description()}</p>

            <Dropzone intake=intake/>
            <SelectedFile intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <ProcessPanel
                    tool=TOOL
                    runner=runner
                    on_process=on_process
                    label=Signal::derive(move || format.get().action_label())
                />
            </Show>
        </ToolLayout>
    }
}
