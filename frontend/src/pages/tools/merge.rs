use leptos::*;
use pdftools::config::MERGE_MIN_FILES;
use pdftools::tools::MergeRequest;
use pdftools::{ToolKind, ToolRequest};

use crate::components::{ArrangeList, Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::page_intake;
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::Merge;

#[component]
pub fn MergePage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);

    let ready = move || intake.files.with(|files| files.len() >= MERGE_MIN_FILES);
    let on_process = move |_| {
        let request = MergeRequest::new(intake.files.get_untracked());
        runner.run(ToolRequest::Merge(request));
    };

    view! {
        <ToolLayout tool=TOOL>
            <Dropzone intake=intake/>
            <Show
                when=ready
                fallback=|| view! {
                    <p class="hint">"Please upload at least 2 PDF files to merge them."</p>
                }
            >
                <ArrangeList intake=intake/>
                <ProcessPanel tool=TOOL runner=runner on_process=on_process/>
            </Show>
        </ToolLayout>
    }
}
