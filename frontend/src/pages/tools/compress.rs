use leptos::*;
use pdftools::tools::compress::{clamp_level, MAX_LEVEL, MIN_LEVEL};
use pdftools::tools::{format_file_size, CompressRequest, CompressionPreset};
use pdftools::{ToolKind, ToolRequest};

use crate::components::{Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::{page_intake, SelectedFile};
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::Compress;

#[component]
pub fn CompressPage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);
    let level = create_rw_signal(CompressionPreset::default().level());

    let on_process = move |_| {
        let request = CompressRequest {
            file: intake.first(),
            level: level.get_untracked(),
        };
        runner.run(ToolRequest::Compress(request));
    };

    let on_slide = move |ev: web_sys::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
            level.set(clamp_level(value));
        }
    };

    view! {
        <ToolLayout tool=TOOL>
            <Dropzone intake=intake/>
            <SelectedFile intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <p class="muted">
                    {move || intake.first().map(|f| format!("Original size: {}", format_file_size(f.size)))}
                </p>

                <div class="option-group">
                    <h3>"Compression Level"</h3>
                    {CompressionPreset::ALL
                        .into_iter()
                        .map(|preset| view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="compression-preset"
                                    prop:checked=move || CompressionPreset::from_level(level.get()) == Some(preset)
                                    on:change=move |_| level.set(preset.level())
                                />
                                {preset.label()}
                            </label>
                        })
                        .collect_view()}
                </div>

                <div class="option-group">
                    <label for="compression-level">
                        {move || format!("Custom level: {}%", level.get())}
                    </label>
                    <input
                        id="compression-level"
                        type="range"
                        min=MIN_LEVEL
                        max=MAX_LEVEL
                        prop:value=move || level.get().to_string()
                        on:input=on_slide
                    />
                </div>

                <ProcessPanel tool=TOOL runner=runner on_process=on_process/>
            </Show>
        </ToolLayout>
    }
}
