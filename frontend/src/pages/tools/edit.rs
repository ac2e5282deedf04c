//! Edit page: text, image and drawing options over a static preview.

use leptos::*;
use pdftools::tools::edit::{FONT_SIZE_RANGE, OPACITY_RANGE, PEN_SIZE_RANGE};
use pdftools::tools::{Anchor, EditMode, EditOptions, EditRequest, PenTool};
use pdftools::{ToolKind, ToolRequest};
use web_sys::Event;

use crate::components::{Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::{page_intake, SelectedFile};
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::Edit;

#[component]
pub fn EditPage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);
    let options = create_rw_signal(EditOptions::default());

    let on_process = move |_| {
        let request = EditRequest {
            file: intake.first(),
            options: options.get_untracked(),
        };
        runner.run(ToolRequest::Edit(request));
    };

    view! {
        <ToolLayout tool=TOOL>
            <Dropzone intake=intake/>
            <SelectedFile intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <div class="editor">
                    <div class="editor-preview">
                        <span class="tool-icon">"📄"</span>
                        <p class="muted">"PDF Preview"</p>
                    </div>

                    <div class="editor-tools">
                        <h3>"Editing Tools"</h3>
                        <div class="tabs">
                            {EditMode::ALL
                                .into_iter()
                                .map(|mode| view! {
                                    <button
                                        class="tab"
                                        class:active=move || options.with(|o| o.mode == mode)
                                        on:click=move |_| options.update(|o| o.mode = mode)
                                    >
                                        {mode.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>

                        {move || match options.with(|o| o.mode) {
                            EditMode::Text => view! { <TextOptions options=options/> }.into_view(),
                            EditMode::Image => view! { <ImageOptions options=options/> }.into_view(),
                            EditMode::Draw => view! { <DrawOptions options=options/> }.into_view(),
                        }}
                    </div>
                </div>

                <ProcessPanel tool=TOOL runner=runner on_process=on_process/>
            </Show>
        </ToolLayout>
    }
}

/// Parse a slider value; out-of-range input is left to validation.
fn slider_value(ev: &Event) -> Option<u8> {
    event_target_value(ev).parse().ok()
}

#[component]
fn TextOptions(options: RwSignal<EditOptions>) -> impl IntoView {
    view! {
        <div class="option-group">
            <label for="text-input">"Text Content"</label>
            <input
                id="text-input"
                type="text"
                placeholder="Enter text to add to PDF"
                prop:value=move || options.with(|o| o.text.clone())
                on:input=move |ev| options.update(|o| o.text = event_target_value(&ev))
            />

            <label for="font-size">{move || format!("Font Size: {}px", options.with(|o| o.font_size))}</label>
            <input
                id="font-size"
                type="range"
                min=FONT_SIZE_RANGE.0
                max=FONT_SIZE_RANGE.1
                prop:value=move || options.with(|o| o.font_size.to_string())
                on:input=move |ev| {
                    if let Some(size) = slider_value(&ev) {
                        options.update(|o| o.font_size = size);
                    }
                }
            />

            <label for="text-color">"Text Color"</label>
            <input
                id="text-color"
                type="color"
                prop:value=move || options.with(|o| o.text_color.clone())
                on:input=move |ev| options.update(|o| o.text_color = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ImageOptions(options: RwSignal<EditOptions>) -> impl IntoView {
    view! {
        <div class="option-group">
            <label for="image-upload">"Upload Image"</label>
            <input id="image-upload" type="file" accept="image/*"/>

            <label for="image-opacity">{move || format!("Opacity: {}%", options.with(|o| o.image_opacity))}</label>
            <input
                id="image-opacity"
                type="range"
                min=OPACITY_RANGE.0
                max=OPACITY_RANGE.1
                prop:value=move || options.with(|o| o.image_opacity.to_string())
                on:input=move |ev| {
                    if let Some(opacity) = slider_value(&ev) {
                        options.update(|o| o.image_opacity = opacity);
                    }
                }
            />

            <label>"Position"</label>
            <div class="anchor-grid">
                {Anchor::GRID
                    .into_iter()
                    .map(|anchor| view! {
                        <button
                            class="outline-button"
                            class:active=move || options.with(|o| o.anchor == anchor)
                            title=anchor.label()
                            on:click=move |_| options.update(|o| o.anchor = anchor)
                        >
                            {anchor_glyph(anchor)}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DrawOptions(options: RwSignal<EditOptions>) -> impl IntoView {
    view! {
        <div class="option-group">
            <label for="pen-color">"Pen Color"</label>
            <input
                id="pen-color"
                type="color"
                prop:value=move || options.with(|o| o.pen_color.clone())
                on:input=move |ev| options.update(|o| o.pen_color = event_target_value(&ev))
            />

            <label for="pen-size">{move || format!("Pen Size: {}px", options.with(|o| o.pen_size))}</label>
            <input
                id="pen-size"
                type="range"
                min=PEN_SIZE_RANGE.0
                max=PEN_SIZE_RANGE.1
                prop:value=move || options.with(|o| o.pen_size.to_string())
                on:input=move |ev| {
                    if let Some(size) = slider_value(&ev) {
                        options.update(|o| o.pen_size = size);
                    }
                }
            />

            <div class="pen-tools">
                <button
                    class="outline-button"
                    class:active=move || options.with(|o| o.pen_tool == PenTool::Pen)
                    on:click=move |_| options.update(|o| o.pen_tool = PenTool::Pen)
                >
                    "✏️ Pen"
                </button>
                <button
                    class="outline-button"
                    class:active=move || options.with(|o| o.pen_tool == PenTool::Eraser)
                    on:click=move |_| options.update(|o| o.pen_tool = PenTool::Eraser)
                >
                    "🧽 Eraser"
                </button>
            </div>
        </div>
    }
}

fn anchor_glyph(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::TopLeft => "↖",
        Anchor::TopCenter => "↑",
        Anchor::TopRight => "↗",
        Anchor::MiddleLeft => "←",
        Anchor::Center => "•",
        Anchor::MiddleRight => "→",
        Anchor::BottomLeft => "↙",
        Anchor::BottomCenter => "↓",
        Anchor::BottomRight => "↘",
    }
}
