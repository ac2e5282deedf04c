//! Split page with a simple and an advanced tab.

use leptos::*;
use pdftools::tools::split::simulated_page_count;
use pdftools::tools::{parse_page_ranges, SplitMethod, SplitRequest};
use pdftools::{AcceptedFile, ToolKind, ToolRequest};

use crate::components::{Dropzone, IntakeHandle, ProcessPanel, ToolLayout};
use crate::pages::tools::SelectedFile;
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::Split;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Simple,
    Advanced,
}

#[component]
pub fn SplitPage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let total_pages = create_rw_signal(0u32);
    let counted = store_value(None::<AcceptedFile>);
    // Roll a page count only when a different file is selected
    let intake = IntakeHandle::new(TOOL.intake_config(), move |files: &[AcceptedFile]| {
        runner.reset();
        let first = files.first().cloned();
        if counted.with_value(|prev| *prev == first) {
            return;
        }
        let pages = match first {
            Some(_) => simulated_page_count(&mut rand::thread_rng()),
            None => 0,
        };
        counted.set_value(first);
        total_pages.set(pages);
    });

    let tab = create_rw_signal(Tab::Simple);
    let method = create_rw_signal(SplitMethod::All);
    let ranges = create_rw_signal(String::new());

    let range_error = move || {
        let expr = ranges.get();
        if expr.trim().is_empty() {
            return None;
        }
        parse_page_ranges(&expr, total_pages.get()).err().map(|e| e.to_string())
    };

    let current_method = move || match tab.get() {
        Tab::Simple => method.get(),
        Tab::Advanced => SplitMethod::Ranges(ranges.get()),
    };

    let blocked = Signal::derive(move || {
        intake.files.with(Vec::is_empty)
            || (tab.get() == Tab::Advanced && (ranges.with(|r| r.trim().is_empty()) || range_error().is_some()))
    });

    let on_process = move |_| {
        let request = SplitRequest {
            file: intake.first(),
            total_pages: total_pages.get_untracked(),
            method: current_method(),
        };
        runner.run(ToolRequest::Split(request));
    };

    let choose_every = move |n: u32| {
        method.set(SplitMethod::Every(n));
        tab.set(Tab::Simple);
    };

    view! {
        <ToolLayout tool=TOOL>
            <Dropzone intake=intake/>
            <SelectedFile intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <p class="muted">{move || format!("Total pages: {}", total_pages.get())}</p>

                <div class="tabs">
                    <button class="tab" class:active=move || tab.get() == Tab::Simple on:click=move |_| tab.set(Tab::Simple)>
                        "Simple"
                    </button>
                    <button class="tab" class:active=move || tab.get() == Tab::Advanced on:click=move |_| tab.set(Tab::Advanced)>
                        "Advanced"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == Tab::Simple
                    fallback=move || view! {
                        <div class="option-group">
                            <label for="page-ranges">"Page ranges"</label>
                            <input
                                id="page-ranges"
                                type="text"
                                placeholder="e.g. 1-3, 5, 7-9"
                                prop:value=move || ranges.get()
                                on:input=move |ev| ranges.set(event_target_value(&ev))
                            />
                            {move || range_error().map(|message| view! { <p class="error-message">{message}</p> })}
                            <div class="quick-actions">
                                <button class="outline-button" on:click=move |_| choose_every(2)>"Every 2 pages"</button>
                                <button class="outline-button" on:click=move |_| choose_every(5)>"Every 5 pages"</button>
                            </div>
                        </div>
                    }
                >
                    <div class="option-group">
                        {[SplitMethod::All, SplitMethod::Even, SplitMethod::Odd]
                            .into_iter()
                            .map(|choice| {
                                let label = choice.label();
                                let checked = {
                                    let choice = choice.clone();
                                    move || method.get() == choice
                                };
                                view! {
                                    <label class="radio">
                                        <input
                                            type="radio"
                                            name="split-method"
                                            prop:checked=checked
                                            on:change=move |_| method.set(choice.clone())
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                        {move || match method.get() {
                            every @ SplitMethod::Every(_) => Some(view! { <p class="muted">{every.label()}</p> }),
                            _ => None,
                        }}
                    </div>
                </Show>

                <ProcessPanel tool=TOOL runner=runner on_process=on_process disabled=blocked/>
            </Show>
        </ToolLayout>
    }
}
