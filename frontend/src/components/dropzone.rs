//! File upload dropzone with drag & drop support.
//!
//! [`IntakeHandle`] wraps one [`IntakeSurface`] per page and mirrors its
//! list, error and progress into signals. [`Dropzone`] renders it.

use gloo_timers::callback::{Interval, Timeout};
use leptos::html::Input;
use leptos::*;
use pdftools::{AcceptedFile, IntakeConfig, IntakeSurface, UploadProgress};
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::ProgressBar;
use crate::config::{PROGRESS_SETTLE_MS, PROGRESS_TICK_MS};
use crate::services::accepted_files;

// =============================================================================
// Intake Handle
// =============================================================================

/// Page-local intake state, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct IntakeHandle {
    surface: StoredValue<IntakeSurface>,
    pub config: RwSignal<IntakeConfig>,
    pub files: RwSignal<Vec<AcceptedFile>>,
    pub error: RwSignal<Option<String>>,
    pub progress: RwSignal<UploadProgress>,
    timers: StoredValue<Option<(Interval, Timeout)>>,
}

impl IntakeHandle {
    /// New surface for `config`. `on_change` sees the full list after every
    /// accepted batch, removal, reorder or reconfiguration.
    pub fn new(config: IntakeConfig, on_change: impl Fn(&[AcceptedFile]) + 'static) -> Self {
        let files = create_rw_signal(Vec::new());
        let surface = IntakeSurface::new(config.clone()).with_listener(move |list| {
            files.set(list.to_vec());
            on_change(list);
        });

        let handle = Self {
            surface: store_value(surface),
            config: create_rw_signal(config),
            files,
            error: create_rw_signal(None),
            progress: create_rw_signal(UploadProgress::default()),
            timers: store_value(None),
        };
        on_cleanup(move || handle.stop_timers());
        handle
    }

    /// Validate and append a batch from the picker or a drop.
    pub fn submit(&self, batch: Vec<AcceptedFile>) {
        let empty = batch.is_empty();
        let result = self
            .surface
            .try_update_value(|surface| surface.submit(batch).map(|_| ()));

        match result {
            Some(Ok(())) => {
                self.error.set(None);
                if !empty {
                    self.start_progress();
                }
            }
            Some(Err(e)) => {
                if let Some(name) = e.file_name() {
                    log::warn!("rejected {}: {}", name, e);
                }
                self.error.set(Some(e.to_string()));
            }
            None => log::warn!("upload ignored: intake already disposed"),
        }
    }

    pub fn remove(&self, index: usize) {
        self.surface.update_value(|surface| {
            surface.remove(index);
        });
    }

    pub fn move_up(&self, index: usize) {
        self.surface.update_value(|surface| {
            surface.move_up(index);
        });
    }

    pub fn move_down(&self, index: usize) {
        self.surface.update_value(|surface| {
            surface.move_down(index);
        });
    }

    /// Drag-and-drop move of the file at `from` to `to`.
    pub fn reorder(&self, from: usize, to: usize) {
        self.surface.update_value(|surface| {
            surface.reorder(from, to);
        });
    }

    /// Swap in new limits; the current list is dropped.
    pub fn reconfigure(&self, config: IntakeConfig) {
        self.stop_timers();
        self.surface
            .update_value(|surface| surface.reconfigure(config.clone()));
        self.config.set(config);
        self.error.set(None);
        self.progress.set(UploadProgress::default());
    }

    pub fn first(&self) -> Option<AcceptedFile> {
        self.files.with(|files| files.first().cloned())
    }

    fn start_progress(&self) {
        self.stop_timers();
        self.progress.update(UploadProgress::restart);

        let progress = self.progress;
        // Both timers live until the next batch or unmount
        let interval = Interval::new(PROGRESS_TICK_MS, move || {
            if progress.with_untracked(UploadProgress::is_running) {
                progress.update(|p| {
                    p.tick();
                });
            }
        });
        let settle = Timeout::new(PROGRESS_SETTLE_MS, move || {
            progress.update(UploadProgress::finish);
        });
        self.timers.set_value(Some((interval, settle)));
    }

    fn stop_timers(&self) {
        let _ = self.timers.try_update_value(Option::take);
    }
}

// =============================================================================
// Component
// =============================================================================

#[component]
pub fn Dropzone(intake: IntakeHandle) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let input_ref = create_node_ref::<Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            intake.submit(accepted_files(&list));
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            intake.submit(accepted_files(&list));
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let trigger_file_input = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="dropzone-wrapper">
            <div
                class="dropzone"
                class:active=move || drag_active.get()
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=move |_| set_drag_active.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">
                    {move || if drag_active.get() {
                        "Drop the files here"
                    } else {
                        "Drag & drop files here"
                    }}
                </div>
                <div class="upload-hint">"or click to browse files from your computer"</div>
                <div class="upload-hint small">
                    {move || intake.config.with(|c| c.upload_hint())}
                    <br/>
                    {move || format!("Max file size: {}MB", intake.config.with(|c| c.max_size_mb()))}
                </div>
                <input
                    type="file"
                    node_ref=input_ref
                    style="display:none"
                    multiple=move || intake.config.with(|c| c.max_files > 1)
                    accept=move || intake.config.with(|c| c.accept.accept_attribute())
                    on:change=on_file_change
                />
            </div>

            <Show when=move || intake.error.with(Option::is_some)>
                <div class="error-message">
                    "⚠️ " {move || intake.error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || intake.progress.with(UploadProgress::is_visible)>
                <ProgressBar
                    label="Uploading..."
                    value=Signal::derive(move || intake.progress.with(UploadProgress::value))
                />
            </Show>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <div class="file-list">
                    <p class="file-list-title">"Selected Files:"</p>
                    <For
                        each=move || intake.files.get().into_iter().enumerate()
                        key=|(idx, file)| format!("{}-{}", file.name, idx)
                        children=move |(idx, file)| {
                            view! {
                                <div class="file-item">
                                    <span class="file-icon">"📄"</span>
                                    <div class="file-meta">
                                        <p class="file-name">{file.name.clone()}</p>
                                        <p class="file-size">{file.size_kb_label()}</p>
                                    </div>
                                    <button
                                        class="icon-button"
                                        title="Remove file"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            intake.remove(idx);
                                        }
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
