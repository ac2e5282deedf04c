use leptos::*;
use pdftools::tools::UnlockRequest;
use pdftools::{ToolKind, ToolRequest};

use crate::components::{Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::{page_intake, SelectedFile};
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::Unlock;

#[component]
pub fn UnlockPage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);
    let password = create_rw_signal(String::new());
    let show_password = create_rw_signal(false);

    // An empty password is reported by the request once processing ends
    let on_process = move |_| {
        let request = UnlockRequest {
            file: intake.first(),
            password: password.get_untracked(),
        };
        runner.run(ToolRequest::Unlock(request));
    };

    view! {
        <ToolLayout tool=TOOL>
            <Dropzone intake=intake/>
            <SelectedFile intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <div class="option-group">
                    <label for="unlock-password">"PDF Password"</label>
                    <div class="password-field">
                        <input
                            id="unlock-password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter PDF password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                runner.error.set(None);
                            }
                        />
                        <button
                            class="icon-button"
                            title=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁️" }}
                        </button>
                    </div>
                    <p class="muted">"Enter the password to unlock this PDF file."</p>
                </div>

                <ProcessPanel tool=TOOL runner=runner on_process=on_process/>
            </Show>
        </ToolLayout>
    }
}
