//! Protect page: password pair with inline hints and permission checkboxes.

use leptos::*;
use pdftools::config::MIN_PASSWORD_LEN;
use pdftools::tools::{Permission, Permissions, ProtectRequest};
use pdftools::{ToolKind, ToolRequest};

use crate::components::{Dropzone, ProcessPanel, ToolLayout};
use crate::pages::tools::{page_intake, SelectedFile};
use crate::services::ProcessRunner;

const TOOL: ToolKind = ToolKind::Protect;

#[component]
pub fn ProtectPage() -> impl IntoView {
    let runner = ProcessRunner::new();
    let intake = page_intake(TOOL, runner);

    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let show_password = create_rw_signal(false);
    let permissions = create_rw_signal(Permissions::default());

    let request = move || ProtectRequest {
        file: intake.first(),
        password: password.get(),
        confirm: confirm.get(),
        permissions: permissions.get(),
    };
    let too_short = move || password.with(|p| !p.is_empty()) && !request().password_valid();
    let confirm_started = move || confirm.with(|c| !c.is_empty());

    let blocked = Signal::derive(move || {
        let request = request();
        request.file.is_none() || !request.password_valid() || !request.passwords_match()
    });
    let on_process = move |_| runner.run(ToolRequest::Protect(request()));

    let input_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <ToolLayout tool=TOOL>
            <Dropzone intake=intake/>
            <SelectedFile intake=intake/>

            <Show when=move || intake.files.with(|f| !f.is_empty())>
                <div class="option-group">
                    <label for="password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="password"
                            type=input_type
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="icon-button"
                            title=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁️" }}
                        </button>
                    </div>
                    <Show when=too_short>
                        <p class="error-message">
                            {format!("Password must be at least {} characters", MIN_PASSWORD_LEN)}
                        </p>
                    </Show>

                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        type=input_type
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=confirm_started>
                        {move || if request().passwords_match() {
                            view! { <p class="success-message">"Passwords match"</p> }
                        } else {
                            view! { <p class="error-message">"Passwords do not match"</p> }
                        }}
                    </Show>
                </div>

                <div class="option-group">
                    <h3>"Permissions"</h3>
                    {Permission::ALL
                        .into_iter()
                        .map(|permission| view! {
                            <label class="checkbox" for=permission.id()>
                                <input
                                    id=permission.id()
                                    type="checkbox"
                                    prop:checked=move || permissions.with(|p| p.get(permission))
                                    on:change=move |ev| {
                                        let allowed = event_target_checked(&ev);
                                        permissions.update(|p| p.set(permission, allowed));
                                    }
                                />
                                {permission.label()}
                            </label>
                        })
                        .collect_view()}
                </div>

                <ProcessPanel tool=TOOL runner=runner on_process=on_process disabled=blocked/>
            </Show>
        </ToolLayout>
    }
}
