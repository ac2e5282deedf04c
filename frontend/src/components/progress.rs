use leptos::*;

#[component]
pub fn ProgressBar(#[prop(into)] label: String, value: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-header">
                <span>{label}</span>
                <span>{move || format!("{}%", value.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", value.get())
                ></div>
            </div>
        </div>
    }
}
