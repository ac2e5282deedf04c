//! Success and error banners shown under the process button.

use leptos::*;
use pdftools::tools::format_file_size;
use pdftools::{OutcomeDetail, ToolKind, ToolOutcome};

use crate::components::DownloadButton;
use crate::services::ProcessRunner;

#[component]
pub fn ErrorAlert(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="alert alert-error">"⚠️ " {move || message.get()}</div>
    }
}

/// Process button, error banner and, once done, the result with its
/// download button.
///
/// The button reads `tool`'s labels unless `label` overrides the idle one.
#[component]
pub fn ProcessPanel(
    tool: ToolKind,
    runner: ProcessRunner,
    #[prop(into)] on_process: Callback<()>,
    #[prop(optional, into)] label: Option<Signal<String>>,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let idle_label = move || match label {
        Some(label) => label.get(),
        None => tool.action_label().to_string(),
    };
    let blocked = move || runner.busy.get() || disabled.map(|d| d.get()).unwrap_or(false);

    view! {
        <div class="process-panel">
            <button class="primary-button" disabled=blocked on:click=move |_| on_process.call(())>
                {move || if runner.busy.get() { tool.busy_label().to_string() } else { idle_label() }}
            </button>

            {move || runner.error.get().map(|message| view! { <ErrorAlert message=message/> })}

            {move || runner.outcome.get().map(|outcome| view! { <OutcomeView outcome=outcome/> })}
        </div>
    }
}

#[component]
fn OutcomeView(outcome: ToolOutcome) -> impl IntoView {
    let detail = detail_line(&outcome.detail);
    view! {
        <div class="outcome">
            <div class="alert alert-success">{outcome.message}</div>
            {detail.map(|text| view! { <p class="outcome-detail">{text}</p> })}
            <DownloadButton spec=outcome.download/>
        </div>
    }
}

/// Figures shown under the success message, if the tool reports any.
pub fn detail_line(detail: &OutcomeDetail) -> Option<String> {
    match detail {
        OutcomeDetail::None => None,
        OutcomeDetail::Merged { files } => Some(format!("{} files combined", files)),
        OutcomeDetail::Split { documents, pages } => Some(format!(
            "{} document{} with {} page{} in total",
            documents,
            plural(*documents),
            pages,
            plural(*pages)
        )),
        OutcomeDetail::Compressed {
            original,
            compressed,
            reduction_percent,
        } => Some(format!(
            "{} → {} ({}% reduction)",
            format_file_size(*original),
            format_file_size(*compressed),
            reduction_percent
        )),
        OutcomeDetail::Converted { files } => {
            Some(format!("{} file{} converted", files, plural(*files)))
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_lines() {
        assert_eq!(detail_line(&OutcomeDetail::None), None);
        assert_eq!(
            detail_line(&OutcomeDetail::Split { documents: 1, pages: 7 }).unwrap(),
            "1 document with 7 pages in total"
        );
        assert_eq!(
            detail_line(&OutcomeDetail::Compressed {
                original: 2048,
                compressed: 1024,
                reduction_percent: 50,
            })
            .unwrap(),
            "2 KB → 1 KB (50% reduction)"
        );
    }
}
