//! One page per tool.
//!
//! Every page follows the same flow: the dropzone feeds an
//! [`IntakeHandle`], local signals hold the options, and the process
//! button hands a [`pdftools::ToolRequest`] to the page's
//! [`ProcessRunner`]. Changing the file list clears the last result and cancels a
//! pending run.

use leptos::*;
use pdftools::AcceptedFile;

use crate::components::IntakeHandle;
use crate::services::ProcessRunner;

mod compress;
mod convert;
mod edit;
mod merge;
mod office;
mod protect;
mod split;
mod unlock;

pub use compress::CompressPage;
pub use convert::ConvertPage;
pub use edit::EditPage;
pub use merge::MergePage;
pub use office::OfficePage;
pub use protect::ProtectPage;
pub use split::SplitPage;
pub use unlock::UnlockPage;

/// Intake whose changes reset `runner`.
fn page_intake(tool: pdftools::ToolKind, runner: ProcessRunner) -> IntakeHandle {
    IntakeHandle::new(tool.intake_config(), move |_: &[AcceptedFile]| runner.reset())
}

#[component]
fn SelectedFile(intake: IntakeHandle) -> impl IntoView {
    view! {
        {move || intake.first().map(|file| view! {
            <p class="selected-file">"Selected file: " <strong>{file.name}</strong></p>
        })}
    }
}
