//! Numbered list for arranging merge order.
//!
//! Rows can be dragged onto each other or nudged with the arrow buttons.

use leptos::*;
use web_sys::DragEvent;

use crate::components::IntakeHandle;

#[component]
pub fn ArrangeList(intake: IntakeHandle) -> impl IntoView {
    let count = move || intake.files.with(Vec::len);
    let dragging = create_rw_signal(None::<usize>);

    let on_drop = move |ev: DragEvent, target: usize| {
        ev.prevent_default();
        if let Some((from, to)) = drop_move(dragging.get_untracked(), target) {
            intake.reorder(from, to);
        }
        dragging.set(None);
    };

    view! {
        <div class="arrange-list">
            <div class="arrange-header">
                <h3>"Arrange Files"</h3>
                <p class="muted">"Drag files or use the arrows to reorder"</p>
            </div>
            <For
                each=move || intake.files.get().into_iter().enumerate()
                key=|(idx, file)| format!("{}-{}", file.name, idx)
                children=move |(idx, file)| {
                    view! {
                        <div
                            class="arrange-item"
                            class:dragging=move || dragging.get() == Some(idx)
                            draggable="true"
                            on:dragstart=move |ev: DragEvent| {
                                // Firefox only starts a drag with some payload
                                if let Some(dt) = ev.data_transfer() {
                                    let _ = dt.set_data("text/plain", &idx.to_string());
                                }
                                dragging.set(Some(idx));
                            }
                            on:dragover=move |ev: DragEvent| ev.prevent_default()
                            on:drop=move |ev: DragEvent| on_drop(ev, idx)
                            on:dragend=move |_| dragging.set(None)
                        >
                            <span class="drag-handle">"⠿"</span>
                            <span class="arrange-index">{idx + 1}</span>
                            <p class="file-name">{file.name}</p>
                            <div class="arrange-actions">
                                <button
                                    class="icon-button"
                                    title="Move up"
                                    disabled=idx == 0
                                    on:click=move |_| intake.move_up(idx)
                                >
                                    "▲"
                                </button>
                                <button
                                    class="icon-button"
                                    title="Move down"
                                    disabled=move || idx + 1 >= count()
                                    on:click=move |_| intake.move_down(idx)
                                >
                                    "▼"
                                </button>
                                <button
                                    class="icon-button"
                                    title="Remove"
                                    on:click=move |_| intake.remove(idx)
                                >
                                    "🗑️"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Move implied by dropping the dragged row on `target`, if any.
fn drop_move(source: Option<usize>, target: usize) -> Option<(usize, usize)> {
    source.filter(|&from| from != target).map(|from| (from, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftools::{AcceptedFile, IntakeConfig, IntakeSurface};

    fn names(surface: &IntakeSurface) -> Vec<&str> {
        surface.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_drop_move() {
        assert_eq!(drop_move(Some(0), 2), Some((0, 2)));
        assert_eq!(drop_move(Some(3), 1), Some((3, 1)));
        assert_eq!(drop_move(Some(1), 1), None);
        assert_eq!(drop_move(None, 1), None);
    }

    #[test]
    fn test_dropping_row_reorders_surface() {
        let mut surface = IntakeSurface::new(IntakeConfig::pdf(10));
        surface
            .submit(
                ["a.pdf", "b.pdf", "c.pdf"]
                    .into_iter()
                    .map(|name| AcceptedFile::new(name, 10, "application/pdf"))
                    .collect(),
            )
            .unwrap();

        let (from, to) = drop_move(Some(0), 2).unwrap();
        assert!(surface.reorder(from, to));
        assert_eq!(names(&surface), vec!["b.pdf", "c.pdf", "a.pdf"]);

        let (from, to) = drop_move(Some(2), 0).unwrap();
        assert!(surface.reorder(from, to));
        assert_eq!(names(&surface), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }
}
