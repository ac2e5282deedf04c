//! FAQ accordion: at most one answer open at a time.

use leptos::*;
use leptos_meta::Title;

use crate::config::APP_NAME;
use crate::content::FAQ;

#[component]
pub fn FaqPage() -> impl IntoView {
    let open = create_rw_signal(None::<usize>);

    view! {
        <Title text=format!("FAQ | {}", APP_NAME)/>
        <div class="page faq-page">
            <h1>"Frequently Asked Questions"</h1>
            <div class="accordion">
                {FAQ
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        let is_open = move || open.get() == Some(idx);
                        view! {
                            <div class="accordion-item" class:open=is_open>
                                <button
                                    class="accordion-trigger"
                                    on:click=move |_| open.update(|o| *o = toggle(*o, idx))
                                >
                                    {item.title}
                                    <span class="chevron">{move || if is_open() { "▴" } else { "▾" }}</span>
                                </button>
                                <Show when=is_open>
                                    <p class="accordion-content">{item.body}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn toggle(open: Option<usize>, idx: usize) -> Option<usize> {
    if open == Some(idx) {
        None
    } else {
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_single_item() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 2), None);
        assert_eq!(toggle(Some(1), 3), Some(3));
    }
}
