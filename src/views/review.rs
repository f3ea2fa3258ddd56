use crate::dashboard::PendingItem;
use crate::views::evergreen::HistoryDetailDialog;
use crate::views::shared::use_console;
use dioxus::prelude::*;

#[component]
pub fn ReviewView() -> Element {
    let console = use_console();
    let t = console.t();
    let review = console.state.read().review.clone();
    let title = t.text("review_title");
    let pending_title = t.text("review_pending_title");
    let awaiting = t.text("review_awaiting");
    let none = t.text("review_none");
    let today_title = t.text("review_today_title");
    let empty = t.text("review_empty");
    let untitled = t.text("hist_untitled");
    let loading = t.text("loading");
    let refresh = t.text("btn_refresh");
    let pending_count = review.pending.len();
    let show_loading = review.loading && review.pending.is_empty();
    let dictating = review.dictating;
    let pending = review.pending;
    let today: Vec<(String, String, String)> = review
        .today
        .into_iter()
        .map(|thread| {
            let title = thread
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| untitled.to_string());
            (thread.session_id, title, thread.status)
        })
        .collect();

    rsx! {
        div { class: "main-container",
            div { class: "card-header",
                h4 { "{title}" }
                button {
                    class: "btn btn-sm btn-outline-secondary",
                    r#type: "button",
                    onclick: move |_| console.run(|dashboard| async move { dashboard.load_review().await }),
                    "{refresh}"
                }
            }
            div { class: "review-columns",
                section { class: "review-pending",
                    h5 { "{pending_title} " span { class: "badge bg-warning", "{pending_count} {awaiting}" } }
                    if show_loading {
                        div { class: "shimmer-text", "{loading}" }
                    } else if pending_count == 0 {
                        p { class: "text-muted", "{none}" }
                    }
                    for item in pending {
                        ReviewCard {
                            key: "{item.id}",
                            dictating: dictating == Some(item.id),
                            item,
                        }
                    }
                }
                section { class: "review-today",
                    h5 { "{today_title}" }
                    if today.is_empty() {
                        p { class: "text-muted", "{empty}" }
                    }
                    ul { class: "list-group",
                        for (session_id, thread_title, status) in today {
                            li {
                                class: "list-group-item clickable",
                                onclick: move |_| {
                                    let session_id = session_id.clone();
                                    console.run(|dashboard| async move { dashboard.show_history_detail(&session_id).await });
                                },
                                span { "{thread_title}" }
                                span { class: "badge bg-success", "{status}" }
                            }
                        }
                    }
                }
            }
            HistoryDetailDialog {}
        }
    }
}

#[component]
fn ReviewCard(item: PendingItem, dictating: bool) -> Element {
    let console = use_console();
    let t = console.t();
    let id = item.id;
    let approve = t.text("btn_approve");
    let reject = t.text("btn_reject");
    let mic_class = if dictating {
        "btn btn-sm btn-danger mic-active"
    } else {
        "btn btn-sm btn-outline-secondary"
    };

    rsx! {
        div { class: "card review-card",
            if let Some(image) = item.image_url.clone() {
                img { class: "card-img-top", src: "{image}", alt: "{item.title}" }
            }
            div { class: "card-body",
                h6 { class: "card-title", "{item.title}" }
                small { class: "text-muted", "{item.date}" }
                textarea {
                    class: "form-control review-editor",
                    rows: "8",
                    value: "{item.draft}",
                    oninput: move |ev| console.core().edit_draft(id, ev.value()),
                }
                div { class: "hstack review-actions",
                    button {
                        class: mic_class,
                        r#type: "button",
                        disabled: dictating,
                        onclick: move |_| console.run(move |dashboard| async move { dashboard.dictate(id).await }),
                        "🎤"
                    }
                    button {
                        class: "btn btn-sm btn-success",
                        r#type: "button",
                        onclick: move |_| console.core().request_approve(id),
                        "{approve}"
                    }
                    button {
                        class: "btn btn-sm btn-outline-danger",
                        r#type: "button",
                        onclick: move |_| console.core().request_reject(id),
                        "{reject}"
                    }
                }
            }
        }
    }
}
