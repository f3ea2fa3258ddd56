use crate::dashboard::{DetailBody, HistoryKind, humanize_timestamp};
use crate::types::{HistoryThread, Role};
use crate::views::shared::{Modal, RichText, markdown_to_html, use_console};
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn EvergreenView() -> Element {
    let console = use_console();
    let t = console.t();
    let (topic, recent, threads, detail_open) = {
        let state = console.state.read();
        (
            state.evergreen_topic.clone(),
            state.histories.evergreen_topics.clone(),
            state.histories.threads.clone(),
            state.histories.detail.is_some(),
        )
    };
    let input_label = t.text("input_topic");
    let placeholder = t.text("ph_evergreen");
    let generate = t.text("btn_generate");
    let recent_title = t.text("hist_recent_topics");
    let history_title = t.text("hist_gen_title");
    let clear = t.text("tt_clear_hist");
    let th_date = t.text("th_date");
    let th_title = t.text("th_title");
    let th_status = t.text("th_status");
    let can_generate = !topic.trim().is_empty();

    rsx! {
        div { class: "main-container",
            RichText { text_key: "help_evergreen", class: "help-text" }
            div { class: "card",
                div { class: "card-body",
                    label { class: "form-label", r#for: "evergreen_topic", "{input_label}" }
                    div { class: "input-group",
                        input {
                            id: "evergreen_topic",
                            class: "form-control",
                            r#type: "text",
                            placeholder: placeholder,
                            value: "{topic}",
                            oninput: move |ev| console.core().set_evergreen_topic(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter {
                                    ev.prevent_default();
                                    console.run(|dashboard| async move { dashboard.trigger_evergreen().await });
                                }
                            },
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !can_generate,
                            onclick: move |_| console.run(|dashboard| async move { dashboard.trigger_evergreen().await }),
                            "{generate}"
                        }
                    }
                    if !recent.is_empty() {
                        div { class: "recent-topics",
                            span { class: "text-muted", "{recent_title}: " }
                            for entry in recent {
                                span { class: "badge bg-light text-dark", title: "{entry.date}", "{entry.action}" }
                            }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h5 { "{history_title}" }
                    button {
                        class: "btn btn-sm btn-outline-secondary",
                        r#type: "button",
                        onclick: move |_| console.core().request_clear_history(HistoryKind::Evergreen),
                        "{clear}"
                    }
                }
                table { class: "table table-sm table-hover",
                    thead { tr { th { "{th_date}" } th { "{th_title}" } th { "{th_status}" } } }
                    tbody {
                        for thread in threads {
                            ThreadRow { key: "{thread.session_id}", thread }
                        }
                    }
                }
            }

            if detail_open {
                HistoryDetailDialog {}
            }
        }
    }
}

#[component]
fn ThreadRow(thread: HistoryThread) -> Element {
    let console = use_console();
    let t = console.t();
    let title = thread
        .title
        .clone()
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| t.text("hist_untitled").to_string());
    let date = thread.date.clone().unwrap_or_default();
    let (badge, status) = if thread.is_completed() {
        ("badge bg-success", t.text("hist_success").to_string())
    } else {
        ("badge bg-secondary", thread.status.clone())
    };
    let session_id = thread.session_id.clone();

    rsx! {
        tr {
            class: "clickable",
            onclick: move |_| {
                let session_id = session_id.clone();
                console.run(|dashboard| async move { dashboard.show_history_detail(&session_id).await });
            },
            td { "{date}" }
            td { "{title}" }
            td { span { class: badge, "{status}" } }
        }
    }
}

#[component]
pub(crate) fn HistoryDetailDialog() -> Element {
    let console = use_console();
    let t = console.t();
    let Some(detail) = console.state.read().histories.detail.clone() else {
        return rsx! {};
    };
    let heading = t.text("hist_detail_title");
    let close = t.text("btn_close");

    let body = match detail.body {
        DetailBody::Loading => {
            let loading = t.text("loading");
            rsx! { div { class: "shimmer-text", "{loading}" } }
        }
        DetailBody::Failed => {
            let failed = t.text("err_history");
            rsx! { div { class: "text-danger", "{failed}" } }
        }
        DetailBody::Loaded(history) => {
            let title = history.title.clone().unwrap_or_default();
            rsx! {
                if !title.is_empty() {
                    h6 { class: "detail-title", "{title}" }
                }
                div { class: "chat-list",
                    for message in history.messages {
                        div { class: format_args!("message-row {}", role_class(&message.role)),
                            div { class: format_args!("bubble {}", role_class(&message.role)),
                                div { class: "md", dangerous_inner_html: markdown_to_html(message.content.as_deref().unwrap_or_default()) }
                            }
                            div { class: "message-meta",
                                span { class: "message-role", "{message.role.as_str()}" }
                                span { class: "message-timestamp", "{humanize_timestamp(&message.timestamp)}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Modal {
            title: format!("{heading} · {}", detail.session_id),
            on_close: move |_| console.core().close_history_detail(),
            {body}
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| console.core().close_history_detail(),
                    "{close}"
                }
            }
        }
    }
}

fn role_class(role: &Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Other(_) => "system",
    }
}
