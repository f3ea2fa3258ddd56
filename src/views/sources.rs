use crate::dashboard::FeedField;
use crate::types::RssFeed;
use crate::views::shared::{Modal, RichText, use_console};
use dioxus::prelude::*;

#[component]
pub fn SourcesView() -> Element {
    let console = use_console();
    let t = console.t();
    let (feeds, modal_open) = {
        let state = console.state.read();
        (state.feeds.items.clone(), state.feeds.modal_open)
    };
    let title = t.text("rss_manager_title");
    let add = t.text("btn_add_feed");
    let delete_all = t.text("btn_delete_sources_txt");
    let th_name = t.text("th_name");
    let th_url = t.text("th_url");
    let th_theme = t.text("th_theme");
    let th_active = t.text("th_active");
    let th_action = t.text("th_action");

    rsx! {
        div { class: "main-container",
            RichText { text_key: "help_rss", class: "help-text" }
            div { class: "card",
                div { class: "card-header",
                    h5 { "{title}" }
                    div { class: "hstack",
                        button {
                            class: "btn btn-sm btn-primary",
                            r#type: "button",
                            title: t.text("tt_add_feed"),
                            onclick: move |_| console.core().open_feed_modal(),
                            "{add}"
                        }
                        button {
                            class: "btn btn-sm btn-outline-danger",
                            r#type: "button",
                            title: t.text("tt_del_sources"),
                            onclick: move |_| console.core().request_delete_all_feeds(),
                            "{delete_all}"
                        }
                    }
                }
                table { class: "table table-sm",
                    thead {
                        tr {
                            th { "{th_name}" }
                            th { "{th_url}" }
                            th { "{th_theme}" }
                            th { "{th_active}" }
                            th { "{th_action}" }
                        }
                    }
                    tbody {
                        for feed in feeds {
                            FeedRow { key: "{feed.id}", feed }
                        }
                    }
                }
            }
            if modal_open {
                FeedDialog {}
            }
        }
    }
}

#[component]
fn FeedRow(feed: RssFeed) -> Element {
    let console = use_console();
    let id = feed.id;
    let theme = if feed.theme.is_empty() {
        "-".to_string()
    } else {
        feed.theme.clone()
    };
    rsx! {
        tr {
            td { "{feed.name}" }
            td { class: "text-truncate", "{feed.url}" }
            td { span { class: "badge bg-info", "{theme}" } }
            td {
                div { class: "form-check form-switch",
                    input {
                        class: "form-check-input",
                        r#type: "checkbox",
                        checked: feed.is_active,
                        onchange: move |_| console.run(move |dashboard| async move { dashboard.toggle_feed(id).await }),
                    }
                }
            }
            td {
                button {
                    class: "btn btn-sm btn-outline-danger",
                    r#type: "button",
                    onclick: move |_| console.core().request_delete_feed(id),
                    "🗑"
                }
            }
        }
    }
}

#[component]
fn FeedDialog() -> Element {
    let console = use_console();
    let t = console.t();
    let draft = console.state.read().feeds.draft.clone();
    let title = t.text("rss_modal_title");
    let save = t.text("btn_save_rss");
    let cancel = t.text("btn_cancel");
    let can_save = !draft.name.trim().is_empty() && !draft.url.trim().is_empty();
    let fields = [
        (FeedField::Name, "th_name", "ph_rss_name", draft.name.clone()),
        (FeedField::Url, "th_url", "ph_rss_url", draft.url.clone()),
        (FeedField::Theme, "th_theme", "ph_rss_theme", draft.theme.clone()),
    ];

    rsx! {
        Modal {
            title: title.to_string(),
            on_close: move |_| console.core().close_feed_modal(),
            for (field, label_key, placeholder_key, value) in fields {
                div { class: "mb-3",
                    label { class: "form-label", "{t.text(label_key)}" }
                    input {
                        class: "form-control",
                        r#type: if field == FeedField::Url { "url" } else { "text" },
                        placeholder: t.text(placeholder_key),
                        value: "{value}",
                        oninput: move |ev| console.core().set_feed_draft(field, ev.value()),
                    }
                }
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| console.core().close_feed_modal(),
                    "{cancel}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_save,
                    onclick: move |_| console.run(|dashboard| async move { dashboard.create_feed().await }),
                    "{save}"
                }
            }
        }
    }
}
