use crate::dashboard::ControlPanel;
use crate::types::ControlAction;
use crate::views::shared::use_console;
use dioxus::prelude::*;

#[component]
pub fn OverviewView() -> Element {
    let console = use_console();
    let t = console.t();
    let (stats, system, logs) = {
        let state = console.state.read();
        (state.stats.clone(), state.system, state.logs.clone())
    };
    let panel = ControlPanel::for_state(system);
    let main_label = t.text(panel.main_label_key);
    let main_action = panel.main_action;
    let cards = [
        ("stat_total_label", "stat_total_tooltip", stats.total_articles),
        ("stat_today_label", "stat_today_tooltip", stats.today),
        ("stat_pending_label", "stat_pending_tooltip", stats.pending),
        ("stat_cache_label", "stat_cache_tooltip", stats.cache_count),
    ];
    let control_title = t.text("cp_title");
    let pause_label = t.text("btn_pause");
    let log_title = t.text("log_title");
    let refresh_label = t.text("btn_refresh");
    let clear_label = t.text("btn_clear_logs");

    rsx! {
        div { class: "main-container",
            div { class: "stat-grid",
                for (label_key, tooltip_key, value) in cards {
                    div { class: "card stat-card", title: t.text(tooltip_key),
                        div { class: "stat-label", "{t.text(label_key)}" }
                        div { class: "stat-value", "{value}" }
                    }
                }
            }

            div { class: "card control-card",
                div { class: "card-header",
                    h5 { "{control_title}" }
                    span { class: format_args!("badge {}", panel.badge_class), "{panel.badge_label}" }
                }
                div { class: "card-body control-buttons",
                    button {
                        class: panel.main_class,
                        r#type: "button",
                        onclick: move |_| console.core().request_control(main_action),
                        "{main_label}"
                    }
                    button {
                        class: "btn btn-warning",
                        r#type: "button",
                        disabled: !panel.pause_enabled,
                        onclick: move |_| console.core().request_control(ControlAction::Pause),
                        "{pause_label}"
                    }
                }
            }

            div { class: "card log-card",
                div { class: "card-header",
                    h5 { "{log_title}" }
                    div { class: "hstack",
                        button {
                            class: "btn btn-sm btn-outline-secondary",
                            r#type: "button",
                            onclick: move |_| console.run(|dashboard| async move { dashboard.load_logs().await }),
                            "{refresh_label}"
                        }
                        button {
                            class: "btn btn-sm btn-outline-danger",
                            r#type: "button",
                            onclick: move |_| console.run(|dashboard| async move { dashboard.clear_logs().await }),
                            "{clear_label}"
                        }
                    }
                }
                pre { class: "log-console",
                    for line in logs {
                        div { class: "log-line", "{line}" }
                    }
                }
            }
        }
    }
}
