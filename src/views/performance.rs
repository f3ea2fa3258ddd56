use crate::dashboard::{CYCLE_PRESETS, HistoryKind, PERF_FIELDS};
use crate::types::ControlAction;
use crate::views::shared::{Modal, RichText, gauge_width, use_console};
use dioxus::prelude::*;

#[component]
pub fn PerformanceView() -> Element {
    let console = use_console();
    let t = console.t();
    let (gauges, interval, threads, interval_label, optimizations, cycle_open) = {
        let state = console.state.read();
        (
            state.performance.clone(),
            state.settings.field(PERF_FIELDS[0]).to_string(),
            state.settings.field(PERF_FIELDS[1]).to_string(),
            state.settings.interval_label(),
            state.histories.optimizations.clone(),
            state.cycle.open,
        )
    };
    let meters = [
        ("perf_cpu", gauges.cpu),
        ("perf_ram", gauges.ram),
        ("perf_disk", gauges.disk),
    ]
    .map(|(label_key, value)| (label_key, gauge_width(value), format!("{value:.0}%")));
    let advanced = t.text("lbl_advanced");
    let frequency = t.text("lbl_frequency");
    let threads_label = t.text("lbl_ai_threads");
    let apply = t.text("btn_apply_perf");
    let cycle = t.text("btn_cycle");
    let optimize = t.text("btn_optimize");
    let history_title = t.text("hist_opt_title");
    let clear = t.text("tt_clear_hist");
    let clear_all = t.text("btn_clear_global");
    let th_date = t.text("th_date");
    let th_action = t.text("th_action");

    rsx! {
        div { class: "main-container",
            RichText { text_key: "help_perf", class: "help-text" }
            div { class: "gauge-grid",
                for (label_key, width, reading) in meters {
                    div { class: "card gauge-card",
                        div { class: "gauge-label", "{t.text(label_key)}" }
                        div { class: "gauge-track",
                            div { class: "gauge-fill", style: width }
                        }
                        div { class: "gauge-value", "{reading}" }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header", h5 { "{advanced}" } }
                div { class: "card-body",
                    div { class: "mb-3",
                        label { class: "form-label", r#for: "execution_interval",
                            "{frequency} "
                            span { class: "text-muted", "({interval_label})" }
                        }
                        input {
                            id: "execution_interval",
                            class: "form-control",
                            r#type: "number",
                            min: "60",
                            value: "{interval}",
                            oninput: move |ev| console.core().edit_field(PERF_FIELDS[0], ev.value()),
                        }
                    }
                    div { class: "mb-3",
                        label { class: "form-label", r#for: "max_ai_threads", "{threads_label} ({threads})" }
                        input {
                            id: "max_ai_threads",
                            class: "form-range",
                            r#type: "range",
                            min: "1",
                            max: "10",
                            value: "{threads}",
                            oninput: move |ev| console.core().edit_field(PERF_FIELDS[1], ev.value()),
                        }
                    }
                    div { class: "hstack",
                        button {
                            class: "btn btn-warning",
                            r#type: "button",
                            onclick: move |_| console.run(|dashboard| async move { dashboard.save_perf_settings().await }),
                            "{apply}"
                        }
                        button {
                            class: "btn btn-outline-primary",
                            r#type: "button",
                            title: t.text("tt_cycles"),
                            onclick: move |_| console.run(|dashboard| async move { dashboard.open_cycle_modal().await }),
                            "{cycle}"
                        }
                        button {
                            class: "btn btn-outline-success",
                            r#type: "button",
                            title: t.text("tt_optimize"),
                            onclick: move |_| console.core().request_control(ControlAction::Optimize),
                            "{optimize}"
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h5 { "{history_title}" }
                    div { class: "hstack",
                        button {
                            class: "btn btn-sm btn-outline-secondary",
                            r#type: "button",
                            onclick: move |_| console.core().request_clear_history(HistoryKind::Perf),
                            "{clear}"
                        }
                        button {
                            class: "btn btn-sm btn-outline-danger",
                            r#type: "button",
                            onclick: move |_| console.core().request_clear_all_histories(),
                            "{clear_all}"
                        }
                    }
                }
                table { class: "table table-sm",
                    thead { tr { th { "{th_date}" } th { "{th_action}" } } }
                    tbody {
                        for entry in optimizations {
                            tr { td { "{entry.date}" } td { "{entry.action}" } }
                        }
                    }
                }
            }

            if cycle_open {
                CycleDialog {}
            }
        }
    }
}

#[component]
fn CycleDialog() -> Element {
    let console = use_console();
    let t = console.t();
    let minutes = console.state.read().cycle.minutes;
    let title = t.text("modal_cycle_title");
    let interval_label = t.text("lbl_cycle_interval");
    let save = t.text("btn_save");
    let cancel = t.text("btn_cancel");

    rsx! {
        Modal {
            title: title.to_string(),
            on_close: move |_| console.core().close_cycle_modal(),
            RichText { text_key: "cycle_info", class: "text-muted mb-3" }
            div { class: "btn-group mb-3",
                for preset in CYCLE_PRESETS {
                    button {
                        class: if preset == minutes { "btn btn-primary" } else { "btn btn-outline-primary" },
                        r#type: "button",
                        onclick: move |_| console.core().set_cycle(preset),
                        "{preset} min"
                    }
                }
            }
            label { class: "form-label", r#for: "cycle_minutes", "{interval_label}: {minutes} min" }
            input {
                id: "cycle_minutes",
                class: "form-control",
                r#type: "range",
                min: "15",
                max: "720",
                step: "15",
                value: "{minutes}",
                oninput: move |ev| {
                    if let Ok(value) = ev.value().trim().parse::<u32>() {
                        console.core().set_cycle(value);
                    }
                },
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| console.core().close_cycle_modal(),
                    "{cancel}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| console.run(|dashboard| async move { dashboard.save_cycle().await }),
                    "{save}"
                }
            }
        }
    }
}
