use crate::views::shared::{RichText, use_console};
use dioxus::prelude::*;

const SECTIONS: [(&str, &str); 3] = [
    ("man_intro_t", "man_intro_d"),
    ("man_setup_t", "man_setup_d"),
    ("man_gen_t", "man_gen_d"),
];

const POLICIES: [(&str, &str); 2] = [("pol_priv_t", "pol_priv_d"), ("pol_terms_t", "pol_terms_d")];

#[component]
pub fn ManualView() -> Element {
    let console = use_console();
    let t = console.t();
    let mut show_policies = use_signal(|| false);
    let policies_label = t.text("btn_policies");
    let policies_title = t.text("pol_title");

    rsx! {
        div { class: "main-container manual-view",
            for (title_key, body_key) in SECTIONS {
                div { class: "card manual-section",
                    div { class: "card-header", h5 { "{t.text(title_key)}" } }
                    RichText { text_key: body_key, class: "card-body" }
                }
            }
            button {
                class: "btn btn-outline-secondary",
                r#type: "button",
                onclick: move |_| show_policies.set(!show_policies()),
                "{policies_label}"
            }
            if show_policies() {
                div { class: "card manual-section",
                    div { class: "card-header", h5 { "{policies_title}" } }
                    for (title_key, body_key) in POLICIES {
                        div { class: "card-body",
                            h6 { "{t.text(title_key)}" }
                            RichText { text_key: body_key }
                        }
                    }
                }
            }
        }
    }
}
